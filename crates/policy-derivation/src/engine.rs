//! Derivation engine: walks the canonical dimension order and consults the
//! rule table for each chosen value.

use crate::rules;
use policy_types::{
    AccountabilityFramework, Dimension, EditorialCommitments, MalpublishDefinition, PolicyDraft,
    TransparencyFlag,
};

/// Maps committed choices to malpublishing definitions
#[derive(Clone, Copy, Debug, Default)]
pub struct DerivationEngine;

impl DerivationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Definitions for the given sections, in canonical dimension order
    pub fn derive(
        &self,
        commitments: &EditorialCommitments,
        accountability: &AccountabilityFramework,
    ) -> Vec<MalpublishDefinition> {
        Dimension::CANONICAL_ORDER
            .into_iter()
            .filter_map(|dimension| self.definition_for(dimension, commitments, accountability))
            .collect()
    }

    pub fn derive_draft(&self, draft: &PolicyDraft) -> Vec<MalpublishDefinition> {
        self.derive(&draft.commitments, &draft.accountability)
    }

    /// The definition one dimension contributes, if its value is affirmative
    pub fn definition_for(
        &self,
        dimension: Dimension,
        commitments: &EditorialCommitments,
        accountability: &AccountabilityFramework,
    ) -> Option<MalpublishDefinition> {
        let (chosen_value, rule) = match dimension {
            Dimension::Sourcing => (
                commitments.sourcing.as_str().to_string(),
                rules::sourcing(commitments.sourcing),
            ),
            Dimension::Accuracy => (
                commitments.accuracy.as_str().to_string(),
                rules::accuracy(commitments.accuracy),
            ),
            Dimension::TransparencyFunding => {
                transparency_value(commitments, TransparencyFlag::Funding)
            }
            Dimension::TransparencyOwnership => {
                transparency_value(commitments, TransparencyFlag::Ownership)
            }
            Dimension::TransparencyCorrections => {
                transparency_value(commitments, TransparencyFlag::Corrections)
            }
            Dimension::TransparencyEditorialProcess => {
                transparency_value(commitments, TransparencyFlag::EditorialProcess)
            }
            Dimension::Independence => (
                commitments.independence.as_str().to_string(),
                rules::independence(commitments.independence),
            ),
            Dimension::CorrectionTimeframe => (
                accountability.correction_timeframe.as_str().to_string(),
                rules::correction_timeframe(accountability.correction_timeframe),
            ),
            Dimension::FeedbackMechanism => (
                accountability.feedback_mechanism.wire_value(),
                rules::feedback_mechanism(&accountability.feedback_mechanism),
            ),
            Dimension::ReviewSchedule => (
                accountability.review_schedule.as_str().to_string(),
                rules::review_schedule(accountability.review_schedule),
            ),
        };

        rule.into_statement()
            .map(|statement| MalpublishDefinition::new(dimension, chosen_value, statement))
    }
}

fn transparency_value(
    commitments: &EditorialCommitments,
    flag: TransparencyFlag,
) -> (String, rules::Rule) {
    let enabled = commitments.transparency.get(flag);
    (enabled.to_string(), rules::transparency(flag, enabled))
}

/// Shorthand for [`DerivationEngine::derive`]
pub fn derive(
    commitments: &EditorialCommitments,
    accountability: &AccountabilityFramework,
) -> Vec<MalpublishDefinition> {
    DerivationEngine::new().derive(commitments, accountability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_types::{
        Accuracy, CorrectionTimeframe, FeedbackChannel, FeedbackMechanism, Independence,
        ReviewSchedule, Sourcing, Transparency,
    };
    use proptest::prelude::*;

    fn fields(defs: &[MalpublishDefinition]) -> Vec<Dimension> {
        defs.iter().map(|d| d.source_field).collect()
    }

    #[test]
    fn test_baseline_yields_six() {
        let defs = derive(
            &EditorialCommitments::default(),
            &AccountabilityFramework::default(),
        );
        assert_eq!(
            fields(&defs),
            vec![
                Dimension::Sourcing,
                Dimension::Accuracy,
                Dimension::Independence,
                Dimension::CorrectionTimeframe,
                Dimension::FeedbackMechanism,
                Dimension::ReviewSchedule,
            ]
        );
        assert_eq!(defs[0].chosen_value, "two_independent");
        assert_eq!(defs[3].chosen_value, "48h");
        assert_eq!(defs[4].chosen_value, "email");
    }

    #[test]
    fn test_transparency_is_additive() {
        let baseline = derive(
            &EditorialCommitments::default(),
            &AccountabilityFramework::default(),
        );

        let mut commitments = EditorialCommitments::default();
        commitments.transparency.funding = true;
        commitments.transparency.corrections = true;
        let defs = derive(&commitments, &AccountabilityFramework::default());

        assert_eq!(defs.len(), 8);
        assert_eq!(defs[2].source_field, Dimension::TransparencyFunding);
        assert_eq!(defs[2].chosen_value, "true");
        assert_eq!(defs[3].source_field, Dimension::TransparencyCorrections);

        let others: Vec<_> = defs
            .iter()
            .filter(|d| {
                !matches!(
                    d.source_field,
                    Dimension::TransparencyFunding | Dimension::TransparencyCorrections
                )
            })
            .cloned()
            .collect();
        assert_eq!(others, baseline);
    }

    #[test]
    fn test_no_formal_accuracy_is_suppressed() {
        let baseline = derive(
            &EditorialCommitments::default(),
            &AccountabilityFramework::default(),
        );

        let commitments = EditorialCommitments {
            accuracy: Accuracy::NoFormal,
            ..Default::default()
        };
        let defs = derive(&commitments, &AccountabilityFramework::default());

        assert_eq!(defs.len(), 5);
        assert!(!fields(&defs).contains(&Dimension::Accuracy));
        let expected: Vec<_> = baseline
            .into_iter()
            .filter(|d| d.source_field != Dimension::Accuracy)
            .collect();
        assert_eq!(defs, expected);
    }

    #[test]
    fn test_all_sentinels_leave_sourcing_feedback_and_review() {
        let commitments = EditorialCommitments {
            accuracy: Accuracy::NoFormal,
            independence: Independence::NoFormal,
            ..Default::default()
        };
        let accountability = AccountabilityFramework {
            correction_timeframe: CorrectionTimeframe::NoPolicy,
            ..Default::default()
        };
        let defs = derive(&commitments, &accountability);
        assert_eq!(
            fields(&defs),
            vec![
                Dimension::Sourcing,
                Dimension::FeedbackMechanism,
                Dimension::ReviewSchedule
            ]
        );
    }

    #[test]
    fn test_feedback_is_one_combined_definition() {
        let accountability = AccountabilityFramework {
            feedback_mechanism: FeedbackMechanism::from_channels(FeedbackChannel::ALL),
            ..Default::default()
        };
        let defs = derive(&EditorialCommitments::default(), &accountability);
        let feedback: Vec<_> = defs
            .iter()
            .filter(|d| d.source_field == Dimension::FeedbackMechanism)
            .collect();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].chosen_value, "email,form,public_comment");
    }

    fn arb_commitments() -> impl Strategy<Value = EditorialCommitments> {
        (
            prop::sample::select(Sourcing::ALL.to_vec()),
            prop::sample::select(Accuracy::ALL.to_vec()),
            any::<[bool; 4]>(),
            prop::sample::select(Independence::ALL.to_vec()),
        )
            .prop_map(|(sourcing, accuracy, flags, independence)| EditorialCommitments {
                sourcing,
                accuracy,
                transparency: Transparency {
                    funding: flags[0],
                    ownership: flags[1],
                    corrections: flags[2],
                    editorial_process: flags[3],
                },
                independence,
            })
    }

    fn arb_accountability() -> impl Strategy<Value = AccountabilityFramework> {
        (
            prop::sample::select(CorrectionTimeframe::ALL.to_vec()),
            prop::sample::subsequence(FeedbackChannel::ALL.to_vec(), 1..=3),
            "[a-zA-Z ]{0,20}",
            prop::sample::select(ReviewSchedule::ALL.to_vec()),
        )
            .prop_map(|(timeframe, channels, contact, review)| AccountabilityFramework {
                correction_timeframe: timeframe,
                feedback_mechanism: FeedbackMechanism::from_channels(channels),
                accountability_contact: contact,
                review_schedule: review,
            })
    }

    proptest! {
        #[test]
        fn derivation_is_deterministic(c in arb_commitments(), a in arb_accountability()) {
            prop_assert_eq!(derive(&c, &a), derive(&c, &a));
        }

        #[test]
        fn output_follows_canonical_order(c in arb_commitments(), a in arb_accountability()) {
            let positions: Vec<usize> = derive(&c, &a)
                .iter()
                .map(|d| d.source_field.position())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(positions, sorted);
        }

        #[test]
        fn count_matches_affirmative_choices(c in arb_commitments(), a in arb_accountability()) {
            let expected = 1 // sourcing
                + usize::from(c.accuracy != Accuracy::NoFormal)
                + c.transparency.enabled().len()
                + usize::from(c.independence != Independence::NoFormal)
                + usize::from(a.correction_timeframe != CorrectionTimeframe::NoPolicy)
                + 1 // feedback, non-empty
                + 1; // review
            prop_assert_eq!(derive(&c, &a).len(), expected);
        }

        #[test]
        fn contact_never_affects_definitions(c in arb_commitments(), a in arb_accountability(), contact in ".{0,30}") {
            let mut other = a.clone();
            other.accountability_contact = contact;
            prop_assert_eq!(derive(&c, &a), derive(&c, &other));
        }
    }
}
