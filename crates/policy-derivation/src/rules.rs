//! Rule table: one exhaustive classification per commitment dimension
//!
//! Each chosen value is either an affirmative commitment, which yields the
//! negation of that commitment as a statement, or a no-commitment sentinel,
//! which yields nothing. Nothing promised means nothing can be violated.

use policy_types::{
    Accuracy, CorrectionTimeframe, FeedbackChannel, FeedbackMechanism, Independence,
    ReviewSchedule, Sourcing, TransparencyFlag,
};
use std::borrow::Cow;

/// Classification of one chosen value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A positive standard; carries the statement describing its violation
    Affirmative(Cow<'static, str>),
    /// The value declares the absence of a standard
    NoCommitment,
}

impl Rule {
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Rule::Affirmative(_))
    }

    pub fn into_statement(self) -> Option<String> {
        match self {
            Rule::Affirmative(statement) => Some(statement.into_owned()),
            Rule::NoCommitment => None,
        }
    }
}

fn affirmative(statement: &'static str) -> Rule {
    Rule::Affirmative(Cow::Borrowed(statement))
}

/// Sourcing has no sentinel: every option is a standard
pub fn sourcing(value: Sourcing) -> Rule {
    match value {
        Sourcing::SingleVerified => affirmative(
            "Publishing a claim without verifying it with at least one reliable source is malpublishing for you.",
        ),
        Sourcing::TwoIndependent => affirmative(
            "Publishing without verification from two independent sources is malpublishing for you.",
        ),
        Sourcing::ThreeOrMore => affirmative(
            "Publishing without verification from at least three independent sources is malpublishing for you.",
        ),
        Sourcing::Varies => affirmative(
            "Publishing without meeting the sourcing requirement you set for that type of story is malpublishing for you.",
        ),
    }
}

pub fn accuracy(value: Accuracy) -> Rule {
    match value {
        Accuracy::FormalProcess => affirmative(
            "Publishing content that has not gone through your documented fact-checking workflow is malpublishing for you.",
        ),
        Accuracy::EditorReview => affirmative(
            "Publishing content that has not been reviewed by an editor is malpublishing for you.",
        ),
        Accuracy::SelfVerified => affirmative(
            "Publishing content that its author has not verified is malpublishing for you.",
        ),
        Accuracy::NoFormal => Rule::NoCommitment,
    }
}

/// A transparency flag is a commitment only when it is set
pub fn transparency(flag: TransparencyFlag, enabled: bool) -> Rule {
    if !enabled {
        return Rule::NoCommitment;
    }
    match flag {
        TransparencyFlag::Funding => {
            affirmative("Failing to disclose who funds your work is malpublishing for you.")
        }
        TransparencyFlag::Ownership => {
            affirmative("Failing to disclose who owns your organization is malpublishing for you.")
        }
        TransparencyFlag::Corrections => affirmative(
            "Correcting content without recording it in your public corrections log is malpublishing for you.",
        ),
        TransparencyFlag::EditorialProcess => affirmative(
            "Failing to explain how you produce your content is malpublishing for you.",
        ),
    }
}

pub fn independence(value: Independence) -> Rule {
    match value {
        Independence::DisclosurePolicy => affirmative(
            "Publishing without disclosing a relevant conflict of interest is malpublishing for you.",
        ),
        Independence::RecusalPolicy => affirmative(
            "Covering a topic where you have a conflict of interest instead of recusing yourself is malpublishing for you.",
        ),
        Independence::NoFormal => Rule::NoCommitment,
    }
}

pub fn correction_timeframe(value: CorrectionTimeframe) -> Rule {
    match value {
        CorrectionTimeframe::Within24Hours => affirmative(
            "Leaving a confirmed error uncorrected for more than 24 hours is malpublishing for you.",
        ),
        CorrectionTimeframe::Within48Hours => affirmative(
            "Leaving a confirmed error uncorrected for more than 48 hours is malpublishing for you.",
        ),
        CorrectionTimeframe::WithinOneWeek => affirmative(
            "Leaving a confirmed error uncorrected for more than one week is malpublishing for you.",
        ),
        CorrectionTimeframe::NoPolicy => Rule::NoCommitment,
    }
}

/// One combined statement for all selected channels, never one per channel.
///
/// An empty selection is blocked by the accountability validator before
/// derivation runs; it classifies as no commitment so the function stays
/// total.
pub fn feedback_mechanism(value: &FeedbackMechanism) -> Rule {
    let phrases: Vec<&'static str> = value.iter().map(channel_phrase).collect();
    let channels = match phrases.as_slice() {
        [] => return Rule::NoCommitment,
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    };
    Rule::Affirmative(Cow::Owned(format!(
        "Leaving concerns raised through {} unanswered is malpublishing for you.",
        channels
    )))
}

fn channel_phrase(channel: FeedbackChannel) -> &'static str {
    match channel {
        FeedbackChannel::Email => "email",
        FeedbackChannel::Form => "your contact form",
        FeedbackChannel::PublicComment => "public comments",
    }
}

/// Review schedule has no sentinel: every option is a standard
pub fn review_schedule(value: ReviewSchedule) -> Rule {
    match value {
        ReviewSchedule::Quarterly => affirmative(
            "Letting this policy go more than three months without review is malpublishing for you.",
        ),
        ReviewSchedule::Annually => affirmative(
            "Letting this policy go more than a year without review is malpublishing for you.",
        ),
        ReviewSchedule::AsNeeded => affirmative(
            "Leaving this policy unreviewed when circumstances require an update is malpublishing for you.",
        ),
    }
}
