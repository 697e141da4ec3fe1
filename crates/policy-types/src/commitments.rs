//! Editorial commitments: the standards an organization declares it holds
//!
//! Each dimension is a closed choice set. Labels and descriptions are the
//! texts shown next to each option in the builder.

use crate::error::{PolicyTypesError, PolicyTypesResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many independent sources are required before publishing a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sourcing {
    SingleVerified,
    TwoIndependent,
    ThreeOrMore,
    Varies,
}

impl Sourcing {
    pub const ALL: [Sourcing; 4] = [
        Sourcing::SingleVerified,
        Sourcing::TwoIndependent,
        Sourcing::ThreeOrMore,
        Sourcing::Varies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sourcing::SingleVerified => "single_verified",
            Sourcing::TwoIndependent => "two_independent",
            Sourcing::ThreeOrMore => "three_or_more",
            Sourcing::Varies => "varies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sourcing::SingleVerified => "Single verified source",
            Sourcing::TwoIndependent => "Two independent sources",
            Sourcing::ThreeOrMore => "Three or more sources",
            Sourcing::Varies => "Varies by story type",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Sourcing::SingleVerified => "We verify claims with at least one reliable source",
            Sourcing::TwoIndependent => {
                "We require verification from at least two independent sources"
            }
            Sourcing::ThreeOrMore => "We require verification from multiple independent sources",
            Sourcing::Varies => {
                "Our sourcing requirements vary based on the nature of the content"
            }
        }
    }
}

/// Fact-checking process applied before publication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accuracy {
    FormalProcess,
    EditorReview,
    SelfVerified,
    /// No fact-checking standard declared
    NoFormal,
}

impl Accuracy {
    pub const ALL: [Accuracy; 4] = [
        Accuracy::FormalProcess,
        Accuracy::EditorReview,
        Accuracy::SelfVerified,
        Accuracy::NoFormal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Accuracy::FormalProcess => "formal_process",
            Accuracy::EditorReview => "editor_review",
            Accuracy::SelfVerified => "self_verified",
            Accuracy::NoFormal => "no_formal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Accuracy::FormalProcess => "Formal fact-checking process",
            Accuracy::EditorReview => "Editor review",
            Accuracy::SelfVerified => "Author verification",
            Accuracy::NoFormal => "No formal process",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Accuracy::FormalProcess => "We have a documented fact-checking workflow",
            Accuracy::EditorReview => "All content is reviewed by an editor before publication",
            Accuracy::SelfVerified => "Authors are responsible for verifying their own work",
            Accuracy::NoFormal => "We do not have a formal fact-checking process",
        }
    }
}

/// How conflicts of interest are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Independence {
    DisclosurePolicy,
    RecusalPolicy,
    /// No conflict-of-interest standard declared
    NoFormal,
}

impl Independence {
    pub const ALL: [Independence; 3] = [
        Independence::DisclosurePolicy,
        Independence::RecusalPolicy,
        Independence::NoFormal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Independence::DisclosurePolicy => "disclosure_policy",
            Independence::RecusalPolicy => "recusal_policy",
            Independence::NoFormal => "no_formal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Independence::DisclosurePolicy => "Disclosure policy",
            Independence::RecusalPolicy => "Recusal policy",
            Independence::NoFormal => "No formal policy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Independence::DisclosurePolicy => "We disclose relevant conflicts of interest",
            Independence::RecusalPolicy => {
                "Staff recuse themselves from covering topics where they have conflicts"
            }
            Independence::NoFormal => "We do not have a formal conflict of interest policy",
        }
    }
}

/// One of the four independent transparency disclosures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransparencyFlag {
    Funding,
    Ownership,
    Corrections,
    EditorialProcess,
}

impl TransparencyFlag {
    pub const ALL: [TransparencyFlag; 4] = [
        TransparencyFlag::Funding,
        TransparencyFlag::Ownership,
        TransparencyFlag::Corrections,
        TransparencyFlag::EditorialProcess,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransparencyFlag::Funding => "funding",
            TransparencyFlag::Ownership => "ownership",
            TransparencyFlag::Corrections => "corrections",
            TransparencyFlag::EditorialProcess => "editorial_process",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransparencyFlag::Funding => "Funding sources",
            TransparencyFlag::Ownership => "Ownership structure",
            TransparencyFlag::Corrections => "Corrections log",
            TransparencyFlag::EditorialProcess => "Editorial process",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TransparencyFlag::Funding => "We disclose who funds our work",
            TransparencyFlag::Ownership => "We disclose who owns our organization",
            TransparencyFlag::Corrections => "We maintain a public record of corrections",
            TransparencyFlag::EditorialProcess => "We explain how we produce our content",
        }
    }
}

/// Transparency disclosures. `false` means nothing was promised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Transparency {
    pub funding: bool,
    pub ownership: bool,
    pub corrections: bool,
    pub editorial_process: bool,
}

impl Transparency {
    pub fn get(&self, flag: TransparencyFlag) -> bool {
        match flag {
            TransparencyFlag::Funding => self.funding,
            TransparencyFlag::Ownership => self.ownership,
            TransparencyFlag::Corrections => self.corrections,
            TransparencyFlag::EditorialProcess => self.editorial_process,
        }
    }

    pub fn set(&mut self, flag: TransparencyFlag, value: bool) {
        let slot = match flag {
            TransparencyFlag::Funding => &mut self.funding,
            TransparencyFlag::Ownership => &mut self.ownership,
            TransparencyFlag::Corrections => &mut self.corrections,
            TransparencyFlag::EditorialProcess => &mut self.editorial_process,
        };
        *slot = value;
    }

    /// Flip one flag, returning its new value
    pub fn toggle(&mut self, flag: TransparencyFlag) -> bool {
        let value = !self.get(flag);
        self.set(flag, value);
        value
    }

    /// Builder-style helper
    pub fn with(mut self, flag: TransparencyFlag) -> Self {
        self.set(flag, true);
        self
    }

    /// Flags currently enabled, in display order
    pub fn enabled(&self) -> Vec<TransparencyFlag> {
        TransparencyFlag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag))
            .collect()
    }
}

/// The editorial standards section of a draft
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorialCommitments {
    pub sourcing: Sourcing,
    pub accuracy: Accuracy,
    pub transparency: Transparency,
    pub independence: Independence,
}

impl Default for EditorialCommitments {
    fn default() -> Self {
        Self {
            sourcing: Sourcing::TwoIndependent,
            accuracy: Accuracy::EditorReview,
            transparency: Transparency::default(),
            independence: Independence::DisclosurePolicy,
        }
    }
}

impl FromStr for Sourcing {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        Sourcing::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("sourcing", s))
    }
}

impl FromStr for Accuracy {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        Accuracy::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("accuracy", s))
    }
}

impl FromStr for Independence {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        Independence::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("independence", s))
    }
}

impl FromStr for TransparencyFlag {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        TransparencyFlag::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("transparency", s))
    }
}

impl fmt::Display for Sourcing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Independence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TransparencyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_commitments() {
        let c = EditorialCommitments::default();
        assert_eq!(c.sourcing, Sourcing::TwoIndependent);
        assert_eq!(c.accuracy, Accuracy::EditorReview);
        assert_eq!(c.independence, Independence::DisclosurePolicy);
        assert!(c.transparency.enabled().is_empty());
    }

    #[test]
    fn test_wire_values_match_serde() {
        for s in Sourcing::ALL {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
            assert_eq!(s.as_str().parse::<Sourcing>().unwrap(), s);
        }
        for a in Accuracy::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.as_str()));
        }
        for i in Independence::ALL {
            let json = serde_json::to_string(&i).unwrap();
            assert_eq!(json, format!("\"{}\"", i.as_str()));
        }
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = "four_sources".parse::<Sourcing>().unwrap_err();
        assert_eq!(
            err,
            PolicyTypesError::UnknownValue {
                field: "sourcing",
                value: "four_sources".into()
            }
        );
        assert!(serde_json::from_str::<Accuracy>("\"peer_review\"").is_err());
    }

    #[test]
    fn test_transparency_toggle() {
        let mut t = Transparency::default();
        assert!(t.toggle(TransparencyFlag::Corrections));
        assert!(t.corrections);
        assert_eq!(t.enabled(), vec![TransparencyFlag::Corrections]);
        assert!(!t.toggle(TransparencyFlag::Corrections));
        assert!(t.enabled().is_empty());
    }

    #[test]
    fn test_commitments_deserialize_from_builder_payload() {
        let json = r#"{
            "sourcing": "three_or_more",
            "accuracy": "no_formal",
            "transparency": {"funding": true, "ownership": false, "corrections": false, "editorial_process": true},
            "independence": "recusal_policy"
        }"#;
        let c: EditorialCommitments = serde_json::from_str(json).unwrap();
        assert_eq!(c.sourcing, Sourcing::ThreeOrMore);
        assert_eq!(c.accuracy, Accuracy::NoFormal);
        assert_eq!(
            c.transparency.enabled(),
            vec![TransparencyFlag::Funding, TransparencyFlag::EditorialProcess]
        );
        assert_eq!(c.independence, Independence::RecusalPolicy);
    }
}
