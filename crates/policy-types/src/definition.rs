//! Malpublishing definitions and the commitment dimensions they come from

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single categorical choice in the commitments or accountability section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "sourcing")]
    Sourcing,
    #[serde(rename = "accuracy")]
    Accuracy,
    #[serde(rename = "transparency.funding")]
    TransparencyFunding,
    #[serde(rename = "transparency.ownership")]
    TransparencyOwnership,
    #[serde(rename = "transparency.corrections")]
    TransparencyCorrections,
    #[serde(rename = "transparency.editorial_process")]
    TransparencyEditorialProcess,
    #[serde(rename = "independence")]
    Independence,
    #[serde(rename = "correction_timeframe")]
    CorrectionTimeframe,
    #[serde(rename = "feedback_mechanism")]
    FeedbackMechanism,
    #[serde(rename = "review_schedule")]
    ReviewSchedule,
}

impl Dimension {
    /// Order in which definitions are emitted
    pub const CANONICAL_ORDER: [Dimension; 10] = [
        Dimension::Sourcing,
        Dimension::Accuracy,
        Dimension::TransparencyFunding,
        Dimension::TransparencyOwnership,
        Dimension::TransparencyCorrections,
        Dimension::TransparencyEditorialProcess,
        Dimension::Independence,
        Dimension::CorrectionTimeframe,
        Dimension::FeedbackMechanism,
        Dimension::ReviewSchedule,
    ];

    /// Dotted path of the draft field this dimension reads
    pub fn field_path(&self) -> &'static str {
        match self {
            Dimension::Sourcing => "sourcing",
            Dimension::Accuracy => "accuracy",
            Dimension::TransparencyFunding => "transparency.funding",
            Dimension::TransparencyOwnership => "transparency.ownership",
            Dimension::TransparencyCorrections => "transparency.corrections",
            Dimension::TransparencyEditorialProcess => "transparency.editorial_process",
            Dimension::Independence => "independence",
            Dimension::CorrectionTimeframe => "correction_timeframe",
            Dimension::FeedbackMechanism => "feedback_mechanism",
            Dimension::ReviewSchedule => "review_schedule",
        }
    }

    /// Section heading shown in the builder
    pub fn heading(&self) -> &'static str {
        match self {
            Dimension::Sourcing => "Sourcing Standards",
            Dimension::Accuracy => "Accuracy Commitment",
            Dimension::TransparencyFunding
            | Dimension::TransparencyOwnership
            | Dimension::TransparencyCorrections
            | Dimension::TransparencyEditorialProcess => "Transparency Practices",
            Dimension::Independence => "Independence",
            Dimension::CorrectionTimeframe => "Corrections Policy",
            Dimension::FeedbackMechanism => "Feedback Channels",
            Dimension::ReviewSchedule => "Policy Review Schedule",
        }
    }

    /// Position in the canonical order
    pub fn position(&self) -> usize {
        Dimension::CANONICAL_ORDER
            .iter()
            .position(|d| d == self)
            .unwrap_or(Dimension::CANONICAL_ORDER.len())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_path())
    }
}

/// What it means, for one organization, to violate one of its own standards
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MalpublishDefinition {
    pub source_field: Dimension,
    pub chosen_value: String,
    pub statement_text: String,
}

impl MalpublishDefinition {
    pub fn new(
        source_field: Dimension,
        chosen_value: impl Into<String>,
        statement_text: impl Into<String>,
    ) -> Self {
        Self {
            source_field,
            chosen_value: chosen_value.into(),
            statement_text: statement_text.into(),
        }
    }
}

impl fmt::Display for MalpublishDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.statement_text)
    }
}
