//! Accountability framework: corrections, feedback and review cadence

use crate::error::{PolicyTypesError, PolicyTypesResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Timeframe within which confirmed errors are corrected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CorrectionTimeframe {
    #[serde(rename = "24h")]
    Within24Hours,
    #[serde(rename = "48h")]
    Within48Hours,
    #[serde(rename = "1_week")]
    WithinOneWeek,
    /// Errors are corrected but no timeframe is promised
    #[serde(rename = "no_policy")]
    NoPolicy,
}

impl CorrectionTimeframe {
    pub const ALL: [CorrectionTimeframe; 4] = [
        CorrectionTimeframe::Within24Hours,
        CorrectionTimeframe::Within48Hours,
        CorrectionTimeframe::WithinOneWeek,
        CorrectionTimeframe::NoPolicy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionTimeframe::Within24Hours => "24h",
            CorrectionTimeframe::Within48Hours => "48h",
            CorrectionTimeframe::WithinOneWeek => "1_week",
            CorrectionTimeframe::NoPolicy => "no_policy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CorrectionTimeframe::Within24Hours => "Within 24 hours",
            CorrectionTimeframe::Within48Hours => "Within 48 hours",
            CorrectionTimeframe::WithinOneWeek => "Within one week",
            CorrectionTimeframe::NoPolicy => "No set timeframe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CorrectionTimeframe::Within24Hours => "We correct confirmed errors within one day",
            CorrectionTimeframe::Within48Hours => "We correct confirmed errors within two days",
            CorrectionTimeframe::WithinOneWeek => "We correct confirmed errors within a week",
            CorrectionTimeframe::NoPolicy => "We correct errors but have no specific timeframe",
        }
    }
}

/// A channel through which the audience can raise concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackChannel {
    Email,
    Form,
    PublicComment,
}

impl FeedbackChannel {
    pub const ALL: [FeedbackChannel; 3] = [
        FeedbackChannel::Email,
        FeedbackChannel::Form,
        FeedbackChannel::PublicComment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackChannel::Email => "email",
            FeedbackChannel::Form => "form",
            FeedbackChannel::PublicComment => "public_comment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackChannel::Email => "Email",
            FeedbackChannel::Form => "Contact form",
            FeedbackChannel::PublicComment => "Public comments",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FeedbackChannel::Email => "Readers can email us directly",
            FeedbackChannel::Form => "We have a dedicated feedback form",
            FeedbackChannel::PublicComment => "Readers can comment publicly on our content",
        }
    }
}

/// Selected feedback channels.
///
/// Kept in canonical channel order whatever order they were toggled in, so
/// serialized drafts and derived statements are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackMechanism(BTreeSet<FeedbackChannel>);

impl FeedbackMechanism {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_channels(channels: impl IntoIterator<Item = FeedbackChannel>) -> Self {
        Self(channels.into_iter().collect())
    }

    pub fn contains(&self, channel: FeedbackChannel) -> bool {
        self.0.contains(&channel)
    }

    pub fn insert(&mut self, channel: FeedbackChannel) -> bool {
        self.0.insert(channel)
    }

    pub fn remove(&mut self, channel: FeedbackChannel) -> bool {
        self.0.remove(&channel)
    }

    /// Add the channel if absent, remove it if present. Returns whether it
    /// is selected afterwards.
    pub fn toggle(&mut self, channel: FeedbackChannel) -> bool {
        if self.0.remove(&channel) {
            false
        } else {
            self.0.insert(channel);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FeedbackChannel> + '_ {
        self.0.iter().copied()
    }

    /// Wire values joined with commas, e.g. `email,form`
    pub fn wire_value(&self) -> String {
        self.iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<FeedbackChannel> for FeedbackMechanism {
    fn from_iter<I: IntoIterator<Item = FeedbackChannel>>(iter: I) -> Self {
        Self::from_channels(iter)
    }
}

/// How often the policy itself is reviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSchedule {
    Quarterly,
    Annually,
    AsNeeded,
}

impl ReviewSchedule {
    pub const ALL: [ReviewSchedule; 3] = [
        ReviewSchedule::Quarterly,
        ReviewSchedule::Annually,
        ReviewSchedule::AsNeeded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSchedule::Quarterly => "quarterly",
            ReviewSchedule::Annually => "annually",
            ReviewSchedule::AsNeeded => "as_needed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewSchedule::Quarterly => "Quarterly",
            ReviewSchedule::Annually => "Annually",
            ReviewSchedule::AsNeeded => "As needed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReviewSchedule::Quarterly => "We review this policy every three months",
            ReviewSchedule::Annually => "We review this policy once a year",
            ReviewSchedule::AsNeeded => "We review this policy when circumstances require",
        }
    }
}

/// The accountability section of a draft
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountabilityFramework {
    pub correction_timeframe: CorrectionTimeframe,
    pub feedback_mechanism: FeedbackMechanism,
    pub accountability_contact: String,
    pub review_schedule: ReviewSchedule,
}

impl AccountabilityFramework {
    /// Contact, if one was given
    pub fn contact(&self) -> Option<&str> {
        let contact = self.accountability_contact.trim();
        (!contact.is_empty()).then_some(contact)
    }
}

impl Default for AccountabilityFramework {
    fn default() -> Self {
        Self {
            correction_timeframe: CorrectionTimeframe::Within48Hours,
            feedback_mechanism: FeedbackMechanism::from_channels([FeedbackChannel::Email]),
            accountability_contact: String::new(),
            review_schedule: ReviewSchedule::Annually,
        }
    }
}

impl FromStr for CorrectionTimeframe {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        CorrectionTimeframe::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("correction_timeframe", s))
    }
}

impl FromStr for FeedbackChannel {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        FeedbackChannel::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("feedback_mechanism", s))
    }
}

impl FromStr for ReviewSchedule {
    type Err = PolicyTypesError;

    fn from_str(s: &str) -> PolicyTypesResult<Self> {
        ReviewSchedule::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PolicyTypesError::unknown("review_schedule", s))
    }
}

impl fmt::Display for CorrectionTimeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FeedbackChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReviewSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
