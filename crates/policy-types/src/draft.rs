//! The policy draft and the step cursor it carries

use crate::accountability::AccountabilityFramework;
use crate::commitments::EditorialCommitments;
use crate::document::Visibility;
use crate::error::{PolicyTypesError, PolicyTypesResult};
use crate::identity::PublishingIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Builder steps, in order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Identity,
    Commitments,
    Accountability,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Identity,
        WizardStep::Commitments,
        WizardStep::Accountability,
        WizardStep::Review,
    ];

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Commitments => 2,
            WizardStep::Accountability => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_number(n: u8) -> PolicyTypesResult<Self> {
        match n {
            1 => Ok(WizardStep::Identity),
            2 => Ok(WizardStep::Commitments),
            3 => Ok(WizardStep::Accountability),
            4 => Ok(WizardStep::Review),
            other => Err(PolicyTypesError::InvalidStep(other)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Identity",
            WizardStep::Commitments => "Commitments",
            WizardStep::Accountability => "Accountability",
            WizardStep::Review => "Your Policy",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => Some(WizardStep::Commitments),
            WizardStep::Commitments => Some(WizardStep::Accountability),
            WizardStep::Accountability => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Identity => None,
            WizardStep::Commitments => Some(WizardStep::Identity),
            WizardStep::Accountability => Some(WizardStep::Commitments),
            WizardStep::Review => Some(WizardStep::Accountability),
        }
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.number())
    }
}

/// Session-local working copy of a policy before it is persisted.
///
/// Every field is populated at construction; there is no code path that
/// yields a draft with a missing section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyDraft {
    pub identity: PublishingIdentity,
    pub commitments: EditorialCommitments,
    pub accountability: AccountabilityFramework,
    pub visibility: Visibility,
    pub step: WizardStep,
}

impl PolicyDraft {
    /// Fresh draft at the identity step with every default filled in
    pub fn new() -> Self {
        Self {
            identity: PublishingIdentity::default(),
            commitments: EditorialCommitments::default(),
            accountability: AccountabilityFramework::default(),
            visibility: Visibility::default(),
            step: WizardStep::Identity,
        }
    }

    pub fn with_identity(mut self, identity: PublishingIdentity) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_commitments(mut self, commitments: EditorialCommitments) -> Self {
        self.commitments = commitments;
        self
    }

    pub fn with_accountability(mut self, accountability: AccountabilityFramework) -> Self {
        self.accountability = accountability;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl Default for PolicyDraft {
    fn default() -> Self {
        Self::new()
    }
}
