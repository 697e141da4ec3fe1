//! Read-only views over a wizard session

use policy_types::{MalpublishDefinition, Visibility, WizardStep};
use serde::Serialize;

/// Shown on the review step when the mission is blank
pub const NO_MISSION: &str = "No mission statement provided.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Complete,
    Current,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepProgress {
    pub step: WizardStep,
    pub title: &'static str,
    pub status: StepStatus,
}

pub(crate) fn progress_for(current: WizardStep, saved: bool) -> Vec<StepProgress> {
    WizardStep::ALL
        .iter()
        .map(|&step| {
            let status = if saved || step < current {
                StepStatus::Complete
            } else if step == current {
                StepStatus::Current
            } else {
                StepStatus::Pending
            };
            StepProgress {
                step,
                title: step.title(),
                status,
            }
        })
        .collect()
}

/// Everything the review step displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub organization_name: String,
    pub mission: String,
    pub sector_name: String,
    pub primary_audience: String,
    pub definitions: Vec<MalpublishDefinition>,
    pub visibility: Visibility,
    pub last_error: Option<String>,
}
