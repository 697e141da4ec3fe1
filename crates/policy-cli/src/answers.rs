//! Answers files: a declaration of every wizard field in TOML, YAML or JSON

use crate::error::{CliError, CliResult};
use policy_types::{PolicyDraft, SectorTemplate, WizardStep};
use serde::de::DeserializeOwned;
use std::path::Path;

fn parse<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let display = path.display().to_string();
    let contents = std::fs::read_to_string(path)?;
    let invalid = |message: String| CliError::Answers {
        path: display.clone(),
        message,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|e| invalid(e.to_string())),
        Some("toml") => toml::from_str(&contents).map_err(|e| invalid(e.to_string())),
        Some("yaml") | Some("yml") | None => {
            serde_yaml::from_str(&contents).map_err(|e| invalid(e.to_string()))
        }
        Some(other) => Err(invalid(format!("unsupported file type .{other}"))),
    }
}

/// Load a draft. Missing fields take their defaults and the wizard always
/// starts on the identity step.
pub fn load_draft(path: &Path) -> CliResult<PolicyDraft> {
    let mut draft: PolicyDraft = parse(path)?;
    draft.step = WizardStep::Identity;
    Ok(draft)
}

/// Load a sector template list
pub fn load_sectors(path: &Path) -> CliResult<Vec<SectorTemplate>> {
    parse(path)
}
