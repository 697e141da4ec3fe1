//! Build and save a policy through the wizard

use super::derive::print_definitions;
use super::interactive::{self, ReviewChoice};
use crate::answers::load_draft;
use crate::error::{CliError, CliResult};
use crate::output::{
    self, print_error, print_heading, print_info, print_success, print_warning, OutputFormat,
};
use policy_gateway::PersistenceGateway;
use policy_types::{PolicyDraft, WizardStep};
use policy_wizard::{BuilderEntry, WizardController, UNAVAILABLE_HINT, UNAVAILABLE_TITLE};
use std::path::Path;
use std::sync::Arc;

/// Human-readable reason a step cannot be left
pub(super) fn blocked_message<G: PersistenceGateway + ?Sized>(
    wizard: &WizardController<G>,
    step: WizardStep,
) -> String {
    format!("{} is incomplete: missing {}", step.title(), missing(wizard, step))
}

fn missing<G: PersistenceGateway + ?Sized>(
    wizard: &WizardController<G>,
    step: WizardStep,
) -> String {
    match step {
        WizardStep::Identity => wizard
            .identity_check()
            .missing
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", "),
        WizardStep::Accountability => "a feedback channel".to_string(),
        WizardStep::Commitments | WizardStep::Review => String::new(),
    }
}

fn apply<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
    draft: PolicyDraft,
) -> CliResult<()> {
    let PolicyDraft {
        identity,
        commitments,
        accountability,
        visibility,
        ..
    } = draft;
    wizard.update_identity(|current| *current = identity)?;
    wizard.update_commitments(|current| *current = commitments)?;
    wizard.update_accountability(|current| *current = accountability)?;
    wizard.set_visibility(visibility)?;
    Ok(())
}

/// Advance to the review step, failing on the first incomplete step
fn walk<G: PersistenceGateway + ?Sized>(wizard: &mut WizardController<G>) -> CliResult<()> {
    while wizard.current_step() != WizardStep::Review {
        let step = wizard.current_step();
        if !wizard.advance() {
            return Err(CliError::Incomplete {
                step: step.title().to_string(),
                missing: missing(wizard, step),
            });
        }
        if step == WizardStep::Identity && wizard.identity_check().unknown_sector {
            print_warning(&format!(
                "Sector '{}' is not in the template list",
                wizard.draft().identity.sector
            ));
        }
    }
    Ok(())
}

fn print_review<G: PersistenceGateway + ?Sized>(
    wizard: &WizardController<G>,
    format: OutputFormat,
) -> CliResult<()> {
    if format != OutputFormat::Table {
        return Ok(());
    }
    let summary = wizard.review_summary();
    print_heading(&summary.organization_name);
    println!("{}", summary.mission);
    println!("Sector:     {}", summary.sector_name);
    println!("Audience:   {}", summary.primary_audience);
    println!("Visibility: {}", summary.visibility.as_str());
    print_heading("What malpublishing means for you");
    print_definitions(&summary.definitions, format)
}

async fn save<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
    format: OutputFormat,
    interactive: bool,
) -> CliResult<()> {
    loop {
        match wizard.finalize().await {
            Ok(policy) => {
                if format == OutputFormat::Table {
                    print_success(&format!("Saved {}", policy.name()));
                    println!("Edit token: {}", policy.edit_token);
                } else {
                    output::print_single(&policy, format)?;
                }
                return Ok(());
            }
            Err(err) => {
                print_error(wizard.last_error().unwrap_or("Failed to save policy"));
                if !(err.is_retryable() && interactive && interactive::confirm_retry()?) {
                    return Err(err.into());
                }
            }
        }
    }
}

/// Drive the wizard from an answers file or interactively and save
pub async fn execute(
    gateway: Arc<dyn PersistenceGateway>,
    answers: Option<&Path>,
    interactive: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let mut wizard = match BuilderEntry::open(gateway).await {
        BuilderEntry::Ready(wizard) => wizard,
        BuilderEntry::Unavailable { reason } => {
            print_error(UNAVAILABLE_TITLE);
            print_info(UNAVAILABLE_HINT);
            return Err(CliError::Unavailable(reason));
        }
    };

    if let Some(path) = answers {
        apply(&mut wizard, load_draft(path)?)?;
    }

    if interactive {
        match interactive::run(&mut wizard)? {
            ReviewChoice::Save => {}
            ReviewChoice::Discard => {
                print_info("Draft discarded; nothing was saved");
                return Ok(());
            }
        }
    } else {
        walk(&mut wizard)?;
        print_review(&wizard, format)?;
    }

    save(&mut wizard, format, interactive).await
}
