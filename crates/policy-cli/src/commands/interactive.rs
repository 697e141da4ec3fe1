//! Interactive prompts for each wizard step

use crate::error::CliResult;
use crate::output::{print_heading, print_info, print_warning};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use policy_gateway::PersistenceGateway;
use policy_types::{
    Accuracy, CorrectionTimeframe, FeedbackChannel, FeedbackMechanism, Independence,
    ReviewSchedule, Sourcing, TransparencyFlag, Visibility, WizardStep,
};
use policy_wizard::WizardController;

/// What the user chose on the review step
pub(super) enum ReviewChoice {
    Save,
    Discard,
}

fn text(prompt: &str, current: &str) -> CliResult<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn choose<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    current: T,
    label: impl Fn(&T) -> String,
) -> CliResult<T> {
    let labels: Vec<String> = options.iter().map(label).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options.get(index).copied().unwrap_or(current))
}

fn described(label: &str, description: &str) -> String {
    format!("{label} - {description}")
}

fn prompt_identity<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
) -> CliResult<()> {
    print_heading("Step 1 of 4: Identity");
    let current = wizard.draft().identity.clone();

    let organization_name = text("Organization name", &current.organization_name)?;

    let entries: Vec<(String, String)> = wizard
        .catalog()
        .grouped()
        .iter()
        .flat_map(|group| {
            group.sectors.iter().map(move |t| {
                (t.slug.clone(), format!("{} / {}", group.category.as_str(), t.name))
            })
        })
        .collect();
    let sector = if entries.is_empty() {
        text("Sector slug", &current.sector)?
    } else {
        let labels: Vec<&str> = entries.iter().map(|(_, label)| label.as_str()).collect();
        let default = entries
            .iter()
            .position(|(slug, _)| *slug == current.sector)
            .unwrap_or(0);
        let index = Select::new()
            .with_prompt("Sector")
            .items(&labels)
            .default(default)
            .interact()?;
        entries
            .get(index)
            .map(|(slug, _)| slug.clone())
            .unwrap_or_else(|| current.sector.clone())
    };

    let primary_audience = text("Primary audience", &current.primary_audience)?;
    let publishing_mission = text("Publishing mission (optional)", &current.publishing_mission)?;

    wizard.update_identity(|identity| {
        identity.organization_name = organization_name;
        identity.sector = sector;
        identity.primary_audience = primary_audience;
        identity.publishing_mission = publishing_mission;
    })?;
    Ok(())
}

fn prompt_commitments<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
) -> CliResult<()> {
    print_heading("Step 2 of 4: Commitments");
    let current = wizard.draft().commitments.clone();

    let sourcing = choose("Sourcing standards", &Sourcing::ALL, current.sourcing, |v| {
        described(v.label(), v.description())
    })?;
    let accuracy = choose("Accuracy commitment", &Accuracy::ALL, current.accuracy, |v| {
        described(v.label(), v.description())
    })?;

    let labels: Vec<String> = TransparencyFlag::ALL
        .iter()
        .map(|f| described(f.label(), f.description()))
        .collect();
    let defaults: Vec<bool> = TransparencyFlag::ALL
        .iter()
        .map(|f| current.transparency.get(*f))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("Transparency practices (space to toggle)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let independence = choose("Independence", &Independence::ALL, current.independence, |v| {
        described(v.label(), v.description())
    })?;

    wizard.update_commitments(|commitments| {
        commitments.sourcing = sourcing;
        commitments.accuracy = accuracy;
        commitments.independence = independence;
        for (i, flag) in TransparencyFlag::ALL.iter().enumerate() {
            commitments.transparency.set(*flag, picked.contains(&i));
        }
    })?;
    Ok(())
}

fn prompt_accountability<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
) -> CliResult<()> {
    print_heading("Step 3 of 4: Accountability");
    let current = wizard.draft().accountability.clone();

    let correction_timeframe = choose(
        "Corrections policy",
        &CorrectionTimeframe::ALL,
        current.correction_timeframe,
        |v| described(v.label(), v.description()),
    )?;

    let labels: Vec<String> = FeedbackChannel::ALL
        .iter()
        .map(|c| described(c.label(), c.description()))
        .collect();
    let mut defaults: Vec<bool> = FeedbackChannel::ALL
        .iter()
        .map(|c| current.feedback_mechanism.contains(*c))
        .collect();
    let feedback = loop {
        let picked = MultiSelect::new()
            .with_prompt("Feedback channels (select at least one)")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;
        let feedback: FeedbackMechanism = picked
            .iter()
            .filter_map(|i| FeedbackChannel::ALL.get(*i).copied())
            .collect();
        if !feedback.is_empty() {
            break feedback;
        }
        print_warning("Select at least one feedback channel");
        defaults = vec![false; FeedbackChannel::ALL.len()];
    };

    let contact = text(
        "Accountability contact (optional)",
        &current.accountability_contact,
    )?;
    let review_schedule = choose(
        "Policy review schedule",
        &ReviewSchedule::ALL,
        current.review_schedule,
        |v| described(v.label(), v.description()),
    )?;

    wizard.update_accountability(|accountability| {
        accountability.correction_timeframe = correction_timeframe;
        accountability.feedback_mechanism = feedback;
        accountability.accountability_contact = contact;
        accountability.review_schedule = review_schedule;
    })?;
    Ok(())
}

fn prompt_review<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
) -> CliResult<Option<ReviewChoice>> {
    print_heading("Step 4 of 4: Your Policy");
    let summary = wizard.review_summary();
    println!("{}", summary.organization_name);
    println!("{}", summary.mission);
    println!("{} | {}", summary.sector_name, summary.primary_audience);
    for definition in &summary.definitions {
        println!("  - {}", definition.statement_text);
    }

    let visibility = choose(
        "Visibility",
        &[Visibility::Internal, Visibility::Public],
        wizard.draft().visibility,
        |v| match v {
            Visibility::Public => "Public - share it publicly".to_string(),
            Visibility::Internal => "Internal - keep it internal".to_string(),
        },
    )?;
    wizard.set_visibility(visibility)?;

    let actions = ["Save policy", "Go back", "Discard draft"];
    let action = Select::new()
        .with_prompt("Next")
        .items(&actions)
        .default(0)
        .interact()?;
    match action {
        0 => Ok(Some(ReviewChoice::Save)),
        1 => {
            wizard.retreat();
            Ok(None)
        }
        _ => Ok(Some(ReviewChoice::Discard)),
    }
}

/// Walk the wizard step by step until the user saves or discards
pub(super) fn run<G: PersistenceGateway + ?Sized>(
    wizard: &mut WizardController<G>,
) -> CliResult<ReviewChoice> {
    loop {
        let step = wizard.current_step();
        match step {
            WizardStep::Identity => prompt_identity(wizard)?,
            WizardStep::Commitments => prompt_commitments(wizard)?,
            WizardStep::Accountability => prompt_accountability(wizard)?,
            WizardStep::Review => match prompt_review(wizard)? {
                Some(choice) => return Ok(choice),
                None => continue,
            },
        }

        if !wizard.advance() {
            print_warning(&super::build::blocked_message(wizard, step));
        } else if step == WizardStep::Identity && wizard.identity_check().unknown_sector {
            print_info("That sector is not in the template list; it will be shown as entered");
        }
    }
}

/// Ask whether to retry after a failed save
pub(super) fn confirm_retry() -> CliResult<bool> {
    Ok(Confirm::new()
        .with_prompt("Retry saving?")
        .default(true)
        .interact()?)
}
