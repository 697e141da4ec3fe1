//! Preview the malpublishing definitions for an answers file

use crate::answers::load_draft;
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use policy_derivation::DerivationEngine;
use policy_types::MalpublishDefinition;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

/// Table row for a derived definition
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct DefinitionRow {
    field: String,
    value: String,
    statement: String,
}

impl From<&MalpublishDefinition> for DefinitionRow {
    fn from(definition: &MalpublishDefinition) -> Self {
        Self {
            field: definition.source_field.field_path().to_string(),
            value: definition.chosen_value.clone(),
            statement: definition.statement_text.clone(),
        }
    }
}

pub(crate) fn print_definitions(
    definitions: &[MalpublishDefinition],
    format: OutputFormat,
) -> CliResult<()> {
    let rows: Vec<DefinitionRow> = definitions.iter().map(DefinitionRow::from).collect();
    output::print_output(rows, definitions, format)
}

/// Derive definitions from an answers file without saving anything
pub fn execute(answers: &Path, format: OutputFormat) -> CliResult<()> {
    let draft = load_draft(answers)?;
    let definitions = DerivationEngine::new().derive_draft(&draft);
    tracing::debug!(count = definitions.len(), "derived definitions");
    print_definitions(&definitions, format)
}
