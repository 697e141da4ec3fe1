//! Commitment options listing

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use policy_types::{
    Accuracy, CorrectionTimeframe, FeedbackChannel, Independence, ReviewSchedule, Sourcing,
    TransparencyFlag,
};
use serde::Serialize;
use tabled::Tabled;

/// One selectable option of a commitment dimension
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct OptionRow {
    field: &'static str,
    value: &'static str,
    label: &'static str,
    description: &'static str,
}

fn row(
    field: &'static str,
    (value, label, description): (&'static str, &'static str, &'static str),
) -> OptionRow {
    OptionRow {
        field,
        value,
        label,
        description,
    }
}

pub(crate) fn option_rows() -> Vec<OptionRow> {
    let mut rows = Vec::new();
    rows.extend(
        Sourcing::ALL
            .iter()
            .map(|v| row("sourcing", (v.as_str(), v.label(), v.description()))),
    );
    rows.extend(
        Accuracy::ALL
            .iter()
            .map(|v| row("accuracy", (v.as_str(), v.label(), v.description()))),
    );
    rows.extend(
        TransparencyFlag::ALL
            .iter()
            .map(|v| row("transparency", (v.as_str(), v.label(), v.description()))),
    );
    rows.extend(
        Independence::ALL
            .iter()
            .map(|v| row("independence", (v.as_str(), v.label(), v.description()))),
    );
    rows.extend(CorrectionTimeframe::ALL.iter().map(|v| {
        row(
            "correction_timeframe",
            (v.as_str(), v.label(), v.description()),
        )
    }));
    rows.extend(FeedbackChannel::ALL.iter().map(|v| {
        row(
            "feedback_mechanism",
            (v.as_str(), v.label(), v.description()),
        )
    }));
    rows.extend(
        ReviewSchedule::ALL
            .iter()
            .map(|v| row("review_schedule", (v.as_str(), v.label(), v.description()))),
    );
    rows
}

/// List every commitment dimension with its options
pub fn execute(format: OutputFormat) -> CliResult<()> {
    let rows = option_rows();
    let data = serde_json::to_value(&rows)?;
    output::print_output(rows, &data, format)
}
