//! Sector template listing

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use policy_gateway::PersistenceGateway;
use policy_types::{SectorCatalog, SectorTemplate};
use serde::Serialize;
use tabled::Tabled;

/// Table row for sector display
#[derive(Debug, Serialize, Tabled)]
struct SectorRow {
    category: String,
    slug: String,
    name: String,
}

impl From<&SectorTemplate> for SectorRow {
    fn from(template: &SectorTemplate) -> Self {
        Self {
            category: template.category.as_str().to_string(),
            slug: template.slug.clone(),
            name: template.name.clone(),
        }
    }
}

/// List sector templates grouped by category
pub async fn execute(gateway: &dyn PersistenceGateway, format: OutputFormat) -> CliResult<()> {
    let catalog = SectorCatalog::new(gateway.list_sector_templates().await?);
    let groups = catalog.grouped();

    let rows: Vec<SectorRow> = groups
        .iter()
        .flat_map(|group| group.sectors.iter().map(|t| SectorRow::from(*t)))
        .collect();

    output::print_output(rows, &groups, format)
}
