//! Builder entry point

use crate::controller::WizardController;
use policy_gateway::PersistenceGateway;
use policy_types::SectorCatalog;
use std::sync::Arc;
use tracing::warn;

pub const UNAVAILABLE_TITLE: &str = "Unable to load policy builder";
pub const UNAVAILABLE_HINT: &str = "Please try again later.";

/// Outcome of opening the builder: a ready wizard, or the error screen when
/// the sector catalog cannot be loaded.
pub enum BuilderEntry<G: PersistenceGateway + ?Sized> {
    Ready(WizardController<G>),
    Unavailable { reason: String },
}

impl<G: PersistenceGateway + ?Sized> BuilderEntry<G> {
    pub async fn open(gateway: Arc<G>) -> Self {
        match gateway.list_sector_templates().await {
            Ok(templates) => {
                BuilderEntry::Ready(WizardController::new(gateway, SectorCatalog::new(templates)))
            }
            Err(err) => {
                warn!(error = %err, "failed to load sector templates");
                BuilderEntry::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, BuilderEntry::Ready(_))
    }

    pub fn into_controller(self) -> Option<WizardController<G>> {
        match self {
            BuilderEntry::Ready(controller) => Some(controller),
            BuilderEntry::Unavailable { .. } => None,
        }
    }
}
