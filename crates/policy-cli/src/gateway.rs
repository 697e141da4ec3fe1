//! Gateway selection from configuration

use crate::answers::load_sectors;
use crate::config::GatewayConfig;
use crate::error::CliResult;
use policy_gateway::{HttpPolicyGateway, InMemoryPolicyStore, PersistenceGateway};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub fn connect(config: &GatewayConfig) -> CliResult<Arc<dyn PersistenceGateway>> {
    match config {
        GatewayConfig::Memory { sectors_file } => {
            let store = match sectors_file {
                Some(path) => InMemoryPolicyStore::with_sectors(load_sectors(Path::new(path))?),
                None => InMemoryPolicyStore::seeded(),
            };
            tracing::debug!(sectors_file = ?sectors_file, "using in-memory store");
            Ok(Arc::new(store))
        }
        GatewayConfig::Http {
            base_url,
            timeout_secs,
        } => {
            let gateway = HttpPolicyGateway::new(base_url, Duration::from_secs(*timeout_secs))?;
            tracing::debug!(base_url = %gateway.base_url(), "using policy service");
            Ok(Arc::new(gateway))
        }
    }
}
