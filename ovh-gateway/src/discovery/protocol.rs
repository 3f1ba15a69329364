//! Service discovery implementations. Trait is in ovh_gateway_core::service_discovery.

use async_trait::async_trait;
use ovh_gateway_core::{DiscoveryError, ServiceDiscovery};
use tracing::debug;

/// Discovery from static config: service names in configured order.
#[derive(Clone, Debug, Default)]
pub struct StaticDiscovery {
    services: Vec<String>,
}

impl StaticDiscovery {
    pub fn new(services: Vec<String>) -> Self {
        Self { services }
    }

    pub fn from_slice(names: &[&str]) -> Self {
        Self {
            services: names.iter().map(|n| (*n).to_string()).collect(),
        }
    }
}

#[async_trait]
impl ServiceDiscovery for StaticDiscovery {
    async fn get_services(&self) -> Result<Vec<String>, DiscoveryError> {
        debug!("returning {} static services", self.services.len());
        Ok(self.services.clone())
    }
}
