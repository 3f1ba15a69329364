//! Discovery: DiscoveryModule and the static adapter.

mod protocol;

pub use protocol::StaticDiscovery;

use std::sync::Arc;

use ovh_gateway_core::{CoreError, ServiceDiscovery};
use tracing::debug;

use crate::core::{Application, Module};

/// Discovery as object: one adapter (static, or custom).
/// Register via app.register(discovery). Available on Application via .discovery().
pub struct DiscoveryModule {
    adapter: Option<Arc<dyn ServiceDiscovery>>,
}

impl DiscoveryModule {
    pub fn new() -> Self {
        Self { adapter: None }
    }

    /// Static config: ordered service names.
    pub fn static_services(mut self, services: Vec<String>) -> Self {
        self.adapter = Some(Arc::new(StaticDiscovery::new(services)));
        self
    }

    pub fn static_slice(mut self, names: &[&str]) -> Self {
        self.adapter = Some(Arc::new(StaticDiscovery::from_slice(names)));
        self
    }

    /// Use custom implementation.
    pub fn adapter(mut self, impl_: impl ServiceDiscovery + 'static) -> Self {
        self.adapter = Some(Arc::new(impl_));
        self
    }
}

impl Default for DiscoveryModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for DiscoveryModule {
    fn register_into(&mut self, app: &mut Application) -> Result<(), CoreError> {
        let adapter = self.adapter.take().unwrap_or_else(|| {
            debug!("no discovery adapter configured; using empty static discovery");
            Arc::new(StaticDiscovery::default()) as Arc<dyn ServiceDiscovery>
        });
        app.set_discovery(adapter);
        Ok(())
    }
}
