//! Service discovery trait: get_services() -> ordered names. Shared by the checker and discovery adapters.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("discovery unavailable: {0}")]
    Unavailable(String),
    #[error("discovery backend error: {0}")]
    Backend(String),
}

/// Which services are registered right now. Implementations: static config, Kubernetes, etc.
/// Single-shot: one call yields the whole list or one error.
#[async_trait]
pub trait ServiceDiscovery: Send + Sync {
    async fn get_services(&self) -> Result<Vec<String>, DiscoveryError>;
}
