//! ovh-gateway core: discovery contract, output sink and line rendering, errors.

pub mod output;
pub mod service_discovery;

pub use output::{render_services, BufferSink, OutputSink, StdoutSink, SERVICES_LABEL};
pub use service_discovery::{DiscoveryError, ServiceDiscovery};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("not registered: {0}")]
    NotRegistered(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("no async runtime: {0}")]
    Runtime(String),
}
