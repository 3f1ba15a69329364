//! ovh-gateway: Application, Module trait, discovery and startup service checker on ovh-gateway-core.

pub mod checker;
pub mod config;
pub mod core;
pub mod discovery;

pub use checker::{CheckerModule, PendingCheck, ServiceChecker};
pub use config::{CheckerConfig, DiscoveryConfig, GatewayConfig, LoadedConfig};
pub use self::core::{Application, Launch, Module, ServiceDiscovery, Startup, StartupHook};
pub use discovery::{DiscoveryModule, StaticDiscovery};
pub use ovh_gateway_core::{
    render_services, BufferSink, CoreError, DiscoveryError, OutputSink, StdoutSink, SERVICES_LABEL,
};
