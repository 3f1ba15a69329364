//! Core: Application, Module, startup lifecycle.

pub mod app;
pub mod module;

pub use app::{Application, Launch, Startup, StartupHook};
pub use module::Module;
pub use ovh_gateway_core::ServiceDiscovery;
