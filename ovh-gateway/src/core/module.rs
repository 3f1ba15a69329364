//! Module: register into app.

use ovh_gateway_core::CoreError;

use super::app::Application;

/// Module: register into app (discovery adapter, startup hooks).
pub trait Module {
    fn register_into(&mut self, app: &mut Application) -> Result<(), CoreError>;
}
