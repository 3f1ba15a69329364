//! Application: holds the discovery adapter and output sink, runs startup hooks once.

use std::sync::Arc;

use ovh_gateway_core::{CoreError, OutputSink, ServiceDiscovery, StdoutSink};
use tracing::{debug, info};

use super::Module;
use crate::checker::PendingCheck;

/// Startup hook: checks its prerequisites against the application and returns the launch to run.
/// Must not have side effects; `start` only launches once every hook has prepared.
pub type StartupHook = Box<dyn Fn(&Application) -> Result<Launch, CoreError> + Send>;

/// Prepared startup work. Must not block; spawn and return a pending check.
pub type Launch = Box<dyn FnOnce() -> PendingCheck + Send>;

/// Application: explicit wiring of discovery, sink and startup hooks.
pub struct Application {
    /// Service discovery (set by DiscoveryModule).
    pub(crate) discovery: Option<Arc<dyn ServiceDiscovery>>,
    pub(crate) sink: Arc<dyn OutputSink>,
    pub(crate) startup_hooks: Vec<StartupHook>,
    pub(crate) started: bool,
}

impl Application {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    /// Application writing its output lines to `sink` instead of stdout.
    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        Self {
            discovery: None,
            sink,
            startup_hooks: Vec::new(),
            started: false,
        }
    }

    /// Set service discovery (called by DiscoveryModule).
    pub fn set_discovery(&mut self, adapter: Arc<dyn ServiceDiscovery>) {
        self.discovery = Some(adapter);
    }

    /// Service discovery if registered.
    pub fn discovery(&self) -> Option<Arc<dyn ServiceDiscovery>> {
        self.discovery.clone()
    }

    pub fn sink(&self) -> Arc<dyn OutputSink> {
        Arc::clone(&self.sink)
    }

    /// Queue a hook for `start`. Hooks run in registration order.
    pub fn on_start(&mut self, hook: StartupHook) {
        self.startup_hooks.push(hook);
    }

    /// Let `module` install its adapter or startup hooks.
    pub fn register(&mut self, module: &mut dyn Module) -> Result<(), CoreError> {
        module.register_into(self)
    }

    /// Run queued startup hooks exactly once. Later calls run nothing.
    /// Every hook prepares first; if any fails, nothing is launched and the hooks stay queued.
    /// Returns without waiting for hook results.
    pub fn start(&mut self) -> Result<Startup, CoreError> {
        if self.started {
            debug!("application already started; skipping startup hooks");
            return Ok(Startup::default());
        }
        let app: &Application = self;
        let launches = app
            .startup_hooks
            .iter()
            .map(|hook| hook(app))
            .collect::<Result<Vec<Launch>, CoreError>>()?;
        self.started = true;
        self.startup_hooks.clear();
        let pending: Vec<PendingCheck> = launches.into_iter().map(|launch| launch()).collect();
        info!(hooks = pending.len(), "application started");
        Ok(Startup { pending })
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// Pending results of the startup hooks. Dropping it does not cancel them.
#[derive(Default)]
pub struct Startup {
    pending: Vec<PendingCheck>,
}

impl Startup {
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Wait for every hook to settle. `None` entries are failed listings.
    pub async fn wait_all(self) -> Vec<Option<Vec<String>>> {
        let mut out = Vec::with_capacity(self.pending.len());
        for check in self.pending {
            out.push(check.wait().await);
        }
        out
    }
}
