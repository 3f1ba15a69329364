//! Checker: print the registered services once at startup.

use std::sync::Arc;

use ovh_gateway_core::{render_services, CoreError, OutputSink, ServiceDiscovery};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::debug;

use crate::core::{Application, Launch, Module};

/// Lists the services known to discovery and writes them as one line to the sink.
pub struct ServiceChecker {
    discovery: Arc<dyn ServiceDiscovery>,
    sink: Arc<dyn OutputSink>,
}

impl ServiceChecker {
    pub fn new(discovery: Arc<dyn ServiceDiscovery>, sink: Arc<dyn OutputSink>) -> Self {
        Self { discovery, sink }
    }

    /// Spawn one task on the current tokio runtime that calls `get_services` once and prints the result.
    /// Returns immediately. Outside a runtime nothing is spawned and `CoreError::Runtime` is returned.
    /// A failed listing prints nothing and is not reported to the caller.
    pub fn print_services(&self) -> Result<PendingCheck, CoreError> {
        let handle = Handle::try_current().map_err(|e| CoreError::Runtime(e.to_string()))?;
        Ok(self.print_services_on(&handle))
    }

    /// `print_services` on an explicit runtime handle.
    pub fn print_services_on(&self, handle: &Handle) -> PendingCheck {
        let discovery = Arc::clone(&self.discovery);
        let sink = Arc::clone(&self.sink);
        let (tx, rx) = oneshot::channel();
        handle.spawn(async move {
            match discovery.get_services().await {
                Ok(services) => {
                    sink.write_line(&render_services(&services));
                    // Nobody waiting is fine.
                    let _ = tx.send(services);
                }
                Err(err) => {
                    debug!(error = %err, "service listing failed; nothing printed");
                }
            }
        });
        PendingCheck { rx }
    }
}

/// One-shot completion of a `print_services` call.
pub struct PendingCheck {
    rx: oneshot::Receiver<Vec<String>>,
}

impl PendingCheck {
    /// `Some(services)` once the line is written, `None` if listing failed (error or panic).
    pub async fn wait(self) -> Option<Vec<String>> {
        self.rx.await.ok()
    }
}

/// Registers the service checker as a startup hook.
/// Discovery is resolved at start, so module order does not matter.
#[derive(Default)]
pub struct CheckerModule;

impl CheckerModule {
    pub fn new() -> Self {
        Self
    }
}

impl Module for CheckerModule {
    fn register_into(&mut self, app: &mut Application) -> Result<(), CoreError> {
        app.on_start(Box::new(|app: &Application| -> Result<Launch, CoreError> {
            let discovery = app
                .discovery()
                .ok_or_else(|| CoreError::NotRegistered("service discovery".into()))?;
            let handle = Handle::try_current().map_err(|e| CoreError::Runtime(e.to_string()))?;
            let checker = ServiceChecker::new(discovery, app.sink());
            let launch: Launch = Box::new(move || checker.print_services_on(&handle));
            Ok(launch)
        }));
        Ok(())
    }
}
