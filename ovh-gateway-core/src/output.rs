//! Output sink and the rendered service line.

use std::io::Write;
use std::sync::Mutex;

/// Fixed prefix of the service line.
pub const SERVICES_LABEL: &str = "Services Kubernetes : ";

/// Render the service line: label followed by `[a, b]`. Empty list renders `[]`.
pub fn render_services(services: &[String]) -> String {
    format!("{}[{}]", SERVICES_LABEL, services.join(", "))
}

/// Where the service line goes. One call = one line.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Process stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        // A closed stdout has nowhere to report to.
        let _ = writeln!(lock, "{}", line);
        let _ = lock.flush();
    }
}

/// In-memory sink: keeps every line written, in order.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl OutputSink for BufferSink {
    fn write_line(&self, line: &str) {
        let mut lines = self
            .lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        lines.push(line.to_owned());
    }
}
