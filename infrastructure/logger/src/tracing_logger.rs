use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use case logs to the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "quickask", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "quickask", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "quickask", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "quickask", "{}", message);
    }
}
