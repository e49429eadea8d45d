use tracing::warn;

/// User-facing error channel for terminal request failures.
///
/// The host app wires this to its toast/notification surface; the
/// gateway only decides *when* a failure is worth showing.
pub trait UserNotifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Default notifier for headless hosts and tests: the message only goes
/// to the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl UserNotifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(%message, "request failed");
    }
}
