use crate::category::LogCategory;
use crate::event::Extra;
use crate::level::LogLevel;

/// Crash and usage reporting backend. Only sees the most severe events.
pub trait CrashReporter: Send + Sync {
    /// Whether the previous session ended in a crash.
    fn crashed_last_launch(&self) -> bool;

    /// Record the user's usage-data consent.
    fn setup(&self, send_usage_data: bool);

    /// Report one event. `message` is the caller's text without any suffixes.
    fn send(&self, message: &str, category: LogCategory, level: LogLevel, extra_events: &Extra);
}
