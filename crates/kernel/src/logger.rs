use crate::event::LogEvent;

/// Public logging entry point used by application code.
pub trait Logger: Send + Sync {
    /// Format and route one event. Never fails; backend failures stay in the backend.
    fn log(&self, event: LogEvent);

    /// Forward the usage-data consent to the crash reporter.
    fn setup(&self, send_usage_data: bool);

    fn crashed_last_launch(&self) -> bool;
}
