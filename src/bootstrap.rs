use std::sync::Arc;

use anyhow::Context;
use logbridge_kernel::{source_location, LogCategory, LogEvent, LogLevel, Logger, Settings};
use logbridge_telemetry::{DefaultCrashReporter, DefaultLogger, TracingSink};

/// The assembled logger plus a typed handle on its crash reporter.
#[derive(Clone)]
pub struct Backends {
    pub logger: Arc<dyn Logger>,
    pub crash_reporter: Arc<DefaultCrashReporter>,
}

/// Assemble the logger from settings without touching global state.
pub fn build(settings: &Settings) -> Backends {
    let crash_reporter = Arc::new(DefaultCrashReporter::new(
        &settings.telemetry,
        settings.environment.clone(),
    ));
    let logger: Arc<dyn Logger> = Arc::new(DefaultLogger::new(
        Arc::new(TracingSink::new()),
        crash_reporter.clone(),
    ));

    Backends {
        logger,
        crash_reporter,
    }
}

/// Install the tracing subscriber, build the backends, and apply the
/// configured usage-data consent.
pub fn start(settings: &Settings) -> anyhow::Result<Backends> {
    logbridge_telemetry::init(&settings.logging)
        .with_context(|| "failed to initialize tracing subscriber")?;

    let backends = build(settings);
    backends.logger.setup(settings.telemetry.send_usage_data);

    if backends.logger.crashed_last_launch() {
        backends.logger.log(
            LogEvent::new(
                "previous session ended in a crash",
                LogLevel::Warning,
                LogCategory::Lifecycle,
            )
            .at(source_location!()),
        );
    }

    Ok(backends)
}
