use anyhow::Context;
use logbridge_kernel::settings::Settings;
use logbridge_kernel::{source_location, LogCategory, LogEvent, LogLevel};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load logbridge settings")?;

    let backends = logbridge_app::start(&settings)?;

    backends.logger.log(
        LogEvent::new("logbridge-app bootstrap complete", LogLevel::Info, LogCategory::Setup)
            .with_extra("environment", settings.environment.as_str())
            .with_extra(
                "send_usage_data",
                settings.telemetry.send_usage_data.to_string(),
            )
            .at(source_location!()),
    );

    tracing::info!(
        pending_reports = backends.crash_reporter.pending_reports().len(),
        "logbridge-app exiting"
    );
    Ok(())
}
