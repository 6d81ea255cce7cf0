//! The default [`Logger`]: formats each event, always hands it to the sink,
//! and escalates fatal events to the crash reporter.

use std::sync::Arc;

use logbridge_kernel::{CrashReporter, LogEvent, LogLevel, LogSink, Logger, SinkContext};

pub struct DefaultLogger {
    sink: Arc<dyn LogSink>,
    crash_reporter: Arc<dyn CrashReporter>,
}

impl DefaultLogger {
    pub fn new(sink: Arc<dyn LogSink>, crash_reporter: Arc<dyn CrashReporter>) -> Self {
        Self {
            sink,
            crash_reporter,
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, event: LogEvent) {
        let message = || event.formatted_message();
        let context = SinkContext {
            category: event.category,
            extra: &event.extra,
        };

        match event.level {
            LogLevel::Debug => self.sink.debug(&message, &event.location, Some(&context)),
            LogLevel::Info => self.sink.info(&message, &event.location, Some(&context)),
            LogLevel::Warning => self.sink.warning(&message, &event.location, Some(&context)),
            LogLevel::Fatal => self.sink.error(&message, &event.location, Some(&context)),
        }

        if event.level != LogLevel::Fatal {
            return;
        }

        self.crash_reporter.send(
            &event.message,
            event.category,
            event.level,
            &event.telemetry_extras(),
        );
    }

    fn setup(&self, send_usage_data: bool) {
        self.crash_reporter.setup(send_usage_data);
    }

    fn crashed_last_launch(&self) -> bool {
        self.crash_reporter.crashed_last_launch()
    }
}
