//! Console sink backed by `tracing`.

use logbridge_kernel::{LogSink, SinkContext, SourceLocation};

/// Forwards each tier to the matching `tracing` level under the `logbridge` target.
///
/// Fatal events arrive through [`LogSink::error`], so they show up as `ERROR`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub const fn new() -> Self {
        Self
    }
}

macro_rules! emit {
    ($level:expr, $message:expr, $location:expr, $context:expr) => {
        if tracing::enabled!(target: "logbridge", $level) {
            let message = $message();
            let category = $context.map(|ctx| ctx.category.as_str()).unwrap_or("none");
            let extra = $context
                .filter(|ctx| !ctx.extra.is_empty())
                .map(|ctx| ctx.extra.to_string());
            tracing::event!(
                target: "logbridge",
                $level,
                category,
                extra = extra.as_deref(),
                file = $location.file,
                function = $location.function,
                line = $location.line,
                "{}",
                message
            );
        }
    };
}

impl LogSink for TracingSink {
    fn debug(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    ) {
        emit!(tracing::Level::DEBUG, message, location, context);
    }

    fn info(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    ) {
        emit!(tracing::Level::INFO, message, location, context);
    }

    fn warning(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    ) {
        emit!(tracing::Level::WARN, message, location, context);
    }

    fn error(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    ) {
        emit!(tracing::Level::ERROR, message, location, context);
    }
}
