use crate::category::LogCategory;
use crate::event::{Extra, SourceLocation};

/// Context a [`Logger`](crate::Logger) attaches to every sink call.
#[derive(Debug, Clone, Copy)]
pub struct SinkContext<'a> {
    pub category: LogCategory,
    pub extra: &'a Extra,
}

/// Console/file style backend that receives every log line by severity tier.
///
/// The message is produced lazily; implementations call it at most once and
/// may skip it entirely when the tier is filtered out.
pub trait LogSink: Send + Sync {
    fn debug(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    );

    fn info(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    );

    fn warning(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    );

    fn error(
        &self,
        message: &dyn Fn() -> String,
        location: &SourceLocation,
        context: Option<&SinkContext<'_>>,
    );
}
