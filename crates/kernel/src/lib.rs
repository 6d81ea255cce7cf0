//! Core log types, backend traits, and layered settings.

pub mod category;
pub mod error;
pub mod event;
pub mod level;
pub mod logger;
pub mod reporter;
pub mod settings;
pub mod sink;

pub use category::LogCategory;
pub use error::ParseError;
pub use event::{Extra, LogEvent, SourceLocation, ERROR_DESCRIPTION_KEY};
pub use level::LogLevel;
pub use logger::Logger;
pub use reporter::CrashReporter;
pub use settings::Settings;
pub use sink::{LogSink, SinkContext};
