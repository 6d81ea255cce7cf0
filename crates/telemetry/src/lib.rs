//! Logger facade implementation and its default backends.
//!
//! [`DefaultLogger`] sends every event to a [`LogSink`](logbridge_kernel::LogSink)
//! and fatal ones to a [`CrashReporter`](logbridge_kernel::CrashReporter).
//! [`TracingSink`] and [`DefaultCrashReporter`] are the stock backends;
//! [`init`] installs the `tracing` subscriber the sink writes through.

pub mod crash;
pub mod error;
pub mod logger;
pub mod sink;
pub mod subscriber;

pub use crash::{CrashReport, DefaultCrashReporter};
pub use error::TelemetryError;
pub use logger::DefaultLogger;
pub use sink::TracingSink;
pub use subscriber::init;
