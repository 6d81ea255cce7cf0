//! Errors raised while bootstrapping the tracing pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}'")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install global tracing subscriber: {0}")]
    SubscriberInstall(String),
}
