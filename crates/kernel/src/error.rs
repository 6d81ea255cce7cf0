//! Errors raised while turning user input into log types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown log level '{0}'; expected debug/info/warning/fatal")]
    UnknownLevel(String),

    #[error("unknown log category '{0}'")]
    UnknownCategory(String),

    #[error("malformed extra '{0}'; expected key=value")]
    MalformedExtra(String),
}
