//! logbridge application library
//!
//! Wires settings into the logger facade and its stock backends.

pub mod bootstrap;

/// Re-export commonly used types
pub use bootstrap::{build, start, Backends};
