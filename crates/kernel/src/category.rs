use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Subsystem a log event originates from. Carried through to backends untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    Setup,
    Lifecycle,
    Storage,
    Sync,
    Network,
    Tabs,
    Telemetry,
}

impl LogCategory {
    pub const ALL: [LogCategory; 7] = [
        LogCategory::Setup,
        LogCategory::Lifecycle,
        LogCategory::Storage,
        LogCategory::Sync,
        LogCategory::Network,
        LogCategory::Tabs,
        LogCategory::Telemetry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Setup => "setup",
            LogCategory::Lifecycle => "lifecycle",
            LogCategory::Storage => "storage",
            LogCategory::Sync => "sync",
            LogCategory::Network => "network",
            LogCategory::Tabs => "tabs",
            LogCategory::Telemetry => "telemetry",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}
