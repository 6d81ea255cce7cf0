use std::fmt;
use std::panic::Location;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::LogCategory;
use crate::error::ParseError;
use crate::level::LogLevel;

/// Reserved extras key under which the description travels to the crash reporter.
pub const ERROR_DESCRIPTION_KEY: &str = "errorDescription";

/// Free-form key/value context attached to a log call.
///
/// Keys keep their insertion order; re-inserting a key replaces its value in
/// place. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extra(IndexMap<String, String>);

impl Extra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a single `key=value` pair as given on a command line.
    pub fn parse_pair(raw: &str) -> Result<(String, String), ParseError> {
        match raw.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(ParseError::MalformedExtra(raw.to_string())),
        }
    }
}

/// Renders as `key: value` pairs joined by `", "`.
impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for Extra
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Extra
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Where a log call was made from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub function: Option<&'static str>,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, function: Option<&'static str>, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Location of the caller. The function name is not available this way;
    /// use [`source_location!`](crate::source_location) when it matters.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), None, location.line())
    }
}

/// Capture the current file, module path, and line as a [`SourceLocation`].
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(file!(), Some(module_path!()), line!())
    };
}

/// A single log call, built at the call site and consumed by a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub message: String,
    pub level: LogLevel,
    pub category: LogCategory,
    pub extra: Extra,
    pub description: Option<String>,
    pub location: SourceLocation,
}

impl LogEvent {
    #[track_caller]
    pub fn new(message: impl Into<String>, level: LogLevel, category: LogCategory) -> Self {
        Self {
            message: message.into(),
            level,
            category,
            extra: Extra::new(),
            description: None,
            location: SourceLocation::caller(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key, value);
        self
    }

    pub fn with_extras(mut self, extra: Extra) -> Self {
        for (key, value) in extra.0 {
            self.extra.insert(key, value);
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    /// `message[ - description][, key: value...]`
    pub fn formatted_message(&self) -> String {
        let mut formatted = self.message.clone();
        if let Some(description) = &self.description {
            formatted.push_str(" - ");
            formatted.push_str(description);
        }
        if !self.extra.is_empty() {
            formatted.push_str(", ");
            formatted.push_str(&self.extra.to_string());
        }
        formatted
    }

    /// Extras handed to the crash reporter: the caller's extras plus the
    /// description under [`ERROR_DESCRIPTION_KEY`], which takes precedence.
    pub fn telemetry_extras(&self) -> Extra {
        let mut extras = self.extra.clone();
        if let Some(description) = &self.description {
            extras.insert(ERROR_DESCRIPTION_KEY, description.clone());
        }
        extras
    }
}
