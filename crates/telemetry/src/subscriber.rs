//! Process-wide `tracing` subscriber installation.

use logbridge_kernel::settings::{LogFormat, LoggingSettings};
use tracing_subscriber::EnvFilter;

use crate::error::TelemetryError;

/// Build the filter from `RUST_LOG` when present, otherwise from settings.
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter, TelemetryError> {
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| settings.filter.clone());

    EnvFilter::try_new(&directive).map_err(|source| TelemetryError::InvalidFilter {
        filter: directive,
        source,
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = build_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(settings.ansi);

    let installed = match settings.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };

    installed.map_err(|e| TelemetryError::SubscriberInstall(e.to_string()))?;

    tracing::debug!(
        target: "logbridge",
        format = ?settings.format,
        filter = %settings.filter,
        "tracing subscriber installed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_directive() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            return;
        }
        let settings = LoggingSettings {
            filter: "logbridge=notalevel".to_string(),
            ..LoggingSettings::default()
        };
        let err = build_filter(&settings).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { ref filter, .. } if filter == "logbridge=notalevel"));
    }

    #[test]
    fn accepts_default_directive() {
        assert!(build_filter(&LoggingSettings::default()).is_ok());
    }
}
