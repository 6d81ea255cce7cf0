use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "LOGBRIDGE_ENV";
const CONFIG_DIR_ENV: &str = "LOGBRIDGE_CONFIG_DIR";
const ENV_PREFIX: &str = "LOGBRIDGE";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .map(|cwd| cwd.join("config"))
                .with_context(|| "unable to resolve current directory")?,
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load from an explicit config directory and environment name, still
    /// honouring `LOGBRIDGE_*` variables as the final layer.
    pub fn load_from(config_dir: &std::path::Path, environment: &str) -> anyhow::Result<Self> {
        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = match environment {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        tracing::debug!(
            env = settings.environment.as_str(),
            config_dir = %config_dir.display(),
            "settings loaded"
        );

        Ok(settings)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub format: LogFormat,
    /// `EnvFilter` directive, e.g. `info` or `logbridge=debug,warn`.
    #[serde(default = "LoggingSettings::default_filter")]
    pub filter: String,
    #[serde(default = "LoggingSettings::default_ansi")]
    pub ansi: bool,
}

impl LoggingSettings {
    fn default_filter() -> String {
        "info".to_string()
    }

    fn default_ansi() -> bool {
        true
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: Self::default_filter(),
            ansi: Self::default_ansi(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySettings {
    /// Crash reporting endpoint. Reporting stays off while unset.
    #[serde(default)]
    pub dsn: Option<String>,
    #[serde(default)]
    pub send_usage_data: bool,
    #[serde(default = "TelemetrySettings::default_outbox_capacity")]
    pub outbox_capacity: usize,
    #[serde(default)]
    pub crashed_last_launch: bool,
}

impl TelemetrySettings {
    fn default_outbox_capacity() -> usize {
        100
    }
}

const REDACTED: &str = "<redacted>";

impl Settings {
    /// Copy safe to print: secrets such as the crash reporting DSN are masked.
    pub fn redacted(&self) -> Self {
        let mut settings = self.clone();
        if settings.telemetry.dsn.is_some() {
            settings.telemetry.dsn = Some(REDACTED.to_string());
        }
        settings
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            dsn: None,
            send_usage_data: false,
            outbox_capacity: Self::default_outbox_capacity(),
            crashed_last_launch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &std::path::Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    fn scratch_dir() -> tempfile::TempDir {
        tempfile::Builder::new()
            .prefix("logbridge-settings-")
            .tempdir()
            .unwrap()
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_telemetry_is_opted_out_without_dsn() {
        let settings = Settings::default();
        assert!(settings.telemetry.dsn.is_none());
        assert!(!settings.telemetry.send_usage_data);
        assert_eq!(settings.telemetry.outbox_capacity, 100);
    }

    #[test]
    fn default_logging_is_pretty_info() {
        let settings = Settings::default();
        assert_eq!(settings.logging.format, LogFormat::Pretty);
        assert_eq!(settings.logging.filter, "info");
    }

    #[test]
    fn environment_file_overlays_base() {
        let scratch = scratch_dir();
        let dir = scratch.path();
        write_config(
            dir,
            "base.toml",
            "[logging]\nfilter = \"debug\"\n\n[telemetry]\noutbox_capacity = 5\n",
        );
        write_config(
            dir,
            "staging.toml",
            "[logging]\nformat = \"json\"\n\n[telemetry]\ndsn = \"https://key@crash.example/1\"\nsend_usage_data = true\n",
        );

        let settings = Settings::load_from(dir, "staging").unwrap();
        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.logging.filter, "debug");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.telemetry.outbox_capacity, 5);
        assert_eq!(
            settings.telemetry.dsn.as_deref(),
            Some("https://key@crash.example/1")
        );
        assert!(settings.telemetry.send_usage_data);
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let scratch = scratch_dir();
        let settings = Settings::load_from(scratch.path(), "production").unwrap();
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.telemetry.outbox_capacity, 100);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let scratch = scratch_dir();
        let err = Settings::load_from(scratch.path(), "qa").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'qa'"));
    }

    #[test]
    fn scratch_config_dir_is_removed_on_drop() {
        let scratch = scratch_dir();
        let path = scratch.path().to_path_buf();
        write_config(&path, "base.toml", "[logging]\nfilter = \"warn\"\n");
        assert!(Settings::load_from(&path, "local").is_ok());

        drop(scratch);
        assert!(!path.exists());
    }

    #[test]
    fn redacted_masks_dsn_only() {
        let mut settings = Settings::default();
        settings.telemetry.dsn = Some("https://secret-key@crash.example/1".to_string());
        settings.telemetry.send_usage_data = true;

        let redacted = settings.redacted();
        assert_eq!(redacted.telemetry.dsn.as_deref(), Some("<redacted>"));
        assert!(redacted.telemetry.send_usage_data);
        assert_eq!(
            settings.telemetry.dsn.as_deref(),
            Some("https://secret-key@crash.example/1")
        );
    }

    #[test]
    fn redacted_leaves_missing_dsn_unset() {
        assert!(Settings::default().redacted().telemetry.dsn.is_none());
    }
}
