use crate::{
    error::{Error, Result},
    rules::FormRules,
};
use std::{env, path::PathBuf, sync::OnceLock};

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules_path: Option<PathBuf>,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_dir: PathBuf,
    pub log_file: String,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            rules_path: get_path_from_env("VALIDATORS_RULES_PATH"),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// Load the rule table pointed to by `rules_path`, if any.
    ///
    /// # Errors
    ///
    /// Propagates `FormRules::from_file` errors.
    pub fn load_rules(&self) -> Result<Option<FormRules>> {
        self.rules_path
            .as_ref()
            .map(FormRules::from_file)
            .transpose()
    }

    /// Initialize the global config (call once at startup).
    ///
    /// # Errors
    ///
    /// Returns error if config is already initialized.
    pub fn init(self) -> Result<()> {
        GLOBAL_CONFIG
            .set(self)
            .map_err(|_| Error::other("config already initialized"))
    }
}

/// Get global config (initialized by `Config::init(self)`).
#[must_use]
pub fn global_config() -> Config {
    GLOBAL_CONFIG.get().cloned().unwrap_or_default()
}

impl TelemetryConfig {
    const DEFAULT_LOG_DIR: &'static str = ".logs";
    const DEFAULT_LOG_FILE: &'static str = "custom-validators.log";

    fn from_env() -> Self {
        Self {
            log_dir: env::var("VALIDATORS_LOG_DIR")
                .map_or_else(|_| Self::DEFAULT_LOG_DIR.into(), PathBuf::from),
            log_file: env::var("VALIDATORS_LOG_FILE")
                .unwrap_or_else(|_| Self::DEFAULT_LOG_FILE.to_string()),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_dir: Self::DEFAULT_LOG_DIR.into(),
            log_file: Self::DEFAULT_LOG_FILE.into(),
        }
    }
}

fn get_path_from_env(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_file())
}
