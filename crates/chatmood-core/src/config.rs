use std::env::VarError;
use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Load configuration from the process environment, reading a `.env` file
/// first when one exists.
///
/// # Errors
/// Returns [`ConfigError::MissingEnvVar`] when a required variable is unset
/// or blank.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from the process environment without touching `.env`.
///
/// # Errors
/// Returns [`ConfigError::MissingEnvVar`] when a required variable is unset
/// or blank.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|var| std::env::var(var))
}

fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let polarity_lexicon_path = PathBuf::from(require(&lookup, "CHATMOOD_POLARITY_LEXICON")?);
    let emotion_lexicon_path = PathBuf::from(require(&lookup, "CHATMOOD_EMOTION_LEXICON")?);
    let log_level =
        lookup("CHATMOOD_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    Ok(AppConfig {
        polarity_lexicon_path,
        emotion_lexicon_path,
        log_level,
    })
}

fn require<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}
