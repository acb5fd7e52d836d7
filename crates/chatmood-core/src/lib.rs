//! Shared domain types and configuration for the chatmood workspace.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod emotion;
pub mod message;
pub mod scores;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use emotion::{EmotionCategory, EmotionFlags};
pub use message::Message;
pub use scores::{EmotionScores, PolarityScores};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),
}
