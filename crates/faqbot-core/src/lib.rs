//! Shared configuration and corpus types for the FAQ bot.
//!
//! Holds the env-derived [`AppConfig`], the FAQ corpus loader, and the
//! [`ConfigError`] type they both report through.

mod app_config;
mod config;
mod faqs;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use faqs::{load_faqs, FaqItem};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read FAQ file {path}: {source}")]
    FaqsFileIo {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse FAQ file: {0}")]
    FaqsFileParse(#[from] serde_yaml::Error),

    #[error("invalid FAQ corpus: {0}")]
    Validation(String),
}
