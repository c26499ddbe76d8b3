use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum NoorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned {code}: {status}")]
    Api { code: u16, status: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Dua not found: {0}")]
    DuaNotFound(u32),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(u16),
}

pub type Result<T> = std::result::Result<T, NoorError>;
