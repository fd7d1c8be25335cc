use thiserror::Error;

use crate::core::models::CardId;

#[derive(Error, Debug)]
pub enum KiokuError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Duplicate card id: row {0} appears more than once")]
    DuplicateCardId(CardId),

    #[error("Card not found: row {0}")]
    CardNotFound(CardId),

    #[error("KiokuError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KiokuError {
    fn from(error: std::io::Error) -> Self {
        KiokuError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for KiokuError {
    fn from(error: reqwest::Error) -> Self {
        KiokuError::Reqwest(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, KiokuError>;
