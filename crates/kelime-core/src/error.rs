use std::path::PathBuf;

use kelime_dictionary::LookupError;
use kelime_translator::TranslateError;

#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Dictionary lookup failed: {0}")]
    Dictionary(#[from] LookupError),

    #[error("Translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Failed to read source dataset {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed source dataset {}: {source}", .path.display())]
    MalformedSource {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{role} path {} collides with {}", .path.display(), .other.display())]
    PathCollision {
        role: &'static str,
        path: PathBuf,
        other: PathBuf,
    },

    #[error("Failed to write backup {}: {source}", .path.display())]
    WriteBackup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write improved dataset {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize improved dataset: {0}")]
    Serialize(serde_json::Error),
}

impl EnrichError {
    /// Fatal errors end the run; the rest only cost one entry its improvements
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            EnrichError::Dictionary(_) | EnrichError::Translate(_) | EnrichError::InvalidEntry(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EnrichError>;
