mod free_dictionary;
pub mod types;

pub use free_dictionary::FreeDictionaryClient;
pub use types::{Definition, DictionaryLookupResult, Meaning};

/// Online dictionary lookup
#[async_trait::async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up a headword.
    ///
    /// `Ok(None)` is a miss, which includes transport and service failures.
    /// `Err` means the request could not be issued at all.
    async fn lookup(&self, word: &str) -> Result<Option<DictionaryLookupResult>, LookupError>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub base_url: String,
    pub language: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl LookupError {
    /// Whether the failure should be treated as a plain miss
    pub fn is_transient(&self) -> bool {
        match self {
            LookupError::Status(_) => true,
            LookupError::Network(e) => !e.is_builder(),
            LookupError::InvalidRequest(_) => false,
        }
    }
}
