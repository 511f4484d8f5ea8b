use std::fmt;

mod mymemory;

pub use mymemory::{MyMemoryTranslator, TranslationResult};

/// Marker appended when a translation could not be obtained
pub const UNAVAILABLE_MARKER: &str = "(çeviri alınamadı)";

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` across `pair`.
    ///
    /// Service-side failures come back as [`Translated::Unavailable`];
    /// `Err` is reserved for requests that could not be built at all.
    async fn translate(&self, text: &str, pair: &LanguagePair)
    -> Result<Translated, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub from: LanguageCode,
    pub to: LanguageCode,
}

impl LanguagePair {
    pub fn new(from: impl Into<LanguageCode>, to: impl Into<LanguageCode>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// `en|tr` form used in query strings
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.from, self.to)
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "tr")
    }
}

/// Outcome of one translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translated {
    Text(String),
    /// Carries the text that was sent
    Unavailable(String),
}

impl Translated {
    pub fn text(&self) -> Option<&str> {
        match self {
            Translated::Text(text) => Some(text),
            Translated::Unavailable(_) => None,
        }
    }
}

impl fmt::Display for Translated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Translated::Text(text) => f.write_str(text),
            Translated::Unavailable(original) => write!(f, "{original} {UNAVAILABLE_MARKER}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TranslateError {
    /// Whether the failure came from the service rather than from building the request
    pub fn is_transient(&self) -> bool {
        match self {
            TranslateError::NetworkError(e) => !e.is_builder(),
            TranslateError::ApiError(_) | TranslateError::MalformedResponse(_) => true,
            TranslateError::InvalidRequest(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_boundary_string() {
        let miss = Translated::Unavailable("ephemeral".to_string());
        assert_eq!(miss.to_string(), "ephemeral (çeviri alınamadı)");
        assert_eq!(miss.text(), None);

        let hit = Translated::Text("geçici".to_string());
        assert_eq!(hit.to_string(), "geçici");
        assert_eq!(hit.text(), Some("geçici"));
    }

    #[test]
    fn test_default_pair() {
        assert_eq!(LanguagePair::default().langpair(), "en|tr");
    }

    #[test]
    fn test_error_classification() {
        assert!(TranslateError::ApiError("HTTP 500".into()).is_transient());
        assert!(!TranslateError::InvalidRequest("bad url".into()).is_transient());
    }
}
