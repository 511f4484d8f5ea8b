use std::time::Duration;

use async_trait::async_trait;

use crate::{Dictionary, DictionaryLookupResult, DictionaryMetadata, LookupError};

/// Client for dictionaryapi.dev style services (`GET <base>/<word>`)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn entry_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(word)
        )
    }

    async fn fetch_body(&self, word: &str) -> Result<String, LookupError> {
        let response = self.client.get(self.entry_url(word)).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Dictionary for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Option<DictionaryLookupResult>, LookupError> {
        if word.trim().is_empty() {
            return Err(LookupError::InvalidRequest("empty word".to_string()));
        }

        match self.fetch_body(word).await {
            Ok(body) => {
                let result = DictionaryLookupResult::from_body(&body);
                if result.is_none() {
                    tracing::warn!("Dictionary returned no usable entry for '{}'", word);
                }
                Ok(result)
            }
            Err(e) if e.is_transient() => {
                tracing::warn!("Dictionary lookup failed for '{}': {}", word, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.base_url.clone(),
            language: "en".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url_encodes_word() {
        let client = FreeDictionaryClient::new("https://example.test/entries/en/".to_string());
        assert_eq!(
            client.entry_url("ice cream"),
            "https://example.test/entries/en/ice%20cream"
        );
        assert_eq!(client.entry_url("café"), "https://example.test/entries/en/caf%C3%A9");
    }

    #[tokio::test]
    async fn test_empty_word_is_rejected() {
        let client = FreeDictionaryClient::new("https://example.test".to_string());
        let err = client.lookup("  ").await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_an_error() {
        let client = FreeDictionaryClient::new("no scheme here".to_string());
        assert!(client.lookup("run").await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_miss() {
        let client = FreeDictionaryClient::with_timeout(
            "http://127.0.0.1:9/api".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        assert_eq!(client.lookup("run").await.unwrap(), None);
    }
}
