use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{LanguagePair, ProviderMetadata, TranslateError, Translated, Translator};

const SUCCESS_STATUS: u16 = 200;

/// Parsed MyMemory response
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub translated_text: String,
    /// 0-1 confidence reported by the service
    pub match_score: f64,
    pub status_code: u16,
    pub quota_finished: bool,
}

impl TranslationResult {
    pub fn from_body(body: &str) -> Result<Self, TranslateError> {
        let wire: WireResponse = serde_json::from_str(body)?;
        let data = wire.response_data.unwrap_or_default();

        Ok(Self {
            translated_text: data.translated_text.unwrap_or_default(),
            match_score: number_like(&data.match_score).unwrap_or(0.0),
            status_code: number_like(&wire.response_status)
                .map(|s| s as u16)
                .unwrap_or(0),
            quota_finished: wire.quota_finished.unwrap_or(false),
        })
    }

    /// Only a 200 with actual text counts as a translation
    pub fn is_usable(&self) -> bool {
        self.status_code == SUCCESS_STATUS && !self.translated_text.trim().is_empty()
    }
}

// MyMemory sends numbers either as JSON numbers or as numeric strings
fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    #[serde(default)]
    response_data: Option<WireData>,
    #[serde(default)]
    response_status: Value,
    #[serde(default)]
    quota_finished: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct WireData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
    #[serde(rename = "match", default)]
    match_score: Value,
}

/// Client for the MyMemory translation API (`GET <base>?q=..&langpair=..`)
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl MyMemoryTranslator {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    async fn request(
        &self,
        text: &str,
        pair: &LanguagePair,
    ) -> Result<TranslationResult, TranslateError> {
        let langpair = pair.langpair();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        TranslationResult::from_body(&body)
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(
        &self,
        text: &str,
        pair: &LanguagePair,
    ) -> Result<Translated, TranslateError> {
        match self.request(text, pair).await {
            Ok(result) if result.is_usable() => {
                tracing::debug!(
                    "Translated '{}' (match {:.2})",
                    text,
                    result.match_score
                );
                Ok(Translated::Text(result.translated_text))
            }
            Ok(result) => {
                tracing::warn!(
                    status = result.status_code,
                    quota_finished = result.quota_finished,
                    "No usable translation for '{}'",
                    text
                );
                Ok(Translated::Unavailable(text.to_string()))
            }
            Err(e) if e.is_transient() => {
                tracing::warn!("Translation lookup failed for '{}': {}", text, e);
                Ok(Translated::Unavailable(text.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}
