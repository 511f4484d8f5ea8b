use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lookups are issued as `GET <base_url>/<word>`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
