use serde::{Deserialize, Serialize};

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "tr".to_string()
}

fn default_base_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            base_url: default_base_url(),
        }
    }
}

impl TranslatorConfig {
    /// Language pair in `from|to` form
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.from_lang, self.to_lang)
    }
}
