use serde::Deserialize;
use serde_json::Value;

/// One dictionary entry as returned by the lookup service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DictionaryLookupResult {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl DictionaryLookupResult {
    /// Parse a response body that is either a list of entries or a single entry.
    ///
    /// Anything else (empty list, error object, garbage) is `None`.
    pub fn from_body(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let first = match value {
            Value::Array(items) => items.into_iter().next()?,
            object @ Value::Object(_) => object,
            _ => return None,
        };
        serde_json::from_value(first).ok()
    }

    pub fn first_meaning(&self) -> Option<&Meaning> {
        self.meanings.first()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Meaning {
    pub fn first_definition(&self) -> Option<&Definition> {
        self.definitions.first()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}
