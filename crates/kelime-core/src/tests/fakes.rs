//! In-memory adapters that record every call

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use kelime_dictionary::{
    Definition, Dictionary, DictionaryLookupResult, DictionaryMetadata, LookupError, Meaning,
};
use kelime_translator::{LanguagePair, ProviderMetadata, TranslateError, Translated, Translator};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Lookup(String),
    Translate(String),
}

/// Shared, ordered record of adapter calls
#[derive(Default)]
pub struct CallLog {
    calls: Mutex<Vec<(Call, Instant)>>,
}

impl CallLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push((call, Instant::now()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn instants(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub fn translations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Translate(text) => Some(text),
                Call::Lookup(_) => None,
            })
            .collect()
    }
}

#[derive(Clone)]
pub enum FakeLookup {
    Hit(DictionaryLookupResult),
    Fail,
}

/// Dictionary with canned answers; unknown words are misses
pub struct FakeDictionary {
    answers: HashMap<String, FakeLookup>,
    log: Arc<CallLog>,
}

impl FakeDictionary {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self {
            answers: HashMap::new(),
            log,
        }
    }

    pub fn hit(mut self, word: &str, result: DictionaryLookupResult) -> Self {
        self.answers.insert(word.to_string(), FakeLookup::Hit(result));
        self
    }

    pub fn fail(mut self, word: &str) -> Self {
        self.answers.insert(word.to_string(), FakeLookup::Fail);
        self
    }
}

#[async_trait]
impl Dictionary for FakeDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<DictionaryLookupResult>, LookupError> {
        self.log.push(Call::Lookup(word.to_string()));
        match self.answers.get(word) {
            Some(FakeLookup::Hit(result)) => Ok(Some(result.clone())),
            Some(FakeLookup::Fail) => Err(LookupError::InvalidRequest(format!("boom: {word}"))),
            None => Ok(None),
        }
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "fake dictionary".to_string(),
            base_url: "memory://dictionary".to_string(),
            language: "en".to_string(),
        }
    }
}

#[derive(Clone)]
pub enum FakeTranslation {
    Text(String),
    Fail,
}

/// Translator with canned answers; unknown texts are unavailable
pub struct FakeTranslator {
    answers: HashMap<String, FakeTranslation>,
    log: Arc<CallLog>,
}

impl FakeTranslator {
    pub fn new(log: Arc<CallLog>) -> Self {
        Self {
            answers: HashMap::new(),
            log,
        }
    }

    pub fn text(mut self, source: &str, translated: &str) -> Self {
        self.answers.insert(
            source.to_string(),
            FakeTranslation::Text(translated.to_string()),
        );
        self
    }

    pub fn fail(mut self, source: &str) -> Self {
        self.answers.insert(source.to_string(), FakeTranslation::Fail);
        self
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        _pair: &LanguagePair,
    ) -> Result<Translated, TranslateError> {
        self.log.push(Call::Translate(text.to_string()));
        match self.answers.get(text) {
            Some(FakeTranslation::Text(translated)) => Ok(Translated::Text(translated.clone())),
            Some(FakeTranslation::Fail) => {
                Err(TranslateError::InvalidRequest(format!("boom: {text}")))
            }
            None => Ok(Translated::Unavailable(text.to_string())),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake translator".to_string(),
            base_url: "memory://translator".to_string(),
        }
    }
}

/// One-meaning dictionary result
pub fn lookup_result(
    word: &str,
    part_of_speech: &str,
    definition: &str,
    example: Option<&str>,
) -> DictionaryLookupResult {
    DictionaryLookupResult {
        word: word.to_string(),
        phonetic: None,
        meanings: vec![Meaning {
            part_of_speech: part_of_speech.to_string(),
            definitions: vec![Definition {
                text: definition.to_string(),
                example: example.map(str::to_string),
                synonyms: None,
                antonyms: None,
            }],
        }],
    }
}
