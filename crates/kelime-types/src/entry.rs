use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dataset document as stored on disk: `{ "words": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordsFile {
    pub words: Vec<VocabularyEntry>,
    /// Any other top-level keys, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordsFile {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A single vocabulary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    pub cefr_level: CefrLevel,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definition_english: String,
    #[serde(default)]
    pub definition_turkish: String,
    #[serde(default)]
    pub example_sentence: String,
    /// Lower = more common
    #[serde(default)]
    pub frequency_rank: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>, cefr_level: CefrLevel) -> Self {
        Self {
            word: word.into(),
            cefr_level,
            part_of_speech: String::new(),
            definition_english: String::new(),
            definition_turkish: String::new(),
            example_sentence: String::new(),
            frequency_rank: 0,
            extra: Map::new(),
        }
    }

    /// Read a text field by tag
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::PartOfSpeech => &self.part_of_speech,
            EntryField::DefinitionEnglish => &self.definition_english,
            EntryField::DefinitionTurkish => &self.definition_turkish,
            EntryField::ExampleSentence => &self.example_sentence,
        }
    }

    /// Text fields whose value differs between `self` and `other`
    pub fn changed_fields(&self, other: &VocabularyEntry) -> Vec<EntryField> {
        EntryField::ALL
            .into_iter()
            .filter(|f| self.field(*f) != other.field(*f))
            .collect()
    }
}

/// CEFR proficiency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CefrLevel {
    A1, // Beginner
    A2, // Elementary
    B1, // Intermediate
    B2, // Upper intermediate
    C1, // Advanced
    C2, // Proficient
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enrichable text fields of a [`VocabularyEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryField {
    PartOfSpeech,
    DefinitionEnglish,
    DefinitionTurkish,
    ExampleSentence,
}

impl EntryField {
    pub const ALL: [EntryField; 4] = [
        EntryField::PartOfSpeech,
        EntryField::DefinitionEnglish,
        EntryField::DefinitionTurkish,
        EntryField::ExampleSentence,
    ];

    /// JSON key of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::PartOfSpeech => "partOfSpeech",
            EntryField::DefinitionEnglish => "definitionEnglish",
            EntryField::DefinitionTurkish => "definitionTurkish",
            EntryField::ExampleSentence => "exampleSentence",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
