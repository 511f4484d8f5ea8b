use std::sync::Arc;

use kelime_dictionary::{Dictionary, Meaning};
use kelime_translator::{LanguagePair, Translator};
use kelime_types::{EntryField, VocabularyEntry};

use crate::error::{EnrichError, Result};
use crate::pacer::Pacer;
use crate::placeholder::{TextState, TurkishState, is_real_content};

/// Joins an example sentence with its translation
pub const EXAMPLE_SEPARATOR: &str = " | ";

/// Result of improving one entry
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentOutcome {
    pub entry: VocabularyEntry,
    /// Fields whose value differs from the input
    pub changed: Vec<EntryField>,
}

impl EnrichmentOutcome {
    pub fn is_changed(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Per-entry merge logic between the seed record and the two lookup services
pub struct FieldImprover {
    dictionary: Arc<dyn Dictionary>,
    translator: Arc<dyn Translator>,
    pair: LanguagePair,
    pacer: Pacer,
}

impl FieldImprover {
    pub fn new(
        dictionary: Arc<dyn Dictionary>,
        translator: Arc<dyn Translator>,
        pair: LanguagePair,
        pacer: Pacer,
    ) -> Self {
        Self {
            dictionary,
            translator,
            pair,
            pacer,
        }
    }

    /// Return an improved copy of `entry`.
    ///
    /// Issues at most three paced calls in a fixed order: dictionary lookup,
    /// translation of the headword, translation of the example sentence.
    pub async fn improve(&self, entry: &VocabularyEntry) -> Result<EnrichmentOutcome> {
        if entry.word.trim().is_empty() {
            return Err(EnrichError::InvalidEntry("entry has an empty word".to_string()));
        }

        let mut improved = entry.clone();

        let lookup = self
            .pacer
            .paced(self.dictionary.lookup(&entry.word))
            .await?;

        match lookup.as_ref().and_then(|result| result.first_meaning()) {
            Some(meaning) => apply_meaning(&mut improved, meaning),
            None => tracing::debug!("No dictionary meaning for '{}'", entry.word),
        }

        let turkish = TurkishState::classify(&improved.word, &improved.definition_turkish);
        if turkish.needs_translation() {
            let translated = self
                .pacer
                .paced(self.translator.translate(&improved.word, &self.pair))
                .await?;

            match translated.text() {
                Some(text) => improved.definition_turkish = text.to_string(),
                None => tracing::debug!("Turkish definition unchanged: {}", translated),
            }
        }

        if should_translate_example(&improved.example_sentence) {
            let translated = self
                .pacer
                .paced(self.translator.translate(&improved.example_sentence, &self.pair))
                .await?;

            if let Some(text) = translated.text() {
                improved.example_sentence =
                    format!("{}{}{}", improved.example_sentence, EXAMPLE_SEPARATOR, text);
            }
        }

        let changed = entry.changed_fields(&improved);
        Ok(EnrichmentOutcome {
            entry: improved,
            changed,
        })
    }
}

fn apply_meaning(entry: &mut VocabularyEntry, meaning: &Meaning) {
    // dictionary wins for part of speech, but never blank it out
    if !meaning.part_of_speech.trim().is_empty() {
        entry.part_of_speech = meaning.part_of_speech.clone();
    }

    let Some(definition) = meaning.first_definition() else {
        return;
    };

    match TextState::classify(&definition.text) {
        TextState::Content(text) => entry.definition_english = text.to_string(),
        state => tracing::debug!(
            "Rejected definition for '{}' ({:?}): {:?}",
            entry.word,
            state,
            definition.text
        ),
    }

    if let Some(example) = definition.example.as_deref() {
        match TextState::classify(example) {
            TextState::Content(text) => entry.example_sentence = text.to_string(),
            state => tracing::debug!(
                "Rejected example for '{}' ({:?}): {:?}",
                entry.word,
                state,
                example
            ),
        }
    }
}

/// Real, long enough, and not already carrying a translation
fn should_translate_example(example: &str) -> bool {
    is_real_content(example) && !is_bilingual(example)
}

/// Shape left by an earlier run: `<sentence> | <translation>`, where the
/// sentence before a separator ends in terminal punctuation.
fn is_bilingual(example: &str) -> bool {
    example.match_indices(EXAMPLE_SEPARATOR).any(|(at, _)| {
        let original = &example[..at];
        let translation = &example[at + EXAMPLE_SEPARATOR.len()..];
        original.trim_end().ends_with(['.', '!', '?', '…']) && !translation.trim().is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bilingual() {
        assert!(is_bilingual("The flowers are ephemeral. | Çiçekler geçicidir."));
        assert!(is_bilingual("Is it far? | Uzak mı?"));
        assert!(!is_bilingual("The flowers are ephemeral."));
        assert!(!is_bilingual("Type yes | no and press enter."));
        assert!(!is_bilingual("It ended. | "));
        assert!(is_bilingual(
            "Type yes | no at the prompt to continue. | Devam etmek için evet | hayır yazın."
        ));
    }
}
