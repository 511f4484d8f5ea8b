//! Detection of stub values left in the seed dataset.
//!
//! The seed data was generated with filler text ("Definition for run",
//! "Example sentence with run", "(Türkçe çeviri)") that must never be
//! mistaken for real content. These checks keep those exact patterns.

/// Filler prefix of generated English definitions
pub const DEFINITION_PLACEHOLDER: &str = "Definition for";
/// Filler prefix of generated example sentences
pub const EXAMPLE_PLACEHOLDER: &str = "Example sentence with";
/// Turkish definition that was never filled in
pub const TURKISH_PLACEHOLDER: &str = "(Türkçe çeviri)";
/// Turkish definition left behind by a failed translation
pub const TURKISH_NOT_FOUND: &str = "(çeviri bulunamadı)";
/// Real content must be strictly longer than this many characters
pub const MIN_CONTENT_CHARS: usize = 10;

/// Classification of an English text value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextState<'a> {
    Empty,
    Placeholder,
    TooShort,
    Content(&'a str),
}

impl<'a> TextState<'a> {
    pub fn classify(text: &'a str) -> Self {
        if text.trim().is_empty() {
            TextState::Empty
        } else if text.contains(DEFINITION_PLACEHOLDER) || text.contains(EXAMPLE_PLACEHOLDER) {
            TextState::Placeholder
        } else if text.chars().count() <= MIN_CONTENT_CHARS {
            TextState::TooShort
        } else {
            TextState::Content(text)
        }
    }

    pub fn content(&self) -> Option<&'a str> {
        match self {
            TextState::Content(text) => Some(text),
            _ => None,
        }
    }
}

/// Shorthand for `TextState::classify(text).content().is_some()`
pub fn is_real_content(text: &str) -> bool {
    TextState::classify(text).content().is_some()
}

/// Classification of the Turkish definition relative to its headword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurkishState {
    /// One of the known filler strings
    Placeholder,
    /// Still holds the English headword
    Untranslated,
    Filled,
}

impl TurkishState {
    pub fn classify(word: &str, definition_turkish: &str) -> Self {
        if definition_turkish == TURKISH_PLACEHOLDER || definition_turkish == TURKISH_NOT_FOUND {
            TurkishState::Placeholder
        } else if definition_turkish == word {
            TurkishState::Untranslated
        } else {
            TurkishState::Filled
        }
    }

    pub fn needs_translation(&self) -> bool {
        !matches!(self, TurkishState::Filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_state() {
        assert_eq!(TextState::classify(""), TextState::Empty);
        assert_eq!(TextState::classify("   "), TextState::Empty);
        assert_eq!(TextState::classify("Definition for ephemeral"), TextState::Placeholder);
        assert_eq!(
            TextState::classify("This is an Example sentence with run."),
            TextState::Placeholder
        );
        assert_eq!(TextState::classify("Brief."), TextState::TooShort);
        // exactly ten characters is still too short
        assert_eq!(TextState::classify("0123456789"), TextState::TooShort);
        assert_eq!(
            TextState::classify("01234567890"),
            TextState::Content("01234567890")
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 characters, 14 bytes
        assert_eq!(TextState::classify("çiçekçiğiş"), TextState::TooShort);
        assert!(is_real_content("çiçekçiğişi"));
    }

    #[test]
    fn test_turkish_state() {
        assert_eq!(
            TurkishState::classify("run", "(Türkçe çeviri)"),
            TurkishState::Placeholder
        );
        assert_eq!(
            TurkishState::classify("run", "(çeviri bulunamadı)"),
            TurkishState::Placeholder
        );
        assert_eq!(TurkishState::classify("run", "run"), TurkishState::Untranslated);
        // the headword is case-sensitive
        assert_eq!(TurkishState::classify("Run", "run"), TurkishState::Filled);
        assert_eq!(TurkishState::classify("run", "koşmak"), TurkishState::Filled);

        assert!(TurkishState::Placeholder.needs_translation());
        assert!(TurkishState::Untranslated.needs_translation());
        assert!(!TurkishState::Filled.needs_translation());
    }
}
