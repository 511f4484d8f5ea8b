pub mod entry;
pub mod question;

pub use entry::{CefrLevel, EntryField, VocabularyEntry, WordsFile};
pub use question::{Question, QuestionType};
