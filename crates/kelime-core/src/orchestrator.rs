use std::collections::BTreeMap;

use kelime_types::{EntryField, VocabularyEntry};

use crate::improver::{EnrichmentOutcome, FieldImprover};

/// Output of one pass over the dataset
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Same length and order as the input
    pub entries: Vec<VocabularyEntry>,
    pub improved: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub field_changes: BTreeMap<EntryField, usize>,
}

impl BatchReport {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn record(&mut self, outcome: EnrichmentOutcome) {
        if outcome.is_changed() {
            self.improved += 1;
            for field in &outcome.changed {
                *self.field_changes.entry(*field).or_default() += 1;
            }
        } else {
            self.unchanged += 1;
        }
        self.entries.push(outcome.entry);
    }

    fn record_failure(&mut self, original: VocabularyEntry) {
        self.failed += 1;
        self.entries.push(original);
    }

    pub fn processed(&self) -> usize {
        self.entries.len()
    }
}

/// Drives every entry through the improver, one at a time
pub struct Orchestrator {
    improver: FieldImprover,
    progress_every: usize,
}

impl Orchestrator {
    pub fn new(improver: FieldImprover, progress_every: usize) -> Self {
        Self {
            improver,
            progress_every,
        }
    }

    /// Improve all entries in order.
    ///
    /// A failing entry is kept as it was; the batch itself never fails.
    pub async fn run(&self, entries: Vec<VocabularyEntry>) -> BatchReport {
        let total = entries.len();
        let mut report = BatchReport::with_capacity(total);

        for (index, entry) in entries.into_iter().enumerate() {
            let result = self.improver.improve(&entry).await;

            match result {
                Ok(outcome) => {
                    if outcome.is_changed() {
                        let fields: Vec<&str> =
                            outcome.changed.iter().map(|f| f.as_str()).collect();
                        tracing::info!(
                            "Improved '{}' ({}): {}",
                            entry.word,
                            entry.cefr_level,
                            fields.join(", ")
                        );
                    } else {
                        tracing::debug!("No changes for '{}'", entry.word);
                    }
                    report.record(outcome);
                }
                Err(e) => {
                    tracing::warn!("Keeping original entry '{}': {}", entry.word, e);
                    report.record_failure(entry);
                }
            }

            let done = index + 1;
            if self.progress_every > 0 && done % self.progress_every == 0 {
                tracing::info!("Progress: {}/{} entries processed", done, total);
            }
        }

        debug_assert_eq!(report.processed(), total);
        report
    }
}
