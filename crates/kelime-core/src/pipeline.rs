use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use kelime_config::Config;
use kelime_dictionary::Dictionary;
use kelime_translator::{LanguagePair, Translator};
use kelime_types::{EntryField, WordsFile};

use crate::error::{EnrichError, Result};
use crate::improver::FieldImprover;
use crate::orchestrator::Orchestrator;
use crate::pacer::Pacer;
use crate::writer::{DatasetWriter, backup_stamp};

/// Totals reported at the end of a run
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub total: usize,
    pub improved: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub field_changes: BTreeMap<EntryField, usize>,
    pub backup_path: PathBuf,
    pub output_path: PathBuf,
}

/// Read the source dataset, back it up, enrich every entry and write the result.
///
/// Only I/O at the read and write boundary can fail the run.
pub async fn run_pipeline(
    config: &Config,
    dictionary: Arc<dyn Dictionary>,
    translator: Arc<dyn Translator>,
) -> Result<PipelineSummary> {
    let writer = DatasetWriter::from_config(&config.dataset, &backup_stamp())?;
    let source = writer.source_path().to_path_buf();

    let original = fs::read(&source).map_err(|e| EnrichError::ReadSource {
        path: source.clone(),
        source: e,
    })?;
    let mut document = WordsFile::from_slice(&original).map_err(|e| {
        EnrichError::MalformedSource {
            path: source.clone(),
            source: e,
        }
    })?;
    tracing::info!(
        "Loaded {} entries from {}",
        document.words.len(),
        source.display()
    );

    writer.write_backup(&original)?;

    let dictionary_meta = dictionary.metadata();
    let translator_meta = translator.metadata();
    let pair = LanguagePair::new(
        config.translator.from_lang.clone(),
        config.translator.to_lang.clone(),
    );
    let pacer = Pacer::new(config.pacing.delay());
    tracing::info!(
        "Dictionary: {} ({}) at {}",
        dictionary_meta.name,
        dictionary_meta.language,
        dictionary_meta.base_url
    );
    tracing::info!(
        "Translator: {} ({}) at {}",
        translator_meta.name,
        pair.langpair(),
        translator_meta.base_url
    );
    tracing::info!("{}ms between calls", pacer.interval().as_millis());

    let improver = FieldImprover::new(dictionary, translator, pair, pacer);
    let orchestrator = Orchestrator::new(improver, config.pacing.progress_every);

    let words = std::mem::take(&mut document.words);
    let report = orchestrator.run(words).await;

    let summary = PipelineSummary {
        total: report.processed(),
        improved: report.improved,
        unchanged: report.unchanged,
        failed: report.failed,
        field_changes: report.field_changes,
        backup_path: writer.backup_path().to_path_buf(),
        output_path: writer.output_path().to_path_buf(),
    };

    document.words = report.entries;
    writer.write_output(&document)?;

    tracing::info!(
        "Done: {} entries processed, {} improved, {} unchanged, {} kept after errors",
        summary.total,
        summary.improved,
        summary.unchanged,
        summary.failed
    );
    for (field, count) in &summary.field_changes {
        tracing::info!("  {}: {} updated", field, count);
    }

    Ok(summary)
}
