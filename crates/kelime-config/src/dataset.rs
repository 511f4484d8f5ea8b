use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_source() -> PathBuf {
    PathBuf::from("data/words.json")
}

fn default_timestamp_backups() -> bool {
    true
}

/// Locations of the source dataset and the two artifacts produced from it
///
/// `backup` and `output` are optional; when unset they sit next to the source
/// as `<stem>.backup.json` and `<stem>.improved.json`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,
    pub backup: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Insert a run timestamp into the backup file name
    #[serde(default = "default_timestamp_backups")]
    pub timestamp_backups: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            backup: None,
            output: None,
            timestamp_backups: default_timestamp_backups(),
        }
    }
}

impl DatasetConfig {
    pub fn backup_path(&self) -> PathBuf {
        match &self.backup {
            Some(path) => path.clone(),
            None => sibling_of(&self.source, "backup"),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => sibling_of(&self.source, "improved"),
        }
    }
}

fn sibling_of(source: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "words".to_string());
    source.with_file_name(format!("{stem}.{suffix}.json"))
}
