use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use kelime_config::dataset::DatasetConfig;
use kelime_types::WordsFile;

use crate::error::{EnrichError, Result};

/// Writes the backup and the improved dataset; never touches the source file
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    source: PathBuf,
    backup: PathBuf,
    output: PathBuf,
}

impl DatasetWriter {
    /// Fails if any two of the three paths refer to the same file
    pub fn new(source: PathBuf, backup: PathBuf, output: PathBuf) -> Result<Self> {
        if same_file(&backup, &source) {
            return Err(EnrichError::PathCollision {
                role: "backup",
                path: backup,
                other: source,
            });
        }
        if same_file(&output, &source) {
            return Err(EnrichError::PathCollision {
                role: "output",
                path: output,
                other: source,
            });
        }
        if same_file(&output, &backup) {
            return Err(EnrichError::PathCollision {
                role: "output",
                path: output,
                other: backup,
            });
        }

        Ok(Self {
            source,
            backup,
            output,
        })
    }

    /// Build from config, stamping the backup name when enabled.
    ///
    /// Unset backup and output paths are placed next to the source.
    pub fn from_config(config: &DatasetConfig, stamp: &str) -> Result<Self> {
        let backup = config.backup_path();
        let backup = if config.timestamp_backups {
            timestamped(&backup, stamp)
        } else {
            backup
        };
        Self::new(config.source.clone(), backup, config.output_path())
    }

    pub fn source_path(&self) -> &Path {
        &self.source
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Copy the original source bytes verbatim
    pub fn write_backup(&self, original: &[u8]) -> Result<()> {
        write_atomic(&self.backup, original).map_err(|source| EnrichError::WriteBackup {
            path: self.backup.clone(),
            source,
        })?;
        tracing::info!("Backup written to {}", self.backup.display());
        Ok(())
    }

    /// Serialize the improved document to the output path
    pub fn write_output(&self, document: &WordsFile) -> Result<()> {
        let json = document.to_pretty_json().map_err(EnrichError::Serialize)?;
        write_atomic(&self.output, json.as_bytes()).map_err(|source| {
            EnrichError::WriteOutput {
                path: self.output.clone(),
                source,
            }
        })?;
        tracing::info!(
            "Improved dataset ({} entries) written to {}",
            document.words.len(),
            self.output.display()
        );
        Ok(())
    }
}

/// Current local time in the form used for backup names
pub fn backup_stamp() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// `data/words.backup.json` + `20261019-101500` -> `data/words.backup-20261019-101500.json`
pub fn timestamped(path: &Path, stamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}-{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{stamp}"),
    };
    path.with_file_name(name)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// Write next to the destination, then rename over it
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}
