use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::pacing::PacingConfig;
use self::translator::TranslatorConfig;

pub mod dataset;
pub mod dictionary;
pub mod network;
pub mod pacing;
pub mod translator;

pub const ENV_SOURCE: &str = "KELIME_SOURCE";
pub const ENV_BACKUP: &str = "KELIME_BACKUP";
pub const ENV_OUTPUT: &str = "KELIME_OUTPUT";
pub const ENV_DELAY_MS: &str = "KELIME_DELAY_MS";
pub const ENV_DICTIONARY_URL: &str = "KELIME_DICTIONARY_URL";
pub const ENV_TRANSLATOR_URL: &str = "KELIME_TRANSLATOR_URL";
pub const ENV_TIMEOUT_SECONDS: &str = "KELIME_TIMEOUT_SECONDS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to open config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
    pub pacing: PacingConfig,
    pub network: NetworkConfig,
}

impl Config {
    /// Load a JSON config file; absent sections fall back to defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| env::var(key).ok());
    }

    /// Overlay values from `lookup`; unparsable numbers are ignored
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(source) = lookup(ENV_SOURCE) {
            self.dataset.source = PathBuf::from(source);
        }
        if let Some(backup) = lookup(ENV_BACKUP) {
            self.dataset.backup = Some(PathBuf::from(backup));
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.dataset.output = Some(PathBuf::from(output));
        }
        if let Some(url) = lookup(ENV_DICTIONARY_URL) {
            self.dictionary.base_url = url;
        }
        if let Some(url) = lookup(ENV_TRANSLATOR_URL) {
            self.translator.base_url = url;
        }
        if let Some(delay_ms) = parse_var(&lookup, ENV_DELAY_MS) {
            self.pacing.delay_ms = delay_ms;
        }
        if let Some(timeout) = parse_var(&lookup, ENV_TIMEOUT_SECONDS) {
            self.network.timeout_seconds = timeout;
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}
