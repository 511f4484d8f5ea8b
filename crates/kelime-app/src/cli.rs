use std::path::PathBuf;

use clap::Parser;
use kelime_config::Config;

/// Enrich the vocabulary dataset with dictionary definitions and Turkish translations
#[derive(Debug, Parser)]
#[command(name = "kelime", version)]
pub struct Args {
    /// JSON config file; defaults and KELIME_* variables apply otherwise
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source dataset
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where the improved dataset is written
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Backup file name (a timestamp is inserted unless disabled in config)
    #[arg(long)]
    pub backup: Option<PathBuf>,

    /// Pause before every external call, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Resolve config: file (or defaults), then environment, then flags
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        };
        config.apply_env();
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.dataset.source = input.clone();
        }
        if let Some(output) = &self.output {
            config.dataset.output = Some(output.clone());
        }
        if let Some(backup) = &self.backup {
            config.dataset.backup = Some(backup.clone());
        }
        if let Some(delay_ms) = self.delay_ms {
            config.pacing.delay_ms = delay_ms;
        }
    }
}
