use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_delay_ms() -> u64 {
    1000
}

fn default_progress_every() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause inserted before every external call
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Log progress every N processed entries
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            progress_every: default_progress_every(),
        }
    }
}

impl PacingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
