/// Preview pipeline configuration
use crate::error::{PreviewError, PreviewResult};
use crate::validator::BalanceCheck;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
pub use tryit_common::ConfigFormat;

/// Default quiet period before an automatic run
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Longest accepted quiet period
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Re-render on every (debounced) change instead of only on explicit runs
    pub auto_run: bool,
    /// Quiet period in milliseconds before an automatic run fires
    pub debounce_ms: u64,
    pub balance_check: BalanceCheck,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            auto_run: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            balance_check: BalanceCheck::Counts,
        }
    }
}

impl PreviewConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load preview configuration from a file, choosing the format by extension
    pub fn load_from_file(path: &Path) -> PreviewResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::from_path(path))
    }

    /// Load preview configuration from a string
    pub fn load_from_string(content: &str, format: ConfigFormat) -> PreviewResult<Self> {
        let config: Self = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PreviewResult<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(PreviewError::ConfigError(format!(
                "debounce_ms must be at most {}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }
        Ok(())
    }
}
