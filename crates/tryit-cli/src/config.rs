// Playground configuration file

use std::path::Path;

use serde::{Deserialize, Serialize};
use tryit_completion::{CompletionConfig, ConfigFormat, ConfigLoader};
use tryit_preview::PreviewConfig;

use crate::error::{CliError, CliResult};

/// Settings read from `--config`: one file, two optional sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub completion: CompletionConfig,
    pub preview: PreviewConfig,
}

impl PlaygroundConfig {
    /// Load from a YAML or JSON file, chosen by extension
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&content, ConfigFormat::from_path(path))
    }

    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> CliResult<Self> {
        let config: Self = match format {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| CliError::Config(e.to_string()))?
            }
        };
        ConfigLoader::validate_config(&config.completion)?;
        config.preview.validate()?;
        Ok(config)
    }

    /// Load `path` when given, otherwise the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
