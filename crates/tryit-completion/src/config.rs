/// Configuration loading and validation for the completion pipeline
use crate::error::{CompletionError, CompletionResult};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::Path;
pub use tryit_common::ConfigFormat;

/// Hard upper bound on the number of suggestions shown in the popup
pub const MAX_SUGGESTIONS: usize = 8;

/// Default grace window between focus loss and popup close
pub const DEFAULT_BLUR_GRACE_MS: u64 = 150;

/// Attribute names that are inserted with an empty quoted value.
///
/// Entries ending in `*` match by prefix.
pub const DEFAULT_QUOTED_ATTRIBUTES: &[&str] = &[
    "class",
    "id",
    "href",
    "src",
    "alt",
    "title",
    "name",
    "placeholder",
    "type",
    "value",
    "aria-*",
    "data-*",
];

/// Completion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Popup length cap, `1..=MAX_SUGGESTIONS`
    pub max_suggestions: usize,
    /// Milliseconds the popup survives after the editor loses focus
    pub blur_grace_ms: u64,
    pub quoted_attributes: Vec<String>,
    pub vocabulary: Vocabulary,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            quoted_attributes: DEFAULT_QUOTED_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vocabulary: Vocabulary::builtin(),
        }
    }
}

/// Completion configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load completion configuration from a YAML file
    pub fn load_from_yaml(path: &Path) -> CompletionResult<CompletionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Yaml)
    }

    /// Load completion configuration from a JSON file
    pub fn load_from_json(path: &Path) -> CompletionResult<CompletionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Json)
    }

    /// Load completion configuration from a file, choosing the format by extension
    pub fn load_from_file(path: &Path) -> CompletionResult<CompletionConfig> {
        match ConfigFormat::from_path(path) {
            ConfigFormat::Yaml => Self::load_from_yaml(path),
            ConfigFormat::Json => Self::load_from_json(path),
        }
    }

    /// Load completion configuration from a string
    pub fn load_from_string(
        content: &str,
        format: ConfigFormat,
    ) -> CompletionResult<CompletionConfig> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Validate completion configuration
    pub fn validate_config(config: &CompletionConfig) -> CompletionResult<()> {
        if config.max_suggestions == 0 || config.max_suggestions > MAX_SUGGESTIONS {
            return Err(CompletionError::ConfigError(format!(
                "max_suggestions must be between 1 and {}, got {}",
                MAX_SUGGESTIONS, config.max_suggestions
            )));
        }

        if config
            .quoted_attributes
            .iter()
            .any(|name| name.trim_end_matches('*').is_empty())
        {
            return Err(CompletionError::ConfigError(
                "quoted_attributes cannot contain empty patterns".to_string(),
            ));
        }

        config.vocabulary.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigLoader::validate_config(&CompletionConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let config = CompletionConfig {
            max_suggestions: 0,
            ..CompletionConfig::default()
        };
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_cap_above_limit() {
        let config = CompletionConfig {
            max_suggestions: MAX_SUGGESTIONS + 1,
            ..CompletionConfig::default()
        };
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_bare_wildcard() {
        let config = CompletionConfig {
            quoted_attributes: vec!["*".to_string()],
            ..CompletionConfig::default()
        };
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config =
            ConfigLoader::load_from_string("max_suggestions: 5\n", ConfigFormat::Yaml).unwrap();
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.blur_grace_ms, DEFAULT_BLUR_GRACE_MS);
        assert_eq!(config.vocabulary, Vocabulary::builtin());
    }

    #[test]
    fn test_json_vocabulary_override() {
        let json = r#"{ "vocabulary": { "tags": ["x-card", "x-list"] } }"#;
        let config = ConfigLoader::load_from_string(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.vocabulary.tags, vec!["x-card", "x-list"]);
        assert!(!config.vocabulary.attributes.is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let result = ConfigLoader::load_from_string("max_suggestions: [", ConfigFormat::Yaml);
        assert!(matches!(result, Err(CompletionError::YamlError(_))));
    }

    #[test]
    fn test_load_from_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("completion.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "blur_grace_ms": 300 }}"#).unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.blur_grace_ms, 300);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ConfigLoader::load_from_file(Path::new("/nonexistent/completion.yaml"));
        assert!(matches!(result, Err(CompletionError::IoError(_))));
    }
}
