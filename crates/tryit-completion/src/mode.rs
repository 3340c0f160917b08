//! Editor language mode detection
//!
//! The playground has exactly two buffers: markup and style sheet. Each
//! analysis call declares which one it is working on.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the buffer being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// HTML markup buffer
    #[default]
    Markup,
    /// CSS style-sheet buffer
    Style,
}

impl EditorMode {
    /// Detect the mode from a file extension (without the dot)
    ///
    /// ```ignore
    /// assert_eq!(EditorMode::from_extension("css"), Some(EditorMode::Style));
    /// assert_eq!(EditorMode::from_extension("HTML"), Some(EditorMode::Markup));
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "html" | "htm" | "xhtml" => Some(EditorMode::Markup),
            "css" => Some(EditorMode::Style),
            _ => None,
        }
    }

    /// Detect the mode from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::Markup => "markup",
            EditorMode::Style => "style",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markup" | "html" => Ok(EditorMode::Markup),
            "style" | "css" => Ok(EditorMode::Style),
            other => Err(format!("unknown editor mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(EditorMode::from_extension("html"), Some(EditorMode::Markup));
        assert_eq!(EditorMode::from_extension("HTM"), Some(EditorMode::Markup));
        assert_eq!(EditorMode::from_extension("css"), Some(EditorMode::Style));
        assert_eq!(EditorMode::from_extension("rs"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            EditorMode::from_path(Path::new("site/index.html")),
            Some(EditorMode::Markup)
        );
        assert_eq!(
            EditorMode::from_path(Path::new("theme.css")),
            Some(EditorMode::Style)
        );
        assert_eq!(EditorMode::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_from_str_round_trip() {
        for mode in [EditorMode::Markup, EditorMode::Style] {
            assert_eq!(mode.as_str().parse::<EditorMode>(), Ok(mode));
        }
        assert!("sass".parse::<EditorMode>().is_err());
    }
}
