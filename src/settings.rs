use crate::error::{PrdError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Smallest title bound that still leaves room for the ellipsis suffix.
const MIN_TITLE_CHARS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParserSettings {
    /// Display bound for story titles (in characters, ellipsis included)
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
    /// Bound for free-form descriptions (in characters)
    #[serde(default = "default_description_max_chars")]
    pub description_max_chars: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
            description_max_chars: default_description_max_chars(),
        }
    }
}

impl ParserSettings {
    pub fn validate(&self) -> Result<()> {
        if self.title_max_chars < MIN_TITLE_CHARS {
            return Err(PrdError::invalid_argument(format!(
                "title_max_chars must be at least {}, got {}",
                MIN_TITLE_CHARS, self.title_max_chars
            )));
        }
        if self.description_max_chars < self.title_max_chars {
            return Err(PrdError::invalid_argument(format!(
                "description_max_chars ({}) must not be smaller than title_max_chars ({})",
                self.description_max_chars, self.title_max_chars
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PrdSettings {
    #[serde(default)]
    pub parser: ParserSettings,
}

impl PrdSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: PrdSettings = toml::from_str(content)?;
        settings.parser.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PrdError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

fn default_title_max_chars() -> usize {
    100
}

fn default_description_max_chars() -> usize {
    4000
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = PrdSettings::default();
        assert_eq!(settings.parser.title_max_chars, 100);
        assert_eq!(settings.parser.description_max_chars, 4000);
        assert!(settings.parser.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = PrdSettings::from_toml_str("[parser]\ntitle_max_chars = 60\n").unwrap();
        assert_eq!(settings.parser.title_max_chars, 60);
        assert_eq!(settings.parser.description_max_chars, 4000);

        let empty = PrdSettings::from_toml_str("").unwrap();
        assert_eq!(empty, PrdSettings::default());
    }

    #[test]
    fn test_rejects_tiny_title_bound() {
        let err = PrdSettings::from_toml_str("[parser]\ntitle_max_chars = 2\n").unwrap_err();
        assert!(matches!(err, PrdError::InvalidArgument(_)));
    }

    #[test]
    fn test_rejects_description_smaller_than_title() {
        let settings = ParserSettings {
            title_max_chars: 50,
            description_max_chars: 10,
        };
        assert!(matches!(
            settings.validate(),
            Err(PrdError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = PrdSettings::from_toml_str("[parser\n").unwrap_err();
        assert!(matches!(err, PrdError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[parser]\ndescription_max_chars = 500").unwrap();

        let settings = PrdSettings::load(file.path()).unwrap();
        assert_eq!(settings.parser.description_max_chars, 500);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = PrdSettings::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, PrdError::Io { .. }));
    }
}
