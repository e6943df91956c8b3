//! Engine configuration loaded from TOML.

use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Classifier confidence (percent) required before a frame counts as a cat.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityConfig {
    pub confidence_threshold: f32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("confidence threshold {0} must be a finite percentage between 0 and 100")]
    InvalidThreshold(f32),
}

impl SecurityConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_at(&raw, path)
    }

    /// Parses and validates an in-memory TOML document.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Self::parse_at(raw, Path::new("<inline>"))
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Result<Self, ConfigError> {
        self.confidence_threshold = threshold;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.confidence_threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    fn parse_at(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: SecurityConfig = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SecurityConfig::parse("").expect("empty config parses");
        assert_eq!(config, SecurityConfig::default());
        assert_eq!(config.confidence_threshold, 50.0);
    }

    #[test]
    fn load_reads_threshold_from_file() {
        let dir = tempdir().expect("tmp");
        let path = dir.path().join("catpoint.toml");
        fs::write(&path, "confidence_threshold = 72.5\n").expect("write config");
        let config = SecurityConfig::load(&path).expect("load");
        assert_eq!(config.confidence_threshold, 72.5);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = SecurityConfig::parse("confidence_threshold = 150.0").unwrap_err();
        assert_matches!(err, ConfigError::InvalidThreshold(t) if t == 150.0);
        let err = SecurityConfig::default()
            .with_confidence_threshold(f32::NAN)
            .unwrap_err();
        assert_matches!(err, ConfigError::InvalidThreshold(_));
    }

    #[test]
    fn unknown_keys_and_missing_files_fail() {
        let err = SecurityConfig::parse("threshold = 1.0").unwrap_err();
        assert_matches!(err, ConfigError::Parse { .. });

        let dir = tempdir().expect("tmp");
        let err = SecurityConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert_matches!(err, ConfigError::Read { .. });
    }
}
