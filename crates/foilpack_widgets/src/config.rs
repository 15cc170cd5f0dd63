//! Pack configuration
//!
//! Asset references and animation durations. The card faces are opaque
//! external resources addressed by a configurable base path; everything has
//! a working default so construction never requires a config file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced while loading a config file; the only fallible surface
/// in the crate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read pack config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse pack config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Pack widget configuration
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PackConfig {
    /// Base path prepended to image references
    pub asset_base: PathBuf,
    /// Card front (reward) face image
    pub front_image: String,
    /// Card back face image
    pub back_image: String,
    /// Duration of the release-to-open reveal
    pub reveal_duration_ms: u32,
    /// Duration of a single card flip
    pub flip_duration_ms: u32,
    /// Fixed seed for the glow shuffle; `None` randomizes per pack
    pub glow_seed: Option<u64>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            asset_base: PathBuf::from("assets"),
            front_image: "card1.png".to_string(),
            back_image: "eth.png".to_string(),
            reveal_duration_ms: 400,
            flip_duration_ms: 600,
            glow_seed: None,
        }
    }
}

impl PackConfig {
    /// Load from a TOML file; missing keys fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn front_path(&self) -> PathBuf {
        self.asset_base.join(&self.front_image)
    }

    pub fn back_path(&self) -> PathBuf {
        self.asset_base.join(&self.back_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PackConfig::default();
        assert_eq!(config.reveal_duration_ms, 400);
        assert_eq!(config.front_path(), PathBuf::from("assets/card1.png"));
        assert_eq!(config.back_path(), PathBuf::from("assets/eth.png"));
        assert_eq!(config.glow_seed, None);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: PackConfig = toml::from_str(
            r#"
            asset_base = "public/cards"
            glow_seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.asset_base, PathBuf::from("public/cards"));
        assert_eq!(config.glow_seed, Some(7));
        // Unspecified keys keep their defaults
        assert_eq!(config.front_image, "card1.png");
        assert_eq!(config.flip_duration_ms, 600);
    }

    #[test]
    fn test_parse_error_surfaces() {
        let result: Result<PackConfig, _> = toml::from_str("reveal_duration_ms = \"soon\"");
        assert!(result.is_err());
    }
}
