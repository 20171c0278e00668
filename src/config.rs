use std::path::Path;

use crate::ai::StrategyKind;
use crate::error::ConfigError;
use crate::game::Board;

/// Match setup, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Hex-encoded 64-bit board layout (16 nibbles, one tile per position);
    /// a fresh random layout is drawn when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Strategy for Red, the first mover.
    pub red: StrategyKind,
    /// Strategy for Black, the second mover.
    pub black: StrategyKind,
    /// Print the tile layout before play.
    pub show_tiles: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            seed: None,
            red: StrategyKind::Random,
            black: StrategyKind::Smart,
            show_tiles: true,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(raw) = &self.seed {
            Self::parse_seed(raw)?;
        }
        Ok(())
    }

    /// Parses a hex seed string and checks that it encodes a permutation of
    /// the 16 tiles.
    pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
        let digits = raw.trim().trim_start_matches("0x");
        let seed = u64::from_str_radix(digits, 16).map_err(|e| {
            ConfigError::Validation(format!("seed '{raw}' is not a 64-bit hex value: {e}"))
        })?;
        Board::from_seed(seed).map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(seed)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&MatchConfig::default()).expect("default config serializes")
    }
}
