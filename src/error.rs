use std::path::PathBuf;

/// Errors that can occur when decoding a board layout seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed {seed:#018x} names tile {tile} more than once")]
    DuplicateTile { seed: u64, tile: u8 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_error_display() {
        let err = SeedError::DuplicateTile {
            seed: 0x10,
            tile: 0,
        };
        assert_eq!(
            err.to_string(),
            "seed 0x0000000000000010 names tile 0 more than once"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("seed must be a permutation".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: seed must be a permutation"
        );
    }
}
