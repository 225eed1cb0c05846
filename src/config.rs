use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::card::DEFAULT_SYMBOLS;

pub const MATCH_DELAY_MS: u64 = 500;
pub const MISMATCH_DELAY_MS: u64 = 1000;

fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

fn default_match_delay_ms() -> u64 {
    MATCH_DELAY_MS
}

fn default_mismatch_delay_ms() -> u64 {
    MISMATCH_DELAY_MS
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "default_match_delay_ms")]
    pub match_delay_ms: u64,
    #[serde(default = "default_mismatch_delay_ms")]
    pub mismatch_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            symbols: default_symbols(),
            match_delay_ms: MATCH_DELAY_MS,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
        }
    }
}

impl GameConfig {
    pub fn with_symbols<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Self {
        GameConfig {
            symbols: symbols.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects catalogs that would break the two-cards-per-symbol rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.symbols.len());
        for (idx, symbol) in self.symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(ConfigError::EmptySymbol(idx));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }
        Ok(())
    }

    pub fn total_pairs(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.total_pairs(), 8);
        assert_eq!(config.match_delay(), Duration::from_millis(500));
        assert_eq!(config.mismatch_delay(), Duration::from_millis(1000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GameConfig::from_json(r#"{"symbols":["A","B"]}"#).unwrap();
        assert_eq!(config.symbols, vec!["A", "B"]);
        assert_eq!(config.match_delay_ms, MATCH_DELAY_MS);
        assert_eq!(config.mismatch_delay_ms, MISMATCH_DELAY_MS);
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let err = GameConfig::from_json(r#"{"symbols":["A","B","A"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSymbol(ref s) if s == "A"));
    }

    #[test]
    fn empty_symbols_are_rejected() {
        let err = GameConfig::with_symbols(["A", ""]).validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptySymbol(1)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GameConfig::from_json("{symbols").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid game config"));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let config = GameConfig::with_symbols(Vec::<String>::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.total_pairs(), 0);
    }
}
