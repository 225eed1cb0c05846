use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("symbol {0:?} appears more than once in the catalog")]
    DuplicateSymbol(String),
    #[error("symbol at position {0} is empty")]
    EmptySymbol(usize),
}
