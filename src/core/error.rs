use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Estimate needs at least one trial")]
    NoTrials,

    #[error("Exact odds are limited to {limit} armies per side, got {attackers} vs {defenders}")]
    ForceTooLarge {
        attackers: u32,
        defenders: u32,
        limit: u32,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HelperError>;
