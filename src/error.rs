use thiserror::Error;

/// Error type for springball
#[derive(Error, Debug)]
pub enum SpringBallError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SpringBallError>;
