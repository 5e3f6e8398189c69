use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightMatchError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid flight rule: {0}")]
    InvalidRule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlightMatchError>;
