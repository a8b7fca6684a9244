use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read input table: {0}")]
    InputRead(String),

    #[error("Input table is missing required column: {0}")]
    MissingColumn(String),

    #[error("Failed to write output table: {0}")]
    OutputWrite(String),

    #[error("Classification unavailable: {0}")]
    ClassificationUnavailable(String),

    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited(_) | Error::Network(_))
    }

    /// Errors that abort a whole run rather than a single row.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InputRead(_) | Error::MissingColumn(_) | Error::OutputWrite(_) | Error::Config(_)
        )
    }
}
