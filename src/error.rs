use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgriSenseError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text generation failed: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, AgriSenseError>;
