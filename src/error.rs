use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentientVisionError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("API key not set. Export GEMINI_API_KEY or run `sentient-vision config --set-api-key YOUR_KEY`")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Image load error: {0}")]
    ImageLoad(String),

    #[error("Image too large: {0} bytes (limit: {1} bytes)")]
    ImageTooLarge(u64, u64),

    #[error("API call error: {0}")]
    ApiCall(String),

    #[error("Failed to parse API response: {0}")]
    ApiParse(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SentientVisionError>;
