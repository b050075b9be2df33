use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrackError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Empty input: {0} is required")]
    EmptyInput(&'static str),

    #[error("Unsupported key length {requested}: exhaustive search is limited to {ceiling}")]
    UnsupportedKeyLength { requested: usize, ceiling: usize },

    #[error("No candidate decryption could be produced")]
    NoValidCandidates,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CrResult<T> = Result<T, CrackError>;
