use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid duration: {0} (must be positive and finite)")]
    InvalidDuration(f64),

    #[error("Invalid interval: {0} (must be positive and finite)")]
    InvalidInterval(f64),

    #[error("Unknown stack group: {0}")]
    UnknownGroup(usize),

    #[error("Source and target stack group are the same: {0}")]
    SameGroup(usize),

    #[error("Dialogue data error: {0}")]
    DataFetch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
