use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Article source error: {0}")]
    Source(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures of the article fetch path, which the UI collapses
    /// into a single "failed to load article" notice.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Source(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
