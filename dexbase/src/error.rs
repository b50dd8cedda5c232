use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("could not read {}: {error}", .path.display())]
    ReadFailed {
        path: PathBuf,
        error: Arc<io::Error>,
    },
    #[error("could not parse {}: {error}", .path.display())]
    ParseFailed {
        path: PathBuf,
        error: Arc<serde_json::Error>,
    },
    #[error("background task failed: {0}")]
    TaskFailed(Arc<tokio::task::JoinError>),
    #[error("request failed: {0}")]
    RequestFailed(Arc<reqwest::Error>),
    #[error("invalid {file}: {error}")]
    InvalidCsv {
        file: &'static str,
        error: Arc<csv::Error>,
    },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::TaskFailed(Arc::new(error))
    }
}
