//! Snow watch errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WatchError>;

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("failed to render advisory report: {0}")]
    Report(#[from] serde_json::Error),
}
