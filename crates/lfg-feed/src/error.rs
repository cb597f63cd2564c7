//! Feed error types.

use thiserror::Error;

/// Errors raised while decoding or applying feed pages.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request unsuccessful: {0}")]
    Unsuccessful(String),

    #[error("failed to decode feed page: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
