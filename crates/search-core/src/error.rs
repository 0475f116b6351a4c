use thiserror::Error;

use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search term is empty or malformed")]
    InvalidPattern,
    #[error("no active search results")]
    EmptyResultSet,
    #[error("document source unavailable: {0}")]
    Source(#[from] SourceError),
}
