use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("news record not found: {0}")]
    NotFound(u64),

    #[error("the primary record cannot be deleted")]
    PrimaryDeleteForbidden,

    #[error("news database is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to write news database: {0}")]
    Write(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NewsError>;
