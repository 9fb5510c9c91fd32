// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown queue state: {0:?}")]
    UnknownQueueState(String),

    #[error("Unknown queue operation: {0:?}")]
    UnknownQueueOperation(String),

    #[error("Duplicate queue name: {0}")]
    DuplicateQueue(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
