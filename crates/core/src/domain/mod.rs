// Domain Layer - Queue hierarchy entities

pub mod acl;
pub mod error;
pub mod property;
pub mod queue;
pub mod state;

// Re-exports
pub use acl::{AccessControlList, WILDCARD_ACL};
pub use error::DomainError;
pub use queue::{Queue, QueueId, QueueOperation};
pub use state::QueueState;
