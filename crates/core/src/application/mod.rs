// Application Layer - Configuration-load use cases

pub mod queue_parser;

// Re-exports
pub use queue_parser::{DeprecatedQueueConfigParser, ParseOutcome, QueueConfigurationParser};
