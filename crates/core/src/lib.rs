// qhier Core - Queue domain, configuration ports and legacy parser
// NO infrastructure dependencies: configuration stores plug in through port::ConfigSource

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::queue_parser::{
    DeprecatedQueueConfigParser, ParseOutcome, QueueConfigurationParser,
};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
