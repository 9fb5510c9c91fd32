//! Deprecation check for `qhier check`

use qhier_core::{DeprecatedQueueConfigParser, ParseOutcome};
use std::process::ExitCode;

/// Result of `qhier check`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// No deprecated queue keys
    Clean,
    /// `mapred.queue.names` is set
    Deprecated,
}

impl CheckStatus {
    /// 0 when clean, 1 when deprecated keys are set
    pub fn exit_status(&self) -> u8 {
        match self {
            CheckStatus::Clean => 0,
            CheckStatus::Deprecated => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

pub fn check_status(parser: &DeprecatedQueueConfigParser) -> CheckStatus {
    match parser.outcome() {
        ParseOutcome::Skipped => CheckStatus::Clean,
        ParseOutcome::Built => CheckStatus::Deprecated,
    }
}
