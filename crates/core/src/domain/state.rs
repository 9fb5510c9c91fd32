// Queue State Domain Model

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DomainError;

/// Run status of a queue
///
/// A STOPPED queue keeps its jobs but accepts no new submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueState {
    #[default]
    Running,
    Stopped,
}

impl QueueState {
    /// All states, in declaration order
    pub const ALL: [QueueState; 2] = [QueueState::Running, QueueState::Stopped];

    /// Canonical configuration name (the value written in `mapred.queue.<name>.state`)
    pub fn state_name(&self) -> &'static str {
        match self {
            QueueState::Running => "running",
            QueueState::Stopped => "stopped",
        }
    }

    /// Whether new jobs may be submitted
    pub fn accepts_jobs(&self) -> bool {
        matches!(self, QueueState::Running)
    }
}

impl std::fmt::Display for QueueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueState::Running => write!(f, "RUNNING"),
            QueueState::Stopped => write!(f, "STOPPED"),
        }
    }
}

impl FromStr for QueueState {
    type Err = DomainError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        QueueState::ALL
            .into_iter()
            .find(|state| state.state_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownQueueState(s.to_string()))
    }
}
