//! Mission execution error types

use thiserror::Error;

/// The one failure an actuation target can report.
#[derive(Debug, Clone, Error)]
pub enum HandleError {
    #[error("actuation failed: {reason}")]
    Actuation { reason: String },
}

/// Mission-layer errors.
///
/// Execution failures abort the remaining sequence for the current lap and
/// are swallowed at the lap boundary under patrol; nothing here is ever
/// allowed to take the process down.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("no validated drones were provided")]
    EmptyInput,

    #[error("no flight strategy installed on the mission context")]
    NoStrategy,

    #[error("command {command} failed")]
    Execution {
        command: String,
        #[source]
        source: HandleError,
    },

    #[error("command {command} timed out after {timeout_ms}ms")]
    Timeout { command: String, timeout_ms: u64 },
}

pub type Result<T> = std::result::Result<T, MissionError>;
