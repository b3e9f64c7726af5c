//! Registry and eligibility error types

use fleet_domain::OperationalStatus;
use thiserror::Error;

/// Eligibility and registry lookup errors.
///
/// These are recoverable by design: callers log them and move on to the next
/// candidate, they never abort a selection pass.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("drone not found: {drone_id}")]
    NotFound { drone_id: String },

    #[error("manufacturer has no API adapter: {manufacturer}")]
    Unsupported { manufacturer: String },

    #[error("drone {drone_id} is not operational (status: {status})")]
    Ineligible {
        drone_id: String,
        status: OperationalStatus,
    },
}

/// Manufacturer adapter failures.
///
/// Adapter connectivity is never consulted for eligibility; these surface
/// only when a caller actually drives an adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to connect to {manufacturer} endpoint: {reason}")]
    Connection {
        manufacturer: String,
        reason: String,
    },

    #[error("command rejected by adapter: {reason}")]
    CommandRejected { reason: String },
}

pub type Result<T> = std::result::Result<T, FleetError>;
