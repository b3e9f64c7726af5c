//! Mission manager: the receiving end of the validation pipeline.

use std::collections::BTreeSet;

use fleet_domain::ValidatedDrone;
use tracing::{debug, error, info, warn};

use crate::error::{MissionError, Result};

/// Receives validated drones and records mission assignment.
///
/// Assignment here is bookkeeping plus one log record per drone; scheduling
/// and conflict resolution belong to a layer above this core.
#[derive(Debug, Default)]
pub struct MissionManager {
    validated: Vec<ValidatedDrone>,
}

impl MissionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a validated set as the current one and log an assignment per
    /// drone.
    ///
    /// # Errors
    ///
    /// `EmptyInput` if the list is empty; existing state is left untouched.
    pub fn receive(&mut self, valid_drones: Vec<ValidatedDrone>) -> Result<()> {
        if valid_drones.is_empty() {
            error!("no validated drones were passed; check the validator output");
            return Err(MissionError::EmptyInput);
        }

        info!(count = valid_drones.len(), "received validated drones");
        self.validated = valid_drones;

        for drone in &self.validated {
            info!(drone_id = %drone.drone_id, "mission assigned");
        }
        Ok(())
    }

    /// The current validated set.
    #[must_use]
    pub fn validated(&self) -> &[ValidatedDrone] {
        &self.validated
    }

    /// Audit the handover: compare the ids that were meant to be validated
    /// against the ids that actually arrived.
    ///
    /// Pure classification; mutates nothing and never fails. The report
    /// names the drift in both directions.
    #[must_use]
    pub fn check_completeness(
        original: &[ValidatedDrone],
        received: &[ValidatedDrone],
    ) -> CompletenessReport {
        let original_ids: BTreeSet<&str> =
            original.iter().map(|d| d.drone_id.as_str()).collect();
        let received_ids: BTreeSet<&str> =
            received.iter().map(|d| d.drone_id.as_str()).collect();

        let report = CompletenessReport {
            missing: original_ids
                .difference(&received_ids)
                .map(ToString::to_string)
                .collect(),
            unexpected: received_ids
                .difference(&original_ids)
                .map(ToString::to_string)
                .collect(),
        };

        if report.is_complete() {
            info!("drone list handover is complete");
        } else {
            warn!(
                missing = ?report.missing,
                unexpected = ?report.unexpected,
                "drone list handover is incomplete"
            );
            debug!(original = ?original_ids, received = ?received_ids, "handover id sets");
        }
        report
    }
}

/// Drift between the intended and the received validated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessReport {
    /// Ids expected but absent from the received list
    pub missing: Vec<String>,
    /// Ids received but never part of the original list
    pub unexpected: Vec<String>,
}

impl CompletenessReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}
