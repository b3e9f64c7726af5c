//! Flight strategy execution using enum dispatch.
//!
//! Two policies over the same ordered command list:
//!
//! - `Recon` - one pass, strictly in order, abort on first failure
//! - `Patrol` - the full list n times back-to-back; a failed lap does not
//!   stop the next lap
//!
//! Strategies are state-free: all mission state lives in the command list
//! and the report.

use std::num::NonZeroU32;

use tracing::{info, warn};

use crate::command::Command;
use crate::error::MissionError;

/// Flight strategy enum - determines how a command sequence runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlightStrategy {
    /// Execute each command once, in order
    #[default]
    Recon,
    /// Repeat the full ordered sequence `laps` times consecutively
    Patrol { laps: NonZeroU32 },
}

impl FlightStrategy {
    /// Patrol strategy flying `laps` laps. `laps >= 1` by construction.
    #[must_use]
    pub const fn patrol(laps: NonZeroU32) -> Self {
        Self::Patrol { laps }
    }

    /// Run the ordered command list under this policy.
    ///
    /// Failures are captured in the report rather than returned: a recon
    /// failure aborts the remainder of the pass, a patrol failure aborts
    /// the remainder of its lap only.
    pub async fn run(&self, commands: &[Command]) -> FlightReport {
        match self {
            Self::Recon => {
                info!("starting reconnaissance mission");
                let mut report = FlightReport::default();
                Self::fly_lap(commands, &mut report).await;
                report.laps_flown = 1;
                info!(
                    commands_executed = report.commands_executed,
                    "reconnaissance mission finished"
                );
                report
            }

            Self::Patrol { laps } => {
                info!(laps = laps.get(), "starting patrol mission");
                let mut report = FlightReport::default();
                for lap in 1..=laps.get() {
                    let clean = Self::fly_lap(commands, &mut report).await;
                    report.laps_flown = lap;
                    if clean {
                        info!(lap, "patrol lap complete");
                    } else {
                        warn!(lap, "patrol lap aborted, continuing with next lap");
                    }
                }
                info!(
                    laps_flown = report.laps_flown,
                    failures = report.failures.len(),
                    "patrol mission finished"
                );
                report
            }
        }
    }

    /// One in-order pass. Returns whether the lap ran to completion; on a
    /// failure the remaining commands of this lap are skipped (already
    /// executed commands are not rolled back).
    async fn fly_lap(commands: &[Command], report: &mut FlightReport) -> bool {
        for command in commands {
            match command.execute().await {
                Ok(()) => report.commands_executed += 1,
                Err(err) => {
                    warn!(command = %command, error = %err, "command failed, aborting lap");
                    report.failures.push(err);
                    return false;
                }
            }
        }
        true
    }
}

/// Outcome of one strategy execution.
///
/// Failure states are observable here, not only in the logs: every aborted
/// lap contributes one entry to `failures`.
#[derive(Debug, Default)]
pub struct FlightReport {
    /// Laps started (recon always flies exactly one)
    pub laps_flown: u32,
    /// Commands that completed successfully, across all laps
    pub commands_executed: usize,
    /// One entry per aborted lap, in occurrence order
    pub failures: Vec<MissionError>,
}

impl FlightReport {
    /// Whether every lap ran to completion.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandleError;
    use crate::handle::DroneHandle;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every actuation call; fails the call at `fail_at` (global,
    /// zero-based) exactly once.
    struct ScriptedDrone {
        calls: Mutex<Vec<String>>,
        fail_at: Option<usize>,
    }

    impl ScriptedDrone {
        fn new(fail_at: Option<usize>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail_at,
            })
        }

        fn record(&self, op: &str) -> Result<(), HandleError> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push(op.to_string());
            if self.fail_at == Some(index) {
                return Err(HandleError::Actuation {
                    reason: "scripted failure".to_string(),
                });
            }
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DroneHandle for ScriptedDrone {
        async fn takeoff(&self) -> Result<(), HandleError> {
            self.record("takeoff")
        }

        async fn move_forward(&self, _distance_m: f64) -> Result<(), HandleError> {
            self.record("move_forward")
        }

        async fn turn(&self, _degree: f64) -> Result<(), HandleError> {
            self.record("turn")
        }
    }

    fn sequence(drone: &Arc<ScriptedDrone>) -> Vec<Command> {
        vec![
            Command::takeoff(drone.clone()),
            Command::move_forward(drone.clone(), 10.0),
            Command::turn(drone.clone(), 90.0),
        ]
    }

    fn laps(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[tokio::test]
    async fn recon_executes_each_command_once_in_order() {
        let drone = ScriptedDrone::new(None);
        let report = FlightStrategy::Recon.run(&sequence(&drone)).await;

        assert_eq!(drone.calls(), ["takeoff", "move_forward", "turn"]);
        assert_eq!(report.laps_flown, 1);
        assert_eq!(report.commands_executed, 3);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn recon_aborts_remainder_after_failure() {
        let drone = ScriptedDrone::new(Some(1));
        let report = FlightStrategy::Recon.run(&sequence(&drone)).await;

        // The turn after the failed move is never attempted.
        assert_eq!(drone.calls(), ["takeoff", "move_forward"]);
        assert_eq!(report.commands_executed, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0],
            MissionError::Execution { ref command, .. } if command == "MOVE_FORWARD"
        ));
    }

    #[tokio::test]
    async fn patrol_flies_each_command_n_times_in_order() {
        let drone = ScriptedDrone::new(None);
        let report = FlightStrategy::patrol(laps(2)).run(&sequence(&drone)).await;

        assert_eq!(
            drone.calls(),
            [
                "takeoff",
                "move_forward",
                "turn",
                "takeoff",
                "move_forward",
                "turn"
            ]
        );
        assert_eq!(report.laps_flown, 2);
        assert_eq!(report.commands_executed, 6);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn patrol_continues_after_a_failed_lap() {
        // Fails the second call overall: lap 1 aborts mid-sequence, lap 2
        // still flies all three commands.
        let drone = ScriptedDrone::new(Some(1));
        let report = FlightStrategy::patrol(laps(2)).run(&sequence(&drone)).await;

        assert_eq!(
            drone.calls(),
            ["takeoff", "move_forward", "takeoff", "move_forward", "turn"]
        );
        assert_eq!(report.laps_flown, 2);
        assert_eq!(report.commands_executed, 4);
        assert_eq!(report.failures.len(), 1);
        assert!(!report.is_clean());
    }

    #[tokio::test]
    async fn empty_sequence_is_a_clean_flight() {
        let report = FlightStrategy::Recon.run(&[]).await;
        assert_eq!(report.commands_executed, 0);
        assert!(report.is_clean());
    }
}
