//! Simulated drone actuation.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use fleet_mission::{DroneHandle, HandleError};
use tokio::time::sleep;
use tracing::info;

/// A drone that flies in the logs.
///
/// Each maneuver sleeps the configured actuation delay to mimic the real
/// suspend points of a flight-controller link. An optional scripted failure
/// makes the n-th maneuver (zero-based, across the handle's lifetime) report
/// an actuation fault, which is how the demo shows recon aborts and patrol
/// lap independence.
pub struct SimulatedDrone {
    callsign: String,
    actuation_delay: Duration,
    fail_at: Option<u32>,
    maneuvers: AtomicU32,
}

impl SimulatedDrone {
    #[must_use]
    pub fn new(callsign: &str) -> Self {
        Self {
            callsign: callsign.to_string(),
            actuation_delay: Duration::from_secs(1),
            fail_at: None,
            maneuvers: AtomicU32::new(0),
        }
    }

    #[must_use]
    pub fn with_actuation_delay(mut self, delay: Duration) -> Self {
        self.actuation_delay = delay;
        self
    }

    /// Script the `n`-th maneuver to fail with an actuation fault.
    #[must_use]
    pub fn with_failure_at(mut self, n: u32) -> Self {
        self.fail_at = Some(n);
        self
    }

    /// Total maneuvers attempted over this handle's lifetime.
    #[must_use]
    pub fn maneuvers_flown(&self) -> u32 {
        self.maneuvers.load(Ordering::SeqCst)
    }

    async fn actuate(&self, maneuver: &str) -> Result<(), HandleError> {
        let n = self.maneuvers.fetch_add(1, Ordering::SeqCst);
        sleep(self.actuation_delay).await;
        if self.fail_at == Some(n) {
            return Err(HandleError::Actuation {
                reason: format!("{}: scripted fault during {maneuver}", self.callsign),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DroneHandle for SimulatedDrone {
    async fn takeoff(&self) -> Result<(), HandleError> {
        info!(callsign = %self.callsign, "lifting off");
        self.actuate("takeoff").await
    }

    async fn move_forward(&self, distance_m: f64) -> Result<(), HandleError> {
        info!(callsign = %self.callsign, distance_m, "flying forward");
        self.actuate("move_forward").await
    }

    async fn turn(&self, degree: f64) -> Result<(), HandleError> {
        info!(callsign = %self.callsign, degree, "turning");
        self.actuate("turn").await
    }
}
