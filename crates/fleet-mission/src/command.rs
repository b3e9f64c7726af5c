//! Motion commands.
//!
//! A closed set of variants dispatched by a single `execute` operation.
//! Each variant carries exactly the handle it is bound to and the
//! parameters it needs; commands are immutable once constructed.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::{HandleError, MissionError};
use crate::handle::DroneHandle;

/// Applied at the handle boundary so a stalled actuation call cannot block
/// a mission indefinitely.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// One atomic unit of drone motion, bound to exactly one handle.
pub enum Command {
    Takeoff {
        handle: Arc<dyn DroneHandle>,
        timeout: Duration,
    },
    MoveForward {
        handle: Arc<dyn DroneHandle>,
        distance_m: f64,
        timeout: Duration,
    },
    Turn {
        handle: Arc<dyn DroneHandle>,
        degree: f64,
        timeout: Duration,
    },
}

impl Command {
    #[must_use]
    pub fn takeoff(handle: Arc<dyn DroneHandle>) -> Self {
        Self::Takeoff {
            handle,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    #[must_use]
    pub fn move_forward(handle: Arc<dyn DroneHandle>, distance_m: f64) -> Self {
        Self::MoveForward {
            handle,
            distance_m,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    #[must_use]
    pub fn turn(handle: Arc<dyn DroneHandle>, degree: f64) -> Self {
        Self::Turn {
            handle,
            degree,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Replace the handle-boundary timeout for this command.
    #[must_use]
    pub fn with_timeout(mut self, new_timeout: Duration) -> Self {
        match &mut self {
            Self::Takeoff { timeout, .. }
            | Self::MoveForward { timeout, .. }
            | Self::Turn { timeout, .. } => *timeout = new_timeout,
        }
        self
    }

    /// Short label for logs and error records.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Takeoff { .. } => "TAKEOFF",
            Self::MoveForward { .. } => "MOVE_FORWARD",
            Self::Turn { .. } => "TURN",
        }
    }

    /// Forward to the matching handle operation.
    ///
    /// # Errors
    ///
    /// `Execution` when the handle reports an actuation failure, `Timeout`
    /// when the handle does not come back within this command's timeout.
    pub async fn execute(&self) -> Result<(), MissionError> {
        debug!(command = %self, "executing command");
        match self {
            Self::Takeoff { handle, timeout } => {
                Self::bounded(self.kind(), *timeout, handle.takeoff()).await
            }
            Self::MoveForward {
                handle,
                distance_m,
                timeout,
            } => Self::bounded(self.kind(), *timeout, handle.move_forward(*distance_m)).await,
            Self::Turn {
                handle,
                degree,
                timeout,
            } => Self::bounded(self.kind(), *timeout, handle.turn(*degree)).await,
        }
    }

    async fn bounded<F>(command: &str, timeout: Duration, op: F) -> Result<(), MissionError>
    where
        F: Future<Output = Result<(), HandleError>>,
    {
        match tokio::time::timeout(timeout, op).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(MissionError::Execution {
                command: command.to_string(),
                source,
            }),
            Err(_) => Err(MissionError::Timeout {
                command: command.to_string(),
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Takeoff { .. } => write!(f, "TAKEOFF"),
            Self::MoveForward { distance_m, .. } => write!(f, "MOVE_FORWARD {distance_m}m"),
            Self::Turn { degree, .. } => write!(f, "TURN {degree}deg"),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command::{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDrone {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DroneHandle for RecordingDrone {
        async fn takeoff(&self) -> Result<(), HandleError> {
            self.calls.lock().unwrap().push("takeoff".to_string());
            Ok(())
        }

        async fn move_forward(&self, distance_m: f64) -> Result<(), HandleError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("move_forward {distance_m}"));
            Ok(())
        }

        async fn turn(&self, degree: f64) -> Result<(), HandleError> {
            self.calls.lock().unwrap().push(format!("turn {degree}"));
            Ok(())
        }
    }

    struct StalledDrone;

    #[async_trait]
    impl DroneHandle for StalledDrone {
        async fn takeoff(&self) -> Result<(), HandleError> {
            tokio::time::sleep(Duration::from_millis(250)).await;
            Ok(())
        }

        async fn move_forward(&self, _distance_m: f64) -> Result<(), HandleError> {
            Ok(())
        }

        async fn turn(&self, _degree: f64) -> Result<(), HandleError> {
            Ok(())
        }
    }

    struct FailingDrone;

    #[async_trait]
    impl DroneHandle for FailingDrone {
        async fn takeoff(&self) -> Result<(), HandleError> {
            Err(HandleError::Actuation {
                reason: "rotor fault".to_string(),
            })
        }

        async fn move_forward(&self, _distance_m: f64) -> Result<(), HandleError> {
            Ok(())
        }

        async fn turn(&self, _degree: f64) -> Result<(), HandleError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn commands_forward_to_the_matching_operation() {
        let drone = Arc::new(RecordingDrone::default());

        Command::takeoff(drone.clone()).execute().await.unwrap();
        Command::move_forward(drone.clone(), 10.0)
            .execute()
            .await
            .unwrap();
        Command::turn(drone.clone(), 90.0).execute().await.unwrap();

        let calls = drone.calls.lock().unwrap();
        assert_eq!(*calls, ["takeoff", "move_forward 10", "turn 90"]);
    }

    #[tokio::test]
    async fn stalled_handle_times_out() {
        let cmd = Command::takeoff(Arc::new(StalledDrone)).with_timeout(Duration::from_millis(25));

        match cmd.execute().await {
            Err(MissionError::Timeout {
                command,
                timeout_ms,
            }) => {
                assert_eq!(command, "TAKEOFF");
                assert_eq!(timeout_ms, 25);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn actuation_failure_becomes_execution_error() {
        let cmd = Command::takeoff(Arc::new(FailingDrone));
        assert!(matches!(
            cmd.execute().await,
            Err(MissionError::Execution { command, .. }) if command == "TAKEOFF"
        ));
    }

    #[test]
    fn display_includes_parameters() {
        let drone: Arc<dyn DroneHandle> = Arc::new(RecordingDrone::default());
        assert_eq!(
            Command::move_forward(drone.clone(), 12.5).to_string(),
            "MOVE_FORWARD 12.5m"
        );
        assert_eq!(Command::turn(drone, 90.0).to_string(), "TURN 90deg");
    }
}
