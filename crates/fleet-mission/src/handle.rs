//! Drone actuation seam.
//!
//! Commands are bound to a [`DroneHandle`], the abstraction over whatever
//! actually moves the airframe (a simulator, a flight-controller link).
//! Implementations can be swapped without touching the command layer.

use async_trait::async_trait;

use crate::error::HandleError;

/// Motion primitives of one drone.
///
/// Every operation is suspend-capable: implementations are expected to
/// await the underlying actuation I/O. Parameter validation is not this
/// seam's job; any float is forwarded as-is.
#[async_trait]
pub trait DroneHandle: Send + Sync {
    /// Lift off from the current position.
    async fn takeoff(&self) -> Result<(), HandleError>;

    /// Fly forward by `distance_m` meters.
    async fn move_forward(&self, distance_m: f64) -> Result<(), HandleError>;

    /// Yaw by `degree` degrees.
    async fn turn(&self, degree: f64) -> Result<(), HandleError>;
}
