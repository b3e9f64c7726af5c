//! # Fleet Simulator
//!
//! Simulated drones, sensors, and a static roster for exercising the fleet
//! core end-to-end without hardware.
//!
//! ## Features
//!
//! - Log-flying [`SimulatedDrone`] actuation with scriptable faults
//! - Noisy sensor suite producing keyed telemetry polls
//! - Demo fleet roster covering every eligibility outcome
//! - Stub MAVLink/AirSim manufacturer adapters

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod handle;
pub mod roster;
pub mod sensors;

pub use handle::SimulatedDrone;
pub use roster::{FLEET_ROSTER, default_adapters, seed};
pub use sensors::SensorSuite;
