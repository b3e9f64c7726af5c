//! # Fleet Mission Library
//!
//! Command sequencing and flight strategy execution for the UAV fleet core.
//!
//! A caller binds [`Command`]s to a [`DroneHandle`], queues them on a
//! [`MissionContext`], installs a [`FlightStrategy`], and triggers
//! execution:
//!
//! ```rust,ignore
//! use fleet_mission::{Command, FlightStrategy, MissionContext};
//!
//! let mut ctx = MissionContext::with_strategy(FlightStrategy::Recon);
//! ctx.add_command(Command::takeoff(drone.clone()));
//! ctx.add_command(Command::move_forward(drone.clone(), 10.0));
//! ctx.add_command(Command::turn(drone, 90.0));
//!
//! let report = ctx.execute().await?;
//! assert!(report.is_clean());
//! ```
//!
//! Scheduling is single-threaded cooperative: commands suspend only at the
//! actuation awaits of the handle. Concurrent missions are not composed
//! within one context; run one context per physical drone on independent
//! tasks when cross-drone concurrency is needed.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod context;
pub mod error;
pub mod handle;
pub mod manager;
pub mod strategy;

// Re-export commonly used types
pub use command::{Command, DEFAULT_COMMAND_TIMEOUT};
pub use context::MissionContext;
pub use error::{HandleError, MissionError, Result};
pub use handle::DroneHandle;
pub use manager::{CompletenessReport, MissionManager};
pub use strategy::{FlightReport, FlightStrategy};
