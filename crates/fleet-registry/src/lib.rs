//! # Fleet Registry Library
//!
//! Interning registry and mission eligibility layer for the UAV fleet core.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Caller (HTTP, CLI)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    EligibilityValidator                      │
//! │        (capacity filter, adapter check, approval)            │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                   │
//!                    ▼                   ▼
//! ┌─────────────────────────┐   ┌──────────────────────────────┐
//! │      FleetRegistry      │   │         AdapterSet           │
//! │  (interned descriptors) │   │  (manufacturer capability)   │
//! └─────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! The registry interns [`fleet_domain::DroneDescriptor`] values: equal
//! field tuples share one cached instance for the life of the process. The
//! validator reads that shared state and consults the adapter set for
//! manufacturer support; it never opens a command link itself.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod error;
pub mod registry;
pub mod validator;

// Re-export commonly used types
pub use adapters::{AdapterSet, ManufacturerApi};
pub use error::{AdapterError, FleetError, Result};
pub use registry::FleetRegistry;
pub use validator::EligibilityValidator;
