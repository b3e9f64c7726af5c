//! Manufacturer API adapter seam.
//!
//! The core never drives a flight-controller protocol itself; it only needs
//! to know whether an adapter *exists* for a manufacturer when judging
//! eligibility. Concrete adapters live with their transports, outside this
//! crate, and are registered here at startup.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AdapterError;

/// One manufacturer's command-link API.
///
/// Implementations may fail to connect; eligibility checks never call
/// [`connect`](ManufacturerApi::connect), they only consult the
/// [`AdapterSet`] for existence.
#[async_trait]
pub trait ManufacturerApi: Send + Sync {
    /// Manufacturer name this adapter speaks for.
    fn manufacturer(&self) -> &str;

    /// Establish the command link.
    async fn connect(&self) -> Result<(), AdapterError>;

    /// Forward a command description over the link.
    async fn send_command(&self, command: &str) -> Result<(), AdapterError>;
}

/// Registry of available manufacturer adapters, keyed case-insensitively.
#[derive(Default)]
pub struct AdapterSet {
    adapters: HashMap<String, Arc<dyn ManufacturerApi>>,
}

impl AdapterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its manufacturer name. Re-registering a
    /// name replaces the previous adapter.
    pub fn register(&mut self, adapter: Arc<dyn ManufacturerApi>) {
        let key = adapter.manufacturer().to_ascii_lowercase();
        self.adapters.insert(key, adapter);
    }

    /// Whether any adapter exists for this manufacturer name.
    #[must_use]
    pub fn supports(&self, manufacturer: &str) -> bool {
        self.adapters
            .contains_key(&manufacturer.to_ascii_lowercase())
    }

    #[must_use]
    pub fn get(&self, manufacturer: &str) -> Option<Arc<dyn ManufacturerApi>> {
        self.adapters
            .get(&manufacturer.to_ascii_lowercase())
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
