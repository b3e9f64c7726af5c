//! Static fleet roster and the stub manufacturer adapters.
//!
//! Stands in for the external inventory source: rows are interned into the
//! registry at startup, exactly as a database-backed loader would do it.

use std::str::FromStr;
use std::sync::Arc;

use fleet_domain::{DomainError, DroneDescriptor, OperationalStatus, SensorKind};
use fleet_registry::{AdapterError, AdapterSet, FleetRegistry, ManufacturerApi};

use async_trait::async_trait;
use tracing::{debug, info};

/// One inventory row, as the external source would hand it over.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub drone_id: &'static str,
    pub model: &'static str,
    pub manufacturer: &'static str,
    pub sensors: &'static [&'static str],
    pub max_speed_mps: u16,
    pub max_altitude_m: u32,
    pub battery_capacity: u16,
    pub status: &'static str,
}

/// The demo fleet. Covers every eligibility outcome: capable, low-battery,
/// grounded, and unsupported-manufacturer airframes.
pub const FLEET_ROSTER: &[RosterEntry] = &[
    RosterEntry {
        drone_id: "DJI001",
        model: "Phantom 4",
        manufacturer: "DJI",
        sensors: &["Camera", "GPS", "Altimeter", "Anemometer"],
        max_speed_mps: 20,
        max_altitude_m: 6000,
        battery_capacity: 80,
        status: "operational",
    },
    RosterEntry {
        drone_id: "AIRSIM001",
        model: "AirSim Model",
        manufacturer: "AirSim",
        sensors: &["Camera", "GPS", "Altimeter", "Anemometer"],
        max_speed_mps: 15,
        max_altitude_m: 5000,
        battery_capacity: 80,
        status: "operational",
    },
    RosterEntry {
        drone_id: "DJI002",
        model: "Mavic 3",
        manufacturer: "DJI",
        sensors: &["Camera", "GPS"],
        max_speed_mps: 19,
        max_altitude_m: 6000,
        battery_capacity: 50,
        status: "operational",
    },
    RosterEntry {
        drone_id: "DJI003",
        model: "Phantom 4",
        manufacturer: "DJI",
        sensors: &["Camera", "GPS", "Altimeter"],
        max_speed_mps: 20,
        max_altitude_m: 6000,
        battery_capacity: 90,
        status: "grounded",
    },
    RosterEntry {
        drone_id: "PARROT001",
        model: "Anafi",
        manufacturer: "Parrot",
        sensors: &["Camera", "GPS"],
        max_speed_mps: 16,
        max_altitude_m: 4500,
        battery_capacity: 85,
        status: "operational",
    },
];

/// Intern every roster row into the registry. Returns the number of rows
/// processed; repeated seeding is harmless thanks to interning.
///
/// # Errors
///
/// `DomainError` if a row carries an unknown sensor or status label.
pub fn seed(registry: &FleetRegistry) -> Result<usize, DomainError> {
    for entry in FLEET_ROSTER {
        let sensors = entry
            .sensors
            .iter()
            .map(|name| SensorKind::from_str(name))
            .collect::<Result<_, _>>()?;

        let descriptor = DroneDescriptor {
            drone_id: entry.drone_id.to_string(),
            model: entry.model.to_string(),
            manufacturer: entry.manufacturer.to_string(),
            sensors,
            max_speed_mps: entry.max_speed_mps,
            max_altitude_m: entry.max_altitude_m,
            battery_capacity: entry.battery_capacity,
            status: OperationalStatus::from_str(entry.status)?,
        };
        registry.get_or_create(descriptor);
    }
    info!(rows = FLEET_ROSTER.len(), fleet = registry.len(), "fleet roster seeded");
    Ok(FLEET_ROSTER.len())
}

/// The adapter set matching the demo fleet: MAVLink-class DJI airframes and
/// AirSim virtual vehicles. Parrot deliberately has none.
#[must_use]
pub fn default_adapters() -> AdapterSet {
    let mut adapters = AdapterSet::new();
    adapters.register(Arc::new(MavlinkAdapter {
        manufacturer: "DJI".to_string(),
        connect_uri: "udpin:0.0.0.0:14550".to_string(),
    }));
    adapters.register(Arc::new(AirSimAdapter {
        manufacturer: "AirSim".to_string(),
    }));
    adapters
}

/// Stub for the MAVLink command link. Logs instead of speaking the wire
/// protocol; the core only ever asks whether it exists.
pub struct MavlinkAdapter {
    manufacturer: String,
    connect_uri: String,
}

#[async_trait]
impl ManufacturerApi for MavlinkAdapter {
    fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    async fn connect(&self) -> Result<(), AdapterError> {
        debug!(uri = %self.connect_uri, "attempting MAVLink connection");
        info!(manufacturer = %self.manufacturer, "MAVLink link established");
        Ok(())
    }

    async fn send_command(&self, command: &str) -> Result<(), AdapterError> {
        info!(manufacturer = %self.manufacturer, command, "command sent over MAVLink");
        Ok(())
    }
}

/// Stub for the AirSim RPC client.
pub struct AirSimAdapter {
    manufacturer: String,
}

#[async_trait]
impl ManufacturerApi for AirSimAdapter {
    fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    async fn connect(&self) -> Result<(), AdapterError> {
        info!(manufacturer = %self.manufacturer, "AirSim connection confirmed");
        Ok(())
    }

    async fn send_command(&self, command: &str) -> Result<(), AdapterError> {
        info!(manufacturer = %self.manufacturer, command, "command sent to AirSim");
        Ok(())
    }
}
