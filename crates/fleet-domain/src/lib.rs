//! # UAV Fleet Management - Domain Model
//!
//! Core domain entities, value objects, and enums for fleet registry,
//! mission eligibility, and command sequencing. These types are the single
//! source of truth across all layers: registry, mission execution, and
//! simulation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Extrinsic per-poll flight state, paired with a [`DroneDescriptor`] when
/// reporting. The descriptor stays immutable; this is the part that changes
/// between polls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiveState {
    pub speed_mps: f32,
    pub altitude_m: f64,
    pub battery_pct: f32,
}

impl Default for LiveState {
    fn default() -> Self {
        Self {
            speed_mps: 0.0,
            altitude_m: 0.0,
            battery_pct: 100.0,
        }
    }
}

/// A single reading from one onboard sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SensorReading {
    /// Barometric altitude in meters
    Altitude(f64),
    /// GPS fix
    Position { latitude: f64, longitude: f64 },
    /// Wind speed in meters per second
    WindSpeed(f32),
    /// Camera confirmed a frame capture
    FrameCaptured,
}

/// One poll of the telemetry source: a keyed mapping from sensor kind to its
/// latest reading. No ordering between sensor kinds is guaranteed by the
/// source; the map is keyed, not sequenced.
pub type TelemetryPoll = BTreeMap<SensorKind, SensorReading>;

// =============================================================================
// ENUMS
// =============================================================================

/// Onboard sensor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorKind {
    Camera,
    Gps,
    Altimeter,
    Anemometer,
}

impl SensorKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "CAMERA",
            Self::Gps => "GPS",
            Self::Altimeter => "ALTIMETER",
            Self::Anemometer => "ANEMOMETER",
        }
    }
}

impl FromStr for SensorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CAMERA" => Ok(Self::Camera),
            "GPS" => Ok(Self::Gps),
            "ALTIMETER" => Ok(Self::Altimeter),
            "ANEMOMETER" => Ok(Self::Anemometer),
            _ => Err(DomainError::UnknownSensor(s.to_string())),
        }
    }
}

/// Drone operational status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationalStatus {
    /// Airworthy and available for tasking
    #[default]
    Operational,
    Grounded,
    Unknown,
}

impl OperationalStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::Grounded => "GROUNDED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for OperationalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OPERATIONAL" => Ok(Self::Operational),
            "GROUNDED" => Ok(Self::Grounded),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for OperationalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Drone descriptor - the immutable identity and rated capabilities of one
/// airframe configuration.
///
/// Identity is the full field tuple, not just `drone_id`: two descriptors
/// with identical fields are the same cached entity, which is what makes the
/// registry's interning sound. `Eq`/`Hash` are derived over every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DroneDescriptor {
    pub drone_id: String,
    pub model: String,
    pub manufacturer: String,
    pub sensors: BTreeSet<SensorKind>,
    pub max_speed_mps: u16,
    pub max_altitude_m: u32,
    pub battery_capacity: u16,
    pub status: OperationalStatus,
}

impl DroneDescriptor {
    #[must_use]
    pub fn has_sensor(&self, kind: SensorKind) -> bool {
        self.sensors.contains(&kind)
    }

    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.status == OperationalStatus::Operational
    }

    /// Render a status report combining the rated capabilities with the
    /// current extrinsic flight state.
    #[must_use]
    pub fn status_report(&self, live: &LiveState) -> String {
        let sensors: Vec<&str> = self.sensors.iter().map(SensorKind::as_str).collect();
        format!(
            "{} [{} / {}] sensors={} max_speed={}mps ceiling={}m capacity={} | \
             speed={:.1}mps alt={:.0}m battery={:.0}%",
            self.drone_id,
            self.manufacturer,
            self.model,
            sensors.join(","),
            self.max_speed_mps,
            self.max_altitude_m,
            self.battery_capacity,
            live.speed_mps,
            live.altitude_m,
            live.battery_pct,
        )
    }
}

/// Mission eligibility thresholds.
///
/// Currently battery capacity only; further thresholds (sensor fit, ceiling)
/// extend this struct rather than the validator's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionRequirement {
    pub min_battery_capacity: u16,
}

impl MissionRequirement {
    #[must_use]
    pub const fn new(min_battery_capacity: u16) -> Self {
        Self {
            min_battery_capacity,
        }
    }
}

/// A drone that passed the full eligibility check for one selection pass.
///
/// Transient: created per mission-selection pass, handed to the mission
/// manager, and discarded with the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedDrone {
    pub drone_id: String,
    pub manufacturer: String,
    pub status: OperationalStatus,
    pub battery_capacity: u16,
    pub validated_at: DateTime<Utc>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("unknown sensor kind: {0}")]
    UnknownSensor(String),

    #[error("unknown operational status: {0}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    fn descriptor(id: &str, battery: u16) -> DroneDescriptor {
        DroneDescriptor {
            drone_id: id.to_string(),
            model: "Phantom 4".to_string(),
            manufacturer: "DJI".to_string(),
            sensors: [SensorKind::Camera, SensorKind::Gps].into_iter().collect(),
            max_speed_mps: 20,
            max_altitude_m: 6000,
            battery_capacity: battery,
            status: OperationalStatus::Operational,
        }
    }

    #[test]
    fn identity_is_full_field_tuple() {
        let a = descriptor("DJI001", 80);
        let b = descriptor("DJI001", 80);
        assert_eq!(a, b);
        assert!(a.has_sensor(SensorKind::Camera));
        assert!(!a.has_sensor(SensorKind::Anemometer));

        // Same id, different capability: a distinct entity.
        let c = descriptor("DJI001", 50);
        assert_ne!(a, c);
    }

    #[test]
    fn identity_survives_arbitrary_capacities() {
        let battery: u16 = (1..=100).fake();
        assert_eq!(descriptor("X", battery), descriptor("X", battery));
    }

    #[test]
    fn sensor_names_round_trip() {
        for kind in [
            SensorKind::Camera,
            SensorKind::Gps,
            SensorKind::Altimeter,
            SensorKind::Anemometer,
        ] {
            assert_eq!(kind.as_str().parse::<SensorKind>().unwrap(), kind);
        }
        assert!("sonar".parse::<SensorKind>().is_err());
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            "operational".parse::<OperationalStatus>().unwrap(),
            OperationalStatus::Operational
        );
        assert!("retired".parse::<OperationalStatus>().is_err());
    }

    #[test]
    fn status_report_includes_live_state() {
        let report = descriptor("DJI001", 80).status_report(&LiveState {
            speed_mps: 12.5,
            altitude_m: 140.0,
            battery_pct: 76.0,
        });
        assert!(report.contains("DJI001"));
        assert!(report.contains("alt=140m"));
    }
}
