//! Mission eligibility validation.
//!
//! Filters registry entries against mission requirements and produces the
//! transient [`ValidatedDrone`] records the mission manager consumes.
//! Rejections are logged and returned as typed errors; they never abort a
//! selection pass.

use std::sync::Arc;

use chrono::Utc;
use fleet_domain::{MissionRequirement, ValidatedDrone};
use tracing::{error, info, warn};

use crate::adapters::AdapterSet;
use crate::error::{FleetError, Result};
use crate::registry::FleetRegistry;

/// Gate between the fleet registry and mission assignment.
pub struct EligibilityValidator {
    registry: Arc<FleetRegistry>,
    adapters: Arc<AdapterSet>,
}

impl EligibilityValidator {
    #[must_use]
    pub fn new(registry: Arc<FleetRegistry>, adapters: Arc<AdapterSet>) -> Self {
        Self { registry, adapters }
    }

    /// Ids of every registry entry whose battery capacity meets the
    /// requirement, in registry iteration order. Entries below the threshold
    /// are logged, not errored.
    #[must_use]
    pub fn select_by_capacity(&self, requirement: &MissionRequirement) -> Vec<String> {
        let mut selected = Vec::new();
        for descriptor in self.registry.snapshot() {
            if descriptor.battery_capacity >= requirement.min_battery_capacity {
                info!(
                    drone_id = %descriptor.drone_id,
                    battery_capacity = descriptor.battery_capacity,
                    "drone meets the battery capacity requirement"
                );
                selected.push(descriptor.drone_id.clone());
            } else {
                warn!(
                    drone_id = %descriptor.drone_id,
                    battery_capacity = descriptor.battery_capacity,
                    required = requirement.min_battery_capacity,
                    "drone does not meet the battery capacity requirement"
                );
            }
        }
        selected
    }

    /// Clear one drone for mission assignment.
    ///
    /// # Errors
    ///
    /// `NotFound` if the id is not in the registry, `Unsupported` if no API
    /// adapter exists for its manufacturer, `Ineligible` if the drone is not
    /// operational. No partial record is produced on any failure.
    pub fn approve(&self, drone_id: &str) -> Result<ValidatedDrone> {
        let Some(descriptor) = self.registry.find_by_id(drone_id) else {
            warn!(drone_id, "drone not found in registry");
            return Err(FleetError::NotFound {
                drone_id: drone_id.to_string(),
            });
        };

        if !self.check_manufacturer_api(&descriptor.manufacturer) {
            error!(
                drone_id,
                manufacturer = %descriptor.manufacturer,
                "drone not approved: manufacturer API check failed"
            );
            return Err(FleetError::Unsupported {
                manufacturer: descriptor.manufacturer.clone(),
            });
        }

        if !descriptor.is_operational() {
            warn!(drone_id, status = %descriptor.status, "drone is not operational");
            return Err(FleetError::Ineligible {
                drone_id: drone_id.to_string(),
                status: descriptor.status,
            });
        }

        info!(
            drone_id,
            manufacturer = %descriptor.manufacturer,
            status = %descriptor.status,
            battery_capacity = descriptor.battery_capacity,
            "drone approved for mission"
        );

        Ok(ValidatedDrone {
            drone_id: descriptor.drone_id.clone(),
            manufacturer: descriptor.manufacturer.clone(),
            status: descriptor.status,
            battery_capacity: descriptor.battery_capacity,
            validated_at: Utc::now(),
        })
    }

    /// Whether an API adapter exists for this manufacturer name,
    /// case-insensitive. A capability lookup only: no connection is opened.
    #[must_use]
    pub fn check_manufacturer_api(&self, manufacturer: &str) -> bool {
        let supported = self.adapters.supports(manufacturer);
        if supported {
            info!(manufacturer, "manufacturer is supported");
        } else {
            warn!(manufacturer, "manufacturer is not supported");
        }
        supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ManufacturerApi;
    use crate::error::AdapterError;
    use async_trait::async_trait;
    use fleet_domain::{DroneDescriptor, OperationalStatus, SensorKind};

    struct NullAdapter {
        name: &'static str,
    }

    #[async_trait]
    impl ManufacturerApi for NullAdapter {
        fn manufacturer(&self) -> &str {
            self.name
        }

        async fn connect(&self) -> std::result::Result<(), AdapterError> {
            Ok(())
        }

        async fn send_command(&self, _command: &str) -> std::result::Result<(), AdapterError> {
            Ok(())
        }
    }

    fn descriptor(id: &str, battery: u16, status: OperationalStatus) -> DroneDescriptor {
        DroneDescriptor {
            drone_id: id.to_string(),
            model: "Phantom 4".to_string(),
            manufacturer: "DJI".to_string(),
            sensors: [SensorKind::Camera, SensorKind::Gps].into_iter().collect(),
            max_speed_mps: 20,
            max_altitude_m: 6000,
            battery_capacity: battery,
            status,
        }
    }

    fn validator_with(entries: Vec<DroneDescriptor>) -> EligibilityValidator {
        let registry = Arc::new(FleetRegistry::new());
        for entry in entries {
            registry.get_or_create(entry);
        }
        let mut adapters = AdapterSet::new();
        adapters.register(Arc::new(NullAdapter { name: "DJI" }));
        EligibilityValidator::new(registry, Arc::new(adapters))
    }

    #[test]
    fn selects_exactly_the_ids_meeting_capacity() {
        let validator = validator_with(vec![
            descriptor("A", 80, OperationalStatus::Operational),
            descriptor("B", 50, OperationalStatus::Operational),
            descriptor("C", 75, OperationalStatus::Operational),
        ]);

        let selected = validator.select_by_capacity(&MissionRequirement::new(75));
        assert_eq!(selected, ["A", "C"]);

        assert!(
            validator
                .select_by_capacity(&MissionRequirement::new(90))
                .is_empty()
        );
    }

    #[test]
    fn approve_produces_a_validated_record() {
        let validator = validator_with(vec![descriptor("A", 80, OperationalStatus::Operational)]);

        let validated = validator.approve("A").unwrap();
        assert_eq!(validated.drone_id, "A");
        assert_eq!(validated.manufacturer, "DJI");
        assert_eq!(validated.battery_capacity, 80);
        assert_eq!(validated.status, OperationalStatus::Operational);
    }

    #[test]
    fn approve_unknown_id_is_not_found() {
        let validator = validator_with(vec![descriptor("A", 80, OperationalStatus::Operational)]);
        assert!(matches!(
            validator.approve("GHOST"),
            Err(FleetError::NotFound { drone_id }) if drone_id == "GHOST"
        ));
    }

    #[test]
    fn approve_unsupported_manufacturer_fails() {
        let registry = Arc::new(FleetRegistry::new());
        registry.get_or_create(DroneDescriptor {
            manufacturer: "Skydio".to_string(),
            ..descriptor("S1", 90, OperationalStatus::Operational)
        });
        // Empty adapter set: nobody is supported.
        let validator = EligibilityValidator::new(registry, Arc::new(AdapterSet::new()));

        assert!(matches!(
            validator.approve("S1"),
            Err(FleetError::Unsupported { manufacturer }) if manufacturer == "Skydio"
        ));
    }

    #[test]
    fn approve_grounded_drone_is_ineligible() {
        let validator = validator_with(vec![descriptor("A", 80, OperationalStatus::Grounded)]);
        assert!(matches!(
            validator.approve("A"),
            Err(FleetError::Ineligible { status, .. }) if status == OperationalStatus::Grounded
        ));
    }

    #[test]
    fn manufacturer_check_is_case_insensitive() {
        let validator = validator_with(vec![]);
        assert!(validator.check_manufacturer_api("dji"));
        assert!(validator.check_manufacturer_api("DJI"));
        assert!(!validator.check_manufacturer_api("AirSim"));
    }
}
