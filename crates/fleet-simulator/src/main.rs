//! Fleet Simulator CLI
//!
//! Drives the full fleet pipeline against simulated hardware: seed the
//! registry, validate against a mission requirement, hand the validated set
//! to the mission manager, then fly a recon leg and a patrol.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use fleet_domain::{LiveState, MissionRequirement, SensorKind, SensorReading};
use fleet_mission::{Command, FlightReport, FlightStrategy, MissionContext, MissionManager};
use fleet_registry::{EligibilityValidator, FleetRegistry};
use fleet_simulator::{SensorSuite, SimulatedDrone, default_adapters, seed};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fleet-simulator")]
#[command(about = "Simulate UAV fleet validation and mission flight")]
struct Args {
    /// Minimum battery capacity a drone must have for the mission
    #[arg(short, long, default_value = "75")]
    required_capacity: u16,

    /// Patrol laps to fly after the recon leg
    #[arg(short, long, default_value = "2")]
    laps: NonZeroU32,

    /// Forward leg distance in meters
    #[arg(long, default_value = "10.0")]
    forward_m: f64,

    /// Turn angle in degrees
    #[arg(long, default_value = "90.0")]
    turn_deg: f64,

    /// Simulated actuation delay per maneuver in milliseconds
    #[arg(long, default_value = "250")]
    actuation_delay_ms: u64,

    /// Script the n-th maneuver (zero-based) to fail
    #[arg(long)]
    fail_at: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("fleet_simulator=info".parse()?),
        )
        .init();

    let args = Args::parse();

    // Fleet intake: roster rows become interned descriptors.
    let registry = Arc::new(FleetRegistry::new());
    seed(&registry)?;
    let validator = EligibilityValidator::new(Arc::clone(&registry), Arc::new(default_adapters()));

    // Selection and approval.
    let requirement = MissionRequirement::new(args.required_capacity);
    let selected = validator.select_by_capacity(&requirement);
    info!(?selected, required = args.required_capacity, "capacity selection done");

    let mut validated = Vec::new();
    for drone_id in &selected {
        match validator.approve(drone_id) {
            Ok(drone) => {
                info!(drone_id = %drone.drone_id, "approved for flight and mission");
                validated.push(drone);
            }
            Err(err) => warn!(drone_id = %drone_id, %err, "drone rejected"),
        }
    }
    info!(
        validated = %serde_json::to_string(&validated)?,
        "validated set ready for handover"
    );

    // Handover to the mission manager, with a completeness audit.
    let mut manager = MissionManager::new();
    if let Err(err) = manager.receive(validated.clone()) {
        warn!(%err, "no mission will be flown");
        return Ok(());
    }
    let audit = MissionManager::check_completeness(&validated, manager.validated());
    if !audit.is_complete() {
        warn!(missing = ?audit.missing, unexpected = ?audit.unexpected, "handover drifted");
    }

    // Fly the lead drone: one recon leg, then the patrol.
    let lead_id = manager.validated()[0].drone_id.clone();
    let mut sim = SimulatedDrone::new(&lead_id)
        .with_actuation_delay(Duration::from_millis(args.actuation_delay_ms));
    if let Some(n) = args.fail_at {
        sim = sim.with_failure_at(n);
    }
    let lead = Arc::new(sim);

    let mut ctx = MissionContext::with_strategy(FlightStrategy::Recon);
    ctx.add_command(Command::takeoff(lead.clone()));
    ctx.add_command(Command::move_forward(lead.clone(), args.forward_m));
    ctx.add_command(Command::turn(lead.clone(), args.turn_deg));
    log_report("recon", &ctx.execute().await?);

    ctx.set_strategy(FlightStrategy::patrol(args.laps));
    ctx.add_command(Command::takeoff(lead.clone()));
    ctx.add_command(Command::move_forward(lead.clone(), args.forward_m));
    ctx.add_command(Command::turn(lead.clone(), args.turn_deg));
    log_report("patrol", &ctx.execute().await?);

    info!(maneuvers = lead.maneuvers_flown(), "flight demo finished");

    // One telemetry poll from the lead drone's sensor suite.
    let mut sensors = SensorSuite::new(55.7558, 37.6176, 120.0);
    let poll = sensors.poll();
    for (kind, reading) in &poll {
        info!(sensor = kind.as_str(), ?reading, "telemetry");
    }
    if let Some(descriptor) = registry.find_by_id(&lead_id) {
        let altitude_m = match poll.get(&SensorKind::Altimeter) {
            Some(SensorReading::Altitude(alt)) => *alt,
            _ => 0.0,
        };
        let live = LiveState {
            speed_mps: f32::from(descriptor.max_speed_mps) * 0.6,
            altitude_m,
            battery_pct: 96.0,
        };
        info!("{}", descriptor.status_report(&live));
    }

    Ok(())
}

/// Summarize one mission leg in the logs.
fn log_report(leg: &str, report: &FlightReport) {
    if report.is_clean() {
        info!(
            leg,
            laps = report.laps_flown,
            executed = report.commands_executed,
            "mission leg complete"
        );
    } else {
        warn!(
            leg,
            laps = report.laps_flown,
            executed = report.commands_executed,
            failures = report.failures.len(),
            "mission leg finished with failures"
        );
    }
}
