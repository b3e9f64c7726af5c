//! Simulated onboard sensor suite.
//!
//! Produces the keyed telemetry mapping the core consumes from a real
//! sensor source, with gaussian noise on every reading.

use fleet_domain::{SensorKind, SensorReading, TelemetryPoll};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// One drone's worth of simulated sensors.
pub struct SensorSuite {
    base_altitude_m: f64,
    base_latitude: f64,
    base_longitude: f64,
    rng: rand::rngs::ThreadRng,
    noise: Normal<f64>,
}

impl SensorSuite {
    /// Suite centered on a home position.
    ///
    /// # Panics
    ///
    /// Never; the noise distribution parameters are fixed and valid.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, altitude_m: f64) -> Self {
        Self {
            base_altitude_m: altitude_m,
            base_latitude: latitude,
            base_longitude: longitude,
            rng: rand::thread_rng(),
            noise: Normal::new(0.0, 1.0).unwrap(),
        }
    }

    /// Poll every sensor once.
    ///
    /// The result is a keyed mapping; consumers must not assume any ordering
    /// between sensor kinds beyond the map's own.
    pub fn poll(&mut self) -> TelemetryPoll {
        let mut readings = TelemetryPoll::new();
        readings.insert(
            SensorKind::Altimeter,
            SensorReading::Altitude(self.base_altitude_m + self.noise.sample(&mut self.rng) * 2.5),
        );
        readings.insert(
            SensorKind::Gps,
            SensorReading::Position {
                latitude: self.base_latitude + self.noise.sample(&mut self.rng) * 1e-5,
                longitude: self.base_longitude + self.noise.sample(&mut self.rng) * 1e-5,
            },
        );
        readings.insert(
            SensorKind::Anemometer,
            SensorReading::WindSpeed(self.rng.gen_range(0.0..12.0)),
        );
        readings.insert(SensorKind::Camera, SensorReading::FrameCaptured);
        readings
    }
}
