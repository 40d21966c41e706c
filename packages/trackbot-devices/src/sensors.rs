use log::trace;
use trackbot_sensing::RangeSensor;
use vexide::prelude::{AdiAnalogIn, AdiRangeFinder};

/// Two-wire ultrasonic rangefinder. Reads in centimeters.
#[derive(Debug)]
pub struct Sonar(pub AdiRangeFinder);

impl RangeSensor for Sonar {
    fn read(&mut self) -> Option<f64> {
        match self.0.distance() {
            Ok(distance) => distance.map(f64::from),
            Err(err) => {
                trace!("rangefinder read failed: {err:?}");
                None
            }
        }
    }
}

/// Analog-output sonar, such as a MaxBotix module, on an analog input.
#[derive(Debug)]
pub struct AnalogRange {
    input: AdiAnalogIn,
    units_per_count: f64,
}

impl AnalogRange {
    /// MaxBotix analog scaling on a 5 V, 12-bit input, in inches per count.
    pub const MAXBOTIX_INCHES: f64 = 0.125;

    /// Creates a sensor that converts raw ADC counts with `units_per_count`.
    pub const fn new(input: AdiAnalogIn, units_per_count: f64) -> Self {
        Self {
            input,
            units_per_count,
        }
    }
}

impl RangeSensor for AnalogRange {
    fn read(&mut self) -> Option<f64> {
        match self.input.value() {
            Ok(counts) => Some(f64::from(counts) * self.units_per_count),
            Err(err) => {
                trace!("analog range read failed: {err:?}");
                None
            }
        }
    }
}
