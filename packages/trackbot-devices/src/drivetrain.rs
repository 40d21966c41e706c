use trackbot_drivetrain::model::{DrivetrainModel, Tank};
use vexide::{devices::PortError, prelude::Motor};

/// Left and right groups of V5 motors.
///
/// Motor directions are fixed at construction to match the wiring, so a positive power
/// always drives the robot forward.
#[derive(Debug)]
pub struct Differential {
    left: Vec<Motor>,
    right: Vec<Motor>,
}

impl Differential {
    /// Creates a drivetrain from two motor groups.
    pub fn new<const L: usize, const R: usize>(left: [Motor; L], right: [Motor; R]) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl DrivetrainModel for Differential {
    type Error = PortError;
}

impl Tank for Differential {
    fn drive_tank(&mut self, left: f64, right: f64) -> Result<(), Self::Error> {
        let mut result = Ok(());

        for motor in &mut self.left {
            let write = motor.set_voltage(left * Motor::V5_MAX_VOLTAGE);
            if result.is_ok() {
                result = write;
            }
        }
        for motor in &mut self.right {
            let write = motor.set_voltage(right * Motor::V5_MAX_VOLTAGE);
            if result.is_ok() {
                result = write;
            }
        }

        result
    }
}
