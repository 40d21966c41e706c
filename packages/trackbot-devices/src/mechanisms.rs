use trackbot_math::remap;
use trackbot_mechanisms::{PowerOutput, Relay, Servo, Switch, Valve, ValveState};
use vexide::{
    devices::PortError,
    prelude::{AdiDigitalIn, AdiDigitalOut, AdiServo, Motor, Position},
};

/// Travel of a 3-wire servo either side of center, in degrees.
const SERVO_HALF_TRAVEL: f64 = 50.0;

/// A single V5 motor driven by normalized power.
#[derive(Debug)]
pub struct LiftMotor(pub Motor);

impl PowerOutput for LiftMotor {
    type Error = PortError;

    fn set_power(&mut self, power: f64) -> Result<(), Self::Error> {
        self.0.set_voltage(power * Motor::V5_MAX_VOLTAGE)
    }
}

/// A double-acting valve driven by two solenoid outputs.
///
/// Both outputs low vents the cylinder. Both high is never commanded.
#[derive(Debug)]
pub struct DoubleSolenoid {
    extend: AdiDigitalOut,
    retract: AdiDigitalOut,
}

impl DoubleSolenoid {
    /// Creates a valve from its extend and retract outputs.
    pub const fn new(extend: AdiDigitalOut, retract: AdiDigitalOut) -> Self {
        Self { extend, retract }
    }
}

impl Valve for DoubleSolenoid {
    type Error = PortError;

    fn set_state(&mut self, state: ValveState) -> Result<(), Self::Error> {
        // Release before energizing so both sides are never open at once.
        match state {
            ValveState::Forward => {
                self.retract.set_low()?;
                self.extend.set_high()
            }
            ValveState::Reverse => {
                self.extend.set_low()?;
                self.retract.set_high()
            }
            ValveState::Off => {
                self.extend.set_low()?;
                self.retract.set_low()
            }
        }
    }
}

/// A 3-wire servo addressed by normalized position.
#[derive(Debug)]
pub struct CameraServo(pub AdiServo);

impl Servo for CameraServo {
    type Error = PortError;

    fn set_position(&mut self, position: f64) -> Result<(), Self::Error> {
        let degrees = remap(
            position,
            (0.0, 1.0),
            (-SERVO_HALF_TRAVEL, SERVO_HALF_TRAVEL),
        );
        self.0.set_target(Position::from_degrees(degrees))
    }
}

/// A relay or spike on a digital output.
#[derive(Debug)]
pub struct RelayOutput(pub AdiDigitalOut);

impl Relay for RelayOutput {
    type Error = PortError;

    fn set_energized(&mut self, energized: bool) -> Result<(), Self::Error> {
        if energized {
            self.0.set_high()
        } else {
            self.0.set_low()
        }
    }
}

/// A normally-open pressure switch on a digital input.
#[derive(Debug)]
pub struct PressureSwitch(pub AdiDigitalIn);

impl Switch for PressureSwitch {
    type Error = PortError;

    fn is_closed(&mut self) -> Result<bool, Self::Error> {
        self.0.is_high()
    }
}
