//! Robot mechanisms other than the drivetrain.
//!
//! Each mechanism is generic over small device traits so that the control loop can be
//! exercised without hardware. `trackbot-devices` implements the traits on vexide
//! devices.

pub mod camera;
pub mod compressor;
pub mod launcher;
pub mod lift;

pub use camera::{CameraMount, CameraPosition, CameraPresets};
pub use compressor::Compressor;
pub use launcher::{Launcher, ValveState};
pub use lift::Lift;

/// A motor driven by a normalized power.
pub trait PowerOutput {
    /// Error returned when the write fails.
    type Error;

    /// Sets the output power in `[-1, 1]`.
    fn set_power(&mut self, power: f64) -> Result<(), Self::Error>;
}

/// A double-acting pneumatic valve.
pub trait Valve {
    /// Error returned when the write fails.
    type Error;

    /// Drives the valve to `state`.
    fn set_state(&mut self, state: ValveState) -> Result<(), Self::Error>;
}

/// A positional servo.
pub trait Servo {
    /// Error returned when the write fails.
    type Error;

    /// Moves to a normalized position in `[0, 1]` across the servo's travel.
    fn set_position(&mut self, position: f64) -> Result<(), Self::Error>;
}

/// An on/off relay.
pub trait Relay {
    /// Error returned when the write fails.
    type Error;

    /// Energizes or releases the relay.
    fn set_energized(&mut self, energized: bool) -> Result<(), Self::Error>;
}

/// A binary input such as a limit or pressure switch.
pub trait Switch {
    /// Error returned when the read fails.
    type Error;

    /// Returns `true` while the switch is closed.
    fn is_closed(&mut self) -> Result<bool, Self::Error>;
}
