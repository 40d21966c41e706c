//! vexide bindings for trackbot.
//!
//! Every hardware seam in the trackbot crates is a small trait. This crate implements
//! those traits on V5 brain devices and bundles them into a [`Hardware`] struct that
//! the robot program samples from and writes to once per cycle.

mod clock;
mod controller;
mod drivetrain;
mod hardware;
pub mod logger;
mod mechanisms;
mod panel;
mod sensors;

pub use clock::UptimeClock;
pub use controller::{ButtonMap, ControllerButton, sample_driver};
pub use drivetrain::Differential;
pub use hardware::Hardware;
pub use mechanisms::{CameraServo, DoubleSolenoid, LiftMotor, PressureSwitch, RelayOutput};
pub use panel::BrainPanel;
pub use sensors::{AnalogRange, Sonar};
