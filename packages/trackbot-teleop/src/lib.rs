//! Driver control for trackbot.
//!
//! [`Teleop`] owns all robot state and runs one pass of the driver-control loop per
//! call to [`Teleop::step`]. It never touches hardware: inputs are sampled by the caller
//! into [`DriverInputs`] and [`SensorInputs`], and the returned [`Commands`] are written
//! out by the caller. [`AutoAlign`] reuses the alignment policy for the autonomous
//! period.

mod auto;
mod commands;
mod config;
mod inputs;
mod state;
mod status;
mod teleop;

pub use auto::AutoAlign;
pub use commands::{Commands, DriveMode};
pub use config::{DriveScheme, TeleopConfig};
pub use inputs::{Buttons, DriverInputs, SensorInputs};
pub use state::RobotState;
pub use status::render_status;
pub use teleop::Teleop;
