use core::fmt;

use trackbot_drivetrain::TankCommand;
use trackbot_mechanisms::{CameraPosition, ValveState};

/// Which drive behaviour produced a cycle's [`TankCommand`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    /// Sticks drive the robot.
    #[default]
    Manual,
    /// Fixed slow forward drive.
    Creep,
    /// Range sensors drive the robot.
    Align,
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Manual => "Manual",
            Self::Creep => "Creep",
            Self::Align => "Align",
        })
    }
}

/// Actuator outputs for one cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Commands {
    /// Drive mode chosen this cycle.
    pub mode: DriveMode,
    /// Drivetrain powers.
    pub drive: TankCommand,
    /// Lift power.
    pub lift: f64,
    /// Launcher valve state.
    pub launcher: ValveState,
    /// Camera preset.
    pub camera: CameraPosition,
    /// Whether the compressor relay should be energized.
    pub compressor: bool,
}

impl Commands {
    /// Everything stopped, camera at `camera`.
    #[must_use]
    pub fn idle(camera: CameraPosition) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }
}
