use trackbot_control::Toggle;
use trackbot_drivetrain::TankCommand;
use trackbot_mechanisms::CameraPosition;
use trackbot_sensing::RangeSample;

use crate::{commands::DriveMode, config::TeleopConfig};

/// Everything the control loop remembers between cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RobotState {
    /// Cycles run since the loop was created.
    pub tick: u64,
    /// Filtered range readings from the latest cycle.
    pub ranges: RangeSample,
    /// Latest drivetrain command.
    pub drive: TankCommand,
    /// Drive mode chosen in the latest cycle.
    pub mode: DriveMode,
    /// `true` while automatic alignment is running.
    pub aligning: bool,
    /// Left side was within tolerance on the latest alignment cycle.
    pub left_aligned: bool,
    /// Right side was within tolerance on the latest alignment cycle.
    pub right_aligned: bool,
    /// Pressure switch reading from the latest cycle.
    pub at_pressure: bool,
    /// Whether the compressor relay was commanded on in the latest cycle.
    pub compressor_running: bool,
    pub(crate) align_held: bool,
    pub(crate) reversed: Toggle,
    pub(crate) camera_high: Toggle,
    pub(crate) compressor_enabled: Toggle,
}

impl RobotState {
    /// Startup state for `config`.
    #[must_use]
    pub const fn new(config: &TeleopConfig) -> Self {
        Self {
            tick: 0,
            ranges: RangeSample {
                left: None,
                center: None,
                right: None,
            },
            drive: TankCommand::STOP,
            mode: DriveMode::Manual,
            aligning: false,
            left_aligned: false,
            right_aligned: false,
            at_pressure: false,
            compressor_running: false,
            align_held: false,
            reversed: Toggle::new(false, config.reverse_cooldown),
            camera_high: Toggle::new(
                matches!(config.initial_camera, CameraPosition::High),
                config.camera_cooldown,
            ),
            compressor_enabled: Toggle::new(config.compressor_enabled, config.compressor_cooldown),
        }
    }

    /// `true` while manual and creep driving are reversed.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed.get()
    }

    /// Current camera preset.
    #[must_use]
    pub const fn camera(&self) -> CameraPosition {
        if self.camera_high.get() {
            CameraPosition::High
        } else {
            CameraPosition::Low
        }
    }

    /// `true` while the driver has the compressor enabled.
    #[must_use]
    pub const fn is_compressor_enabled(&self) -> bool {
        self.compressor_enabled.get()
    }
}
