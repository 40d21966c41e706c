use core::time::Duration;

use trackbot_control::AlignConfig;
use trackbot_mechanisms::{CameraPosition, lift::LIFT_SPEED};

/// How the sticks map onto the drivetrain in manual mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DriveScheme {
    /// Left stick drives the left side, right stick drives the right side.
    #[default]
    Tank,
    /// Left stick vertical is throttle, left stick horizontal is steering.
    Arcade,
}

/// Driver control tuning.
///
/// ```
/// use core::time::Duration;
/// use trackbot_teleop::{DriveScheme, TeleopConfig};
///
/// const TELEOP: TeleopConfig = TeleopConfig::new()
///     .scheme(DriveScheme::Arcade)
///     .creep_speed(0.2)
///     .camera_cooldown(Duration::from_millis(400));
///
/// assert_eq!(TELEOP.diagnostic_interval, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleopConfig {
    /// Manual stick mapping.
    pub scheme: DriveScheme,
    /// Lift power while a lift button is held.
    pub lift_speed: f64,
    /// Forward power in creep mode.
    pub creep_speed: f64,
    /// Minimum time between drive reversal toggles.
    pub reverse_cooldown: Duration,
    /// Minimum time between compressor toggles.
    pub compressor_cooldown: Duration,
    /// Minimum time between camera toggles.
    pub camera_cooldown: Duration,
    /// Cycles between diagnostic log lines. Zero disables them.
    pub diagnostic_interval: u64,
    /// Camera preset at startup.
    pub initial_camera: CameraPosition,
    /// Whether the compressor is enabled at startup.
    pub compressor_enabled: bool,
    /// Automatic alignment tuning.
    pub align: AlignConfig,
}

impl TeleopConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scheme: DriveScheme::Tank,
            lift_speed: LIFT_SPEED,
            creep_speed: 0.3,
            reverse_cooldown: Duration::from_millis(250),
            compressor_cooldown: Duration::from_millis(250),
            camera_cooldown: Duration::from_millis(500),
            diagnostic_interval: 100,
            initial_camera: CameraPosition::Low,
            compressor_enabled: false,
            align: AlignConfig::new(),
        }
    }

    /// Sets the manual stick mapping.
    #[must_use]
    pub const fn scheme(mut self, scheme: DriveScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the lift power.
    #[must_use]
    pub const fn lift_speed(mut self, speed: f64) -> Self {
        self.lift_speed = speed;
        self
    }

    /// Sets the creep mode power.
    #[must_use]
    pub const fn creep_speed(mut self, speed: f64) -> Self {
        self.creep_speed = speed;
        self
    }

    /// Sets the drive reversal cooldown.
    #[must_use]
    pub const fn reverse_cooldown(mut self, cooldown: Duration) -> Self {
        self.reverse_cooldown = cooldown;
        self
    }

    /// Sets the compressor toggle cooldown.
    #[must_use]
    pub const fn compressor_cooldown(mut self, cooldown: Duration) -> Self {
        self.compressor_cooldown = cooldown;
        self
    }

    /// Sets the camera toggle cooldown.
    #[must_use]
    pub const fn camera_cooldown(mut self, cooldown: Duration) -> Self {
        self.camera_cooldown = cooldown;
        self
    }

    /// Sets the number of cycles between diagnostic log lines.
    #[must_use]
    pub const fn diagnostic_interval(mut self, cycles: u64) -> Self {
        self.diagnostic_interval = cycles;
        self
    }

    /// Sets the camera preset at startup.
    #[must_use]
    pub const fn initial_camera(mut self, position: CameraPosition) -> Self {
        self.initial_camera = position;
        self
    }

    /// Sets whether the compressor starts enabled.
    #[must_use]
    pub const fn compressor_enabled(mut self, enabled: bool) -> Self {
        self.compressor_enabled = enabled;
        self
    }

    /// Sets the alignment tuning.
    #[must_use]
    pub const fn align(mut self, align: AlignConfig) -> Self {
        self.align = align;
        self
    }
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self::new()
    }
}
