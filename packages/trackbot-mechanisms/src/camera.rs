//! Pivoting camera mount with two preset angles.

use crate::Servo;

/// Which preset the camera is pointed at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CameraPosition {
    /// Pointed down toward the floor in front of the robot.
    #[default]
    Low,
    /// Pointed up toward the goal.
    High,
}

/// Normalized servo positions for each [`CameraPosition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPresets {
    /// Servo position for [`CameraPosition::Low`].
    pub low: f64,
    /// Servo position for [`CameraPosition::High`].
    pub high: f64,
}

impl CameraPresets {
    /// Presets used on the competition robot.
    pub const DEFAULT: Self = Self {
        low: 0.7,
        high: 0.85,
    };

    /// Servo position for `position`.
    #[must_use]
    pub const fn position(&self, position: CameraPosition) -> f64 {
        match position {
            CameraPosition::Low => self.low,
            CameraPosition::High => self.high,
        }
    }
}

impl Default for CameraPresets {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Camera servo.
#[derive(Debug)]
pub struct CameraMount<S: Servo> {
    servo: S,
    presets: CameraPresets,
    position: Option<CameraPosition>,
}

impl<S: Servo> CameraMount<S> {
    /// Wraps a servo.
    pub const fn new(servo: S, presets: CameraPresets) -> Self {
        Self {
            servo,
            presets,
            position: None,
        }
    }

    /// Points the camera at a preset. The servo is only written when the preset changes.
    ///
    /// # Errors
    ///
    /// Returns the servo's error if the write fails. The position is then retried on
    /// the next call.
    pub fn set(&mut self, position: CameraPosition) -> Result<(), S::Error> {
        if self.position == Some(position) {
            return Ok(());
        }

        self.servo.set_position(self.presets.position(position))?;
        self.position = Some(position);
        Ok(())
    }

    /// The preset the servo was last moved to.
    pub const fn position(&self) -> Option<CameraPosition> {
        self.position
    }
}
