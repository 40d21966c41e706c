//! Automatic alignment against a wall or goal using range sensors.
//!
//! [`Alignment`] turns a [`RangeSample`] into a pair of tank-drive speeds. Two sensor
//! layouts are supported:
//!
//! - [`AlignMode::Sides`]: a sensor on each side of the robot. Each side is driven by
//!   its own sensor, which squares the robot up as well as setting its distance.
//! - [`AlignMode::Center`]: one sensor in the middle. Both sides get the same speed.
//!
//! Alignment is complete once every tracked side is within tolerance.

use trackbot_sensing::RangeSample;

use crate::{
    ladder::{AlignTarget, LadderError, LadderOutcome, SpeedLadder},
    loops::{Aligner, Feedback},
};

/// Which range sensors drive the alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignMode {
    /// Left and right sensors each drive their own side.
    #[default]
    Sides,
    /// The center sensor drives both sides.
    Center,
}

/// Alignment tuning.
///
/// ```
/// use trackbot_control::{AlignConfig, AlignMode, AlignTarget};
///
/// const ALIGN: AlignConfig = AlignConfig::new()
///     .mode(AlignMode::Center)
///     .target(AlignTarget::new(96.0, 3.0));
///
/// assert!(ALIGN.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignConfig {
    /// Sensor layout.
    pub mode: AlignMode,
    /// Distance each tracked side settles at.
    pub target: AlignTarget,
    /// Distance-to-speed table.
    pub ladder: SpeedLadder,
}

impl AlignConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: AlignMode::Sides,
            target: AlignTarget::DEFAULT,
            ladder: SpeedLadder::DEFAULT,
        }
    }

    /// Sets the sensor layout.
    #[must_use]
    pub const fn mode(mut self, mode: AlignMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the target distance and tolerance.
    #[must_use]
    pub const fn target(mut self, target: AlignTarget) -> Self {
        self.target = target;
        self
    }

    /// Sets the speed ladder.
    #[must_use]
    pub const fn ladder(mut self, ladder: SpeedLadder) -> Self {
        self.ladder = ladder;
        self
    }

    /// Checks the ladder and target.
    ///
    /// # Errors
    ///
    /// Returns the first [`LadderError`] found.
    pub fn validate(&self) -> Result<(), LadderError> {
        self.ladder.validate()?;
        self.ladder.validate_target(self.target)
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one alignment cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignOutput {
    /// Outcome driving the left side.
    pub left: LadderOutcome,
    /// Outcome driving the right side.
    pub right: LadderOutcome,
}

impl AlignOutput {
    /// Signed left and right speeds.
    #[must_use]
    pub fn speeds(&self) -> (f64, f64) {
        (self.left.speed(), self.right.speed())
    }

    /// Returns `true` once every tracked side is aligned.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.left.is_aligned() && self.right.is_aligned()
    }
}

/// Per-side alignment controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    config: AlignConfig,
    left: Aligner,
    right: Aligner,
}

impl Alignment {
    /// Creates an alignment controller.
    #[must_use]
    pub const fn new(config: AlignConfig) -> Self {
        Self {
            config,
            left: Aligner::new(config.ladder, config.target.tolerance),
            right: Aligner::new(config.ladder, config.target.tolerance),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Computes this cycle's outcomes from filtered range readings.
    pub fn update(&mut self, sample: &RangeSample) -> AlignOutput {
        let setpoint = self.config.target.distance;

        match self.config.mode {
            AlignMode::Sides => AlignOutput {
                left: step(&mut self.left, sample.left, setpoint),
                right: step(&mut self.right, sample.right, setpoint),
            },
            AlignMode::Center => {
                let outcome = step(&mut self.left, sample.center, setpoint);
                self.right = self.left;
                AlignOutput {
                    left: outcome,
                    right: outcome,
                }
            }
        }
    }

    /// Clears per-side state before a new alignment run.
    pub const fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }
}

fn step(aligner: &mut Aligner, reading: Option<f64>, setpoint: f64) -> LadderOutcome {
    match reading {
        Some(distance) => aligner.update(distance, setpoint),
        None => aligner.no_reading(),
    }
}
