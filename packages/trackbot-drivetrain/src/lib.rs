//! Drivetrain models and commands.
//!
//! [`Drivetrain`] wraps a [`Tank`] model and feeds it clamped [`TankCommand`]s.

pub mod model;

use model::Tank;
use trackbot_math::clamp_magnitude;

/// Left and right side powers, each clamped to `[-1, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TankCommand {
    left: f64,
    right: f64,
}

impl TankCommand {
    /// Both sides stopped.
    pub const STOP: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    /// Creates a command, clamping each side into `[-1, 1]`.
    ///
    /// ```
    /// use trackbot_drivetrain::TankCommand;
    ///
    /// let command = TankCommand::new(1.4, -0.25);
    /// assert_eq!((command.left(), command.right()), (1.0, -0.25));
    /// ```
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left: clamp_magnitude(left, 1.0),
            right: clamp_magnitude(right, 1.0),
        }
    }

    /// Same power on both sides.
    #[must_use]
    pub fn uniform(power: f64) -> Self {
        Self::new(power, power)
    }

    /// Left side power.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// Right side power.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// Both sides negated, for driving with the back of the robot as the front.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            left: -self.left,
            right: -self.right,
        }
    }
}

/// A drivetrain model driven by [`TankCommand`]s.
#[derive(Debug)]
pub struct Drivetrain<M: Tank> {
    /// Motor collection.
    pub model: M,
}

impl<M: Tank> Drivetrain<M> {
    /// Wraps a model.
    pub const fn new(model: M) -> Self {
        Self { model }
    }

    /// Writes a command to the model.
    ///
    /// # Errors
    ///
    /// Returns the model's error if any motor rejects the write.
    pub fn drive(&mut self, command: TankCommand) -> Result<(), M::Error> {
        self.model.drive_tank(command.left, command.right)
    }

    /// Stops both sides.
    ///
    /// # Errors
    ///
    /// Returns the model's error if any motor rejects the write.
    pub fn stop(&mut self) -> Result<(), M::Error> {
        self.drive(TankCommand::STOP)
    }
}
