//! Drivetrain models.
//!
//! A model is anything that can turn left/right side powers into motion. Hardware
//! implementations live in `trackbot-devices`.

/// A collection of motors driving a wheeled or tracked robot.
pub trait DrivetrainModel {
    /// Error type returned when the robot fails to move.
    type Error;
}

/// A drivetrain model that supports "tank drive" (left/right) inverse kinematics.
pub trait Tank: DrivetrainModel {
    /// Drives the robot using left and right side powers in `[-1, 1]`.
    fn drive_tank(&mut self, left: f64, right: f64) -> Result<(), Self::Error>;
}
