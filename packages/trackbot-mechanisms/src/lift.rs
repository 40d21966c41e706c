//! Lift arm.

use trackbot_math::clamp_magnitude;

use crate::PowerOutput;

/// Default lift power.
pub const LIFT_SPEED: f64 = 0.25;

/// Lift motor.
#[derive(Debug)]
pub struct Lift<M: PowerOutput> {
    motor: M,
    power: f64,
}

impl<M: PowerOutput> Lift<M> {
    /// Wraps a lift motor.
    pub const fn new(motor: M) -> Self {
        Self { motor, power: 0.0 }
    }

    /// Drives the lift, clamping `power` into `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the motor's error if the write fails.
    pub fn set(&mut self, power: f64) -> Result<(), M::Error> {
        self.power = clamp_magnitude(power, 1.0);
        self.motor.set_power(self.power)
    }

    /// Last commanded power.
    pub const fn power(&self) -> f64 {
        self.power
    }
}

/// Lift power for the raise and lower buttons. Lowering wins when both are held.
///
/// ```
/// use trackbot_mechanisms::lift::power_for;
///
/// assert_eq!(power_for(true, true, 0.25), -0.25);
/// assert_eq!(power_for(true, false, 0.25), 0.25);
/// assert_eq!(power_for(false, false, 0.25), 0.0);
/// ```
#[must_use]
pub fn power_for(raise: bool, lower: bool, speed: f64) -> f64 {
    if lower {
        -speed
    } else if raise {
        speed
    } else {
        0.0
    }
}
