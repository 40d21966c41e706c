//! Tiered distance-to-speed table.
//!
//! A [`SpeedLadder`] maps a filtered range reading onto a drive speed by scanning an
//! ordered list of [`Tier`]s from the farthest threshold down. The first tier whose
//! threshold the reading exceeds wins. Readings nearer than every tier but still beyond
//! the target use the slow speed, and readings inside the target use the creep speed in
//! reverse.

use thiserror::Error;

/// Readings beyond this distance drive at [`FAST_AUTO_SPEED`].
pub const FAST_PROXIMITY: f64 = 150.0;
/// Readings beyond this distance drive at [`MEDIUM_FAST_AUTO_SPEED`].
pub const MEDIUM_FAST_PROXIMITY: f64 = 120.0;
/// Readings beyond this distance drive at [`MEDIUM_AUTO_SPEED`].
pub const MEDIUM_PROXIMITY: f64 = 114.0;

/// Fastest speed the ladder will ever command.
pub const FAST_AUTO_SPEED: f64 = 0.7;
/// Speed of the [`MEDIUM_FAST_PROXIMITY`] tier.
pub const MEDIUM_FAST_AUTO_SPEED: f64 = 0.5;
/// Speed of the [`MEDIUM_PROXIMITY`] tier.
pub const MEDIUM_AUTO_SPEED: f64 = 0.3;
/// Speed used between the target and the nearest tier.
pub const SLOW_AUTO_SPEED: f64 = 0.2;
/// Speed used to back away when the reading is inside the target.
pub const CREEP_AUTO_SPEED: f64 = 0.15;

/// Distance the robot aligns to by default.
pub const TARGET_DISTANCE: f64 = 108.0;
/// Default alignment tolerance.
pub const TARGET_TOLERANCE: f64 = 2.0;

/// Default tier table, farthest first.
pub const DEFAULT_TIERS: [Tier; 3] = [
    Tier::new(FAST_PROXIMITY, FAST_AUTO_SPEED),
    Tier::new(MEDIUM_FAST_PROXIMITY, MEDIUM_FAST_AUTO_SPEED),
    Tier::new(MEDIUM_PROXIMITY, MEDIUM_AUTO_SPEED),
];

/// A single rung of a [`SpeedLadder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Readings strictly greater than this select the tier.
    pub threshold: f64,
    /// Speed magnitude commanded by the tier.
    pub speed: f64,
}

impl Tier {
    /// Creates a tier.
    #[must_use]
    pub const fn new(threshold: f64, speed: f64) -> Self {
        Self { threshold, speed }
    }
}

/// Distance a side should settle at, and how close counts as settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignTarget {
    /// Desired range reading.
    pub distance: f64,
    /// Absolute error strictly below which a side counts as aligned.
    pub tolerance: f64,
}

impl AlignTarget {
    /// Default target of [`TARGET_DISTANCE`] ± [`TARGET_TOLERANCE`].
    pub const DEFAULT: Self = Self::new(TARGET_DISTANCE, TARGET_TOLERANCE);

    /// Creates a target.
    #[must_use]
    pub const fn new(distance: f64, tolerance: f64) -> Self {
        Self {
            distance,
            tolerance,
        }
    }

    /// Returns `true` if `measured` is within tolerance of the target.
    #[must_use]
    pub fn is_within(&self, measured: f64) -> bool {
        (measured - self.distance).abs() < self.tolerance
    }
}

impl Default for AlignTarget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of evaluating one reading against a [`SpeedLadder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LadderOutcome {
    /// Reading is within tolerance of the target.
    Aligned,
    /// Reading is beyond the target; drive toward it.
    Approach {
        /// Index of the matched tier, or `None` for the slow band below every tier.
        tier: Option<usize>,
        /// Speed magnitude.
        speed: f64,
    },
    /// Reading is inside the target; back away at creep speed.
    Retreat {
        /// Speed magnitude.
        speed: f64,
    },
    /// No filtered reading has been accepted yet.
    NoReading,
    /// The reading fell through every branch of the ladder.
    ///
    /// This happens for a reading exactly on the target when the tolerance is zero, and
    /// for NaN readings. The side is stopped rather than guessed at.
    Problem,
}

impl LadderOutcome {
    /// Signed speed for this outcome. Positive drives toward the target.
    #[must_use]
    pub fn speed(&self) -> f64 {
        match *self {
            Self::Approach { speed, .. } => speed,
            Self::Retreat { speed } => -speed,
            Self::Aligned | Self::NoReading | Self::Problem => 0.0,
        }
    }

    /// Returns `true` for [`LadderOutcome::Aligned`].
    #[must_use]
    pub const fn is_aligned(&self) -> bool {
        matches!(self, Self::Aligned)
    }
}

/// Invalid ladder or target configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LadderError {
    /// A threshold is NaN or infinite.
    #[error("tier {index} threshold {threshold} is not finite")]
    NonFiniteThreshold {
        /// Offending tier.
        index: usize,
        /// Offending threshold.
        threshold: f64,
    },
    /// Thresholds are not strictly descending.
    #[error("tier {index} threshold {threshold} is not below the tier before it")]
    ThresholdOrder {
        /// Offending tier.
        index: usize,
        /// Offending threshold.
        threshold: f64,
    },
    /// A nearer tier is faster than a farther one.
    #[error("speed {speed} at rung {index} is faster than a farther rung")]
    SpeedOrder {
        /// Offending rung; the slow band counts as the rung after the last tier.
        index: usize,
        /// Offending speed.
        speed: f64,
    },
    /// A speed is outside of `[0, 1]`.
    #[error("speed {speed} is outside of [0, 1]")]
    SpeedRange {
        /// Offending speed.
        speed: f64,
    },
    /// The creep speed is faster than the fastest tier.
    #[error("creep speed {creep} exceeds the maximum ladder speed {max}")]
    CreepAboveCap {
        /// Configured creep speed.
        creep: f64,
        /// Fastest ladder speed.
        max: f64,
    },
    /// The target tolerance is negative or not finite.
    #[error("tolerance {tolerance} must be finite and non-negative")]
    Tolerance {
        /// Offending tolerance.
        tolerance: f64,
    },
    /// The target sits at or beyond the nearest tier threshold.
    #[error("target {target} is not nearer than the lowest tier threshold {threshold}")]
    TargetBeyondTier {
        /// Target distance.
        target: f64,
        /// Lowest tier threshold.
        threshold: f64,
    },
}

/// Ordered distance-to-speed table evaluated with a first-match scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLadder {
    tiers: &'static [Tier],
    slow_speed: f64,
    creep_speed: f64,
}

impl SpeedLadder {
    /// Ladder built from [`DEFAULT_TIERS`], [`SLOW_AUTO_SPEED`] and [`CREEP_AUTO_SPEED`].
    pub const DEFAULT: Self = Self {
        tiers: &DEFAULT_TIERS,
        slow_speed: SLOW_AUTO_SPEED,
        creep_speed: CREEP_AUTO_SPEED,
    };

    /// Creates a ladder, checking that it is well formed.
    ///
    /// # Errors
    ///
    /// Returns a [`LadderError`] if thresholds are not finite and strictly descending,
    /// if a nearer rung is faster than a farther one, if any speed leaves `[0, 1]`, or
    /// if the creep speed exceeds the fastest rung.
    pub fn new(
        tiers: &'static [Tier],
        slow_speed: f64,
        creep_speed: f64,
    ) -> Result<Self, LadderError> {
        let ladder = Self {
            tiers,
            slow_speed,
            creep_speed,
        };
        ladder.validate()?;
        Ok(ladder)
    }

    /// Checks the invariants described on [`SpeedLadder::new`].
    ///
    /// # Errors
    ///
    /// See [`SpeedLadder::new`].
    pub fn validate(&self) -> Result<(), LadderError> {
        let mut previous: Option<Tier> = None;

        for (index, tier) in self.tiers.iter().enumerate() {
            if !tier.threshold.is_finite() {
                return Err(LadderError::NonFiniteThreshold {
                    index,
                    threshold: tier.threshold,
                });
            }
            check_speed(tier.speed)?;

            if let Some(previous) = previous {
                if tier.threshold >= previous.threshold {
                    return Err(LadderError::ThresholdOrder {
                        index,
                        threshold: tier.threshold,
                    });
                }
                if tier.speed > previous.speed {
                    return Err(LadderError::SpeedOrder {
                        index,
                        speed: tier.speed,
                    });
                }
            }
            previous = Some(*tier);
        }

        check_speed(self.slow_speed)?;
        if previous.is_some_and(|last| self.slow_speed > last.speed) {
            return Err(LadderError::SpeedOrder {
                index: self.tiers.len(),
                speed: self.slow_speed,
            });
        }

        check_speed(self.creep_speed)?;
        let max = self.max_speed();
        if self.creep_speed > max {
            return Err(LadderError::CreepAboveCap {
                creep: self.creep_speed,
                max,
            });
        }

        Ok(())
    }

    /// Checks that `target` can be reached by this ladder.
    ///
    /// # Errors
    ///
    /// Returns [`LadderError::Tolerance`] for a negative or non-finite tolerance and
    /// [`LadderError::TargetBeyondTier`] when the target is not nearer than every tier.
    pub fn validate_target(&self, target: AlignTarget) -> Result<(), LadderError> {
        if !target.tolerance.is_finite() || target.tolerance < 0.0 {
            return Err(LadderError::Tolerance {
                tolerance: target.tolerance,
            });
        }
        if let Some(lowest) = self.tiers.last()
            && target.distance >= lowest.threshold
        {
            return Err(LadderError::TargetBeyondTier {
                target: target.distance,
                threshold: lowest.threshold,
            });
        }
        Ok(())
    }

    /// Fastest speed this ladder can command.
    #[must_use]
    pub fn max_speed(&self) -> f64 {
        self.tiers.first().map_or(self.slow_speed, |tier| tier.speed)
    }

    /// Maps a filtered reading onto a drive outcome.
    #[must_use]
    pub fn evaluate(&self, distance: f64, target: AlignTarget) -> LadderOutcome {
        if target.is_within(distance) {
            return LadderOutcome::Aligned;
        }

        if distance > target.distance {
            return self
                .tiers
                .iter()
                .position(|tier| distance > tier.threshold)
                .map_or(
                    LadderOutcome::Approach {
                        tier: None,
                        speed: self.slow_speed,
                    },
                    |index| LadderOutcome::Approach {
                        tier: Some(index),
                        speed: self.tiers[index].speed,
                    },
                );
        }

        if distance < target.distance {
            return LadderOutcome::Retreat {
                speed: self.creep_speed,
            };
        }

        LadderOutcome::Problem
    }
}

impl Default for SpeedLadder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_speed(speed: f64) -> Result<(), LadderError> {
    if (0.0..=1.0).contains(&speed) {
        Ok(())
    } else {
        Err(LadderError::SpeedRange { speed })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TARGET: AlignTarget = AlignTarget::DEFAULT;

    #[test]
    fn default_ladder_is_valid() {
        assert_eq!(SpeedLadder::DEFAULT.validate(), Ok(()));
        assert_eq!(SpeedLadder::DEFAULT.validate_target(TARGET), Ok(()));
    }

    #[test]
    fn medium_fast_tier_at_130() {
        let outcome = SpeedLadder::DEFAULT.evaluate(130.0, TARGET);
        assert_eq!(
            outcome,
            LadderOutcome::Approach {
                tier: Some(1),
                speed: MEDIUM_FAST_AUTO_SPEED
            }
        );
        assert_relative_eq!(outcome.speed(), 0.5);
    }

    #[test]
    fn on_target_is_aligned_and_stopped() {
        let outcome = SpeedLadder::DEFAULT.evaluate(108.0, TARGET);
        assert!(outcome.is_aligned());
        assert_relative_eq!(outcome.speed(), 0.0);
    }

    #[test]
    fn tolerance_is_strict() {
        let ladder = SpeedLadder::DEFAULT;
        assert!(ladder.evaluate(109.5, TARGET).is_aligned());
        assert!(ladder.evaluate(106.5, TARGET).is_aligned());
        assert_eq!(
            ladder.evaluate(110.0, TARGET),
            LadderOutcome::Approach {
                tier: None,
                speed: SLOW_AUTO_SPEED
            }
        );
        assert_eq!(
            ladder.evaluate(106.0, TARGET),
            LadderOutcome::Retreat {
                speed: CREEP_AUTO_SPEED
            }
        );
    }

    #[test]
    fn inside_target_backs_away() {
        let outcome = SpeedLadder::DEFAULT.evaluate(40.0, TARGET);
        assert_relative_eq!(outcome.speed(), -CREEP_AUTO_SPEED);
        assert!(!outcome.is_aligned());
    }

    #[test]
    fn thresholds_are_exclusive() {
        let ladder = SpeedLadder::DEFAULT;
        assert_relative_eq!(ladder.evaluate(150.0, TARGET).speed(), MEDIUM_FAST_AUTO_SPEED);
        assert_relative_eq!(ladder.evaluate(150.5, TARGET).speed(), FAST_AUTO_SPEED);
        assert_relative_eq!(ladder.evaluate(120.0, TARGET).speed(), MEDIUM_AUTO_SPEED);
        assert_relative_eq!(ladder.evaluate(114.0, TARGET).speed(), SLOW_AUTO_SPEED);
    }

    #[test]
    fn speed_grows_with_distance_and_is_capped() {
        let ladder = SpeedLadder::DEFAULT;
        let mut previous = 0.0;

        for step in 0..400 {
            let distance = TARGET.distance + TARGET.tolerance + f64::from(step) * 0.5;
            let speed = ladder.evaluate(distance, TARGET).speed();

            assert!(speed >= previous, "speed fell at {distance}");
            assert!(speed <= FAST_AUTO_SPEED);
            previous = speed;
        }
        assert_relative_eq!(previous, FAST_AUTO_SPEED);
    }

    #[test]
    fn exact_target_with_zero_tolerance_falls_through() {
        let target = AlignTarget::new(TARGET_DISTANCE, 0.0);
        let outcome = SpeedLadder::DEFAULT.evaluate(TARGET_DISTANCE, target);
        assert_eq!(outcome, LadderOutcome::Problem);
        assert_relative_eq!(outcome.speed(), 0.0);
    }

    #[test]
    fn nan_reading_falls_through() {
        assert_eq!(
            SpeedLadder::DEFAULT.evaluate(f64::NAN, TARGET),
            LadderOutcome::Problem
        );
    }

    #[test]
    fn rejects_unordered_thresholds() {
        static TIERS: [Tier; 2] = [Tier::new(120.0, 0.5), Tier::new(150.0, 0.4)];
        assert_eq!(
            SpeedLadder::new(&TIERS, 0.2, 0.1),
            Err(LadderError::ThresholdOrder {
                index: 1,
                threshold: 150.0
            })
        );
    }

    #[test]
    fn rejects_nearer_tier_being_faster() {
        static TIERS: [Tier; 2] = [Tier::new(150.0, 0.3), Tier::new(120.0, 0.6)];
        assert!(matches!(
            SpeedLadder::new(&TIERS, 0.2, 0.1),
            Err(LadderError::SpeedOrder { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_slow_band_faster_than_last_tier() {
        static TIERS: [Tier; 1] = [Tier::new(150.0, 0.3)];
        assert!(matches!(
            SpeedLadder::new(&TIERS, 0.4, 0.1),
            Err(LadderError::SpeedOrder { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_creep_above_cap() {
        static TIERS: [Tier; 1] = [Tier::new(150.0, 0.3)];
        assert!(matches!(
            SpeedLadder::new(&TIERS, 0.2, 0.5),
            Err(LadderError::CreepAboveCap { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_speed() {
        static TIERS: [Tier; 1] = [Tier::new(150.0, 1.5)];
        assert_eq!(
            SpeedLadder::new(&TIERS, 0.2, 0.1),
            Err(LadderError::SpeedRange { speed: 1.5 })
        );
    }

    #[test]
    fn rejects_target_beyond_lowest_tier() {
        let target = AlignTarget::new(130.0, 2.0);
        assert!(matches!(
            SpeedLadder::DEFAULT.validate_target(target),
            Err(LadderError::TargetBeyondTier { .. })
        ));
        assert!(matches!(
            SpeedLadder::DEFAULT.validate_target(AlignTarget::new(100.0, -1.0)),
            Err(LadderError::Tolerance { .. })
        ));
    }

    #[test]
    fn empty_ladder_uses_slow_band() {
        let ladder = SpeedLadder::new(&[], 0.2, 0.1).expect("valid ladder");
        assert_relative_eq!(ladder.max_speed(), 0.2);
        assert_relative_eq!(ladder.evaluate(500.0, TARGET).speed(), 0.2);
    }
}
