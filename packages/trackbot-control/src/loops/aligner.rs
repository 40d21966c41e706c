use log::warn;

use super::Feedback;
use crate::ladder::{AlignTarget, LadderOutcome, SpeedLadder};

/// Drives one side of the robot toward a target range using a [`SpeedLadder`].
///
/// This is a proportional controller in the loosest sense: the ladder picks a fixed
/// speed per distance band rather than scaling with error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aligner {
    ladder: SpeedLadder,
    tolerance: f64,
    last: LadderOutcome,
}

impl Aligner {
    /// Creates an aligner that settles within `tolerance` of its setpoint.
    #[must_use]
    pub const fn new(ladder: SpeedLadder, tolerance: f64) -> Self {
        Self {
            ladder,
            tolerance,
            last: LadderOutcome::NoReading,
        }
    }

    /// Outcome of the most recent update.
    #[must_use]
    pub const fn last_outcome(&self) -> LadderOutcome {
        self.last
    }

    /// Records that no filtered reading is available this cycle.
    pub const fn no_reading(&mut self) -> LadderOutcome {
        self.last = LadderOutcome::NoReading;
        self.last
    }

    /// Forgets the previous outcome.
    pub const fn reset(&mut self) {
        self.last = LadderOutcome::NoReading;
    }
}

impl Feedback for Aligner {
    type State = f64;
    type Signal = LadderOutcome;

    fn update(&mut self, measurement: f64, setpoint: f64) -> LadderOutcome {
        let outcome = self
            .ladder
            .evaluate(measurement, AlignTarget::new(setpoint, self.tolerance));

        if outcome == LadderOutcome::Problem {
            warn!("alignment ladder fell through at distance {measurement} (target {setpoint})");
        }

        self.last = outcome;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::ladder::{CREEP_AUTO_SPEED, FAST_AUTO_SPEED, TARGET_DISTANCE, TARGET_TOLERANCE};

    #[test]
    fn tracks_last_outcome() {
        let mut aligner = Aligner::new(SpeedLadder::DEFAULT, TARGET_TOLERANCE);
        assert_eq!(aligner.last_outcome(), LadderOutcome::NoReading);

        let outcome = aligner.update(300.0, TARGET_DISTANCE);
        assert_relative_eq!(outcome.speed(), FAST_AUTO_SPEED);
        assert_eq!(aligner.last_outcome(), outcome);

        aligner.reset();
        assert_eq!(aligner.last_outcome(), LadderOutcome::NoReading);
    }

    #[test]
    fn retreats_when_too_close() {
        let mut aligner = Aligner::new(SpeedLadder::DEFAULT, TARGET_TOLERANCE);
        assert_relative_eq!(
            aligner.update(90.0, TARGET_DISTANCE).speed(),
            -CREEP_AUTO_SPEED
        );
    }

    #[test]
    fn zero_tolerance_problem_stops_side() {
        let mut aligner = Aligner::new(SpeedLadder::DEFAULT, 0.0);
        let outcome = aligner.update(TARGET_DISTANCE, TARGET_DISTANCE);
        assert_eq!(outcome, LadderOutcome::Problem);
        assert_relative_eq!(outcome.speed(), 0.0);
    }
}
