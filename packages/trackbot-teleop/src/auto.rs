use core::time::Duration;

use log::{info, warn};
use trackbot_control::{AlignConfig, Alignment};
use trackbot_drivetrain::TankCommand;
use trackbot_sensing::RangeSample;

/// Autonomous alignment routine.
///
/// Drives with the alignment policy until every tracked side is within tolerance or the
/// timeout expires, then commands a stop on every later cycle.
#[derive(Debug, Clone)]
pub struct AutoAlign {
    alignment: Alignment,
    timeout: Option<Duration>,
    started: Option<Duration>,
    finished: bool,
}

impl AutoAlign {
    /// Creates the routine without a timeout.
    #[must_use]
    pub const fn new(config: AlignConfig) -> Self {
        Self {
            alignment: Alignment::new(config),
            timeout: None,
            started: None,
            finished: false,
        }
    }

    /// Gives up once `timeout` has passed since the first step.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns `true` once the routine has stopped driving.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Runs one cycle.
    pub fn step(&mut self, ranges: &RangeSample, now: Duration) -> TankCommand {
        if self.finished {
            return TankCommand::STOP;
        }

        let started = *self.started.get_or_insert(now);
        if self
            .timeout
            .is_some_and(|timeout| now.saturating_sub(started) > timeout)
        {
            warn!("autonomous alignment timed out");
            self.finished = true;
            return TankCommand::STOP;
        }

        let output = self.alignment.update(ranges);
        if output.is_complete() {
            info!("autonomous alignment complete");
            self.finished = true;
        }

        let (left, right) = output.speeds();
        TankCommand::new(left, right)
    }
}
