//! Relay-driven air compressor gated by a pressure switch.

use crate::{Relay, Switch};

/// Returns `true` if the compressor relay should be energized.
///
/// The compressor runs while the driver has it enabled and the tanks are below the
/// pressure switch's cut-out.
///
/// ```
/// use trackbot_mechanisms::compressor::should_run;
///
/// assert!(should_run(true, false));
/// assert!(!should_run(true, true));
/// assert!(!should_run(false, false));
/// ```
#[must_use]
pub const fn should_run(enabled: bool, at_pressure: bool) -> bool {
    enabled && !at_pressure
}

/// Compressor relay and its pressure switch.
#[derive(Debug)]
pub struct Compressor<R: Relay, P: Switch> {
    relay: R,
    pressure_switch: P,
    running: bool,
}

impl<R: Relay, P: Switch> Compressor<R, P> {
    /// Wraps a relay and pressure switch. The relay is assumed released.
    pub const fn new(relay: R, pressure_switch: P) -> Self {
        Self {
            relay,
            pressure_switch,
            running: false,
        }
    }

    /// Returns `true` if the pressure switch reports full pressure.
    ///
    /// # Errors
    ///
    /// Returns the switch's error if it cannot be read.
    pub fn at_pressure(&mut self) -> Result<bool, P::Error> {
        self.pressure_switch.is_closed()
    }

    /// Energizes or releases the relay.
    ///
    /// # Errors
    ///
    /// Returns the relay's error if the write fails.
    pub fn run(&mut self, running: bool) -> Result<(), R::Error> {
        self.relay.set_energized(running)?;
        self.running = running;
        Ok(())
    }

    /// Last state successfully written to the relay.
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
