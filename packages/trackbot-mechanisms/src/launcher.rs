//! Pneumatic launcher.
//!
//! The launcher is a pair of double-acting cylinders, one per side, always driven to the
//! same state.

use crate::Valve;

/// Commanded state of a double-acting valve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ValveState {
    /// Extend.
    Forward,
    /// Retract.
    Reverse,
    /// Vent both ports.
    #[default]
    Off,
}

impl ValveState {
    /// Valve state for the fire and retract buttons. Firing wins when both are held.
    ///
    /// ```
    /// use trackbot_mechanisms::ValveState;
    ///
    /// assert_eq!(ValveState::from_buttons(true, true), ValveState::Forward);
    /// assert_eq!(ValveState::from_buttons(false, true), ValveState::Reverse);
    /// assert_eq!(ValveState::from_buttons(false, false), ValveState::Off);
    /// ```
    #[must_use]
    pub const fn from_buttons(fire: bool, retract: bool) -> Self {
        if fire {
            Self::Forward
        } else if retract {
            Self::Reverse
        } else {
            Self::Off
        }
    }
}

/// Left and right launcher valves.
#[derive(Debug)]
pub struct Launcher<V: Valve> {
    left: V,
    right: V,
    state: ValveState,
}

impl<V: Valve> Launcher<V> {
    /// Wraps the two valves. Neither is written until [`Launcher::set`].
    pub const fn new(left: V, right: V) -> Self {
        Self {
            left,
            right,
            state: ValveState::Off,
        }
    }

    /// Drives both valves to `state`.
    ///
    /// Both valves are written even if the first write fails.
    ///
    /// # Errors
    ///
    /// Returns the first valve error encountered.
    pub fn set(&mut self, state: ValveState) -> Result<(), V::Error> {
        self.state = state;
        let left = self.left.set_state(state);
        let right = self.right.set_state(state);
        left.and(right)
    }

    /// Last commanded state.
    pub const fn state(&self) -> ValveState {
        self.state
    }
}
