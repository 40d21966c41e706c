//! Control loops.

mod aligner;

pub use aligner::Aligner;

/// Feedback ("closed-loop") controller.
///
/// Trackbot's loops are driven once per control cycle by the host runtime, so no time
/// step is passed in.
pub trait Feedback {
    /// Representation of the system's state.
    type State;

    /// Control signal produced by the loop.
    type Signal;

    /// Updates the controller with a new measurement, producing a new control signal.
    fn update(&mut self, measurement: Self::State, setpoint: Self::State) -> Self::Signal;
}
