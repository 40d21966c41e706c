use trackbot_sensing::{RangeSample, RawSample};

/// Button levels sampled once per cycle.
///
/// Each field is `true` while the mapped controller button is held.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Buttons {
    /// Extend the launcher.
    pub fire: bool,
    /// Retract the launcher.
    pub retract: bool,
    /// Raise the lift.
    pub lift_up: bool,
    /// Lower the lift.
    pub lift_down: bool,
    /// Flip the camera between presets.
    pub camera_toggle: bool,
    /// Enable or disable the compressor.
    pub compressor_toggle: bool,
    /// Swap the front and back of the robot for manual driving.
    pub reverse_toggle: bool,
    /// Drive forward at creep speed.
    pub creep: bool,
    /// Start automatic alignment.
    pub align: bool,
    /// Abort automatic alignment.
    pub cancel_align: bool,
}

/// Controller state for one cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DriverInputs {
    /// Left stick horizontal axis, right positive.
    pub left_x: f64,
    /// Left stick vertical axis, forward positive.
    pub left_y: f64,
    /// Right stick horizontal axis, right positive.
    pub right_x: f64,
    /// Right stick vertical axis, forward positive.
    pub right_y: f64,
    /// Button levels.
    pub buttons: Buttons,
}

/// Robot sensor state for one cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SensorInputs {
    /// Filtered range readings.
    pub ranges: RangeSample,
    /// Unfiltered range readings, for diagnostics.
    pub raw: RawSample,
    /// `true` while the pressure switch reports full tanks.
    pub at_pressure: bool,
}
