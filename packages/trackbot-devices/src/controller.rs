use trackbot_teleop::{Buttons, DriverInputs};
use vexide::devices::controller::{ButtonState, Controller, ControllerState};

/// A button on the V5 controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ControllerButton {
    A,
    B,
    X,
    Y,
    Up,
    Down,
    Left,
    Right,
    L1,
    L2,
    R1,
    R2,
}

impl ControllerButton {
    const fn of(self, state: &ControllerState) -> &ButtonState {
        match self {
            Self::A => &state.button_a,
            Self::B => &state.button_b,
            Self::X => &state.button_x,
            Self::Y => &state.button_y,
            Self::Up => &state.button_up,
            Self::Down => &state.button_down,
            Self::Left => &state.button_left,
            Self::Right => &state.button_right,
            Self::L1 => &state.button_l1,
            Self::L2 => &state.button_l2,
            Self::R1 => &state.button_r1,
            Self::R2 => &state.button_r2,
        }
    }

    fn is_pressed(self, state: &ControllerState) -> bool {
        self.of(state).is_pressed()
    }
}

/// Which controller button triggers each driver action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ButtonMap {
    pub fire: ControllerButton,
    pub retract: ControllerButton,
    pub lift_up: ControllerButton,
    pub lift_down: ControllerButton,
    pub camera_toggle: ControllerButton,
    pub compressor_toggle: ControllerButton,
    pub reverse_toggle: ControllerButton,
    pub creep: ControllerButton,
    pub align: ControllerButton,
    pub cancel_align: ControllerButton,
}

impl ButtonMap {
    /// Competition layout.
    pub const DEFAULT: Self = Self {
        fire: ControllerButton::R1,
        retract: ControllerButton::R2,
        lift_up: ControllerButton::L1,
        lift_down: ControllerButton::L2,
        camera_toggle: ControllerButton::Up,
        compressor_toggle: ControllerButton::X,
        reverse_toggle: ControllerButton::B,
        creep: ControllerButton::Down,
        align: ControllerButton::A,
        cancel_align: ControllerButton::Y,
    };
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Samples the controller once.
///
/// A disconnected controller reads as centered sticks with nothing pressed.
pub fn sample_driver(controller: &Controller, map: &ButtonMap) -> DriverInputs {
    let state = controller.state().unwrap_or_default();

    DriverInputs {
        left_x: state.left_stick.x(),
        left_y: state.left_stick.y(),
        right_x: state.right_stick.x(),
        right_y: state.right_stick.y(),
        buttons: Buttons {
            fire: map.fire.is_pressed(&state),
            retract: map.retract.is_pressed(&state),
            lift_up: map.lift_up.is_pressed(&state),
            lift_down: map.lift_down.is_pressed(&state),
            camera_toggle: map.camera_toggle.is_pressed(&state),
            compressor_toggle: map.compressor_toggle.is_pressed(&state),
            reverse_toggle: map.reverse_toggle.is_pressed(&state),
            creep: map.creep.is_pressed(&state),
            align: map.align.is_pressed(&state),
            cancel_align: map.cancel_align.is_pressed(&state),
        },
    }
}
