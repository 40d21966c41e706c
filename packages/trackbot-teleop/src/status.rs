use trackbot_display::{Panel, PanelError};
use trackbot_mechanisms::CameraPosition;

use crate::state::RobotState;

/// Fills `panel` with the driver status readout for `state`.
///
/// ```text
/// Mode: Align   Rev:N
/// L:130 C:-- R:108
/// Drive L+0.50 R+0.00
/// Align:ON  L:-- R:ok
/// Comp:ON   Full:N
/// Cam:Low   T:1234
/// ```
///
/// # Errors
///
/// Only fails if the panel is smaller than six lines.
pub fn render_status(state: &RobotState, panel: &mut Panel) -> Result<(), PanelError> {
    panel.set_line_fmt(
        0,
        format_args!("Mode: {:<7} Rev:{}", state.mode, yes_no(state.is_reversed())),
    )?;
    panel.set_line_fmt(
        1,
        format_args!(
            "L:{} C:{} R:{}",
            Distance(state.ranges.left),
            Distance(state.ranges.center),
            Distance(state.ranges.right),
        ),
    )?;
    panel.set_line_fmt(
        2,
        format_args!("Drive L{:+.2} R{:+.2}", state.drive.left(), state.drive.right()),
    )?;
    panel.set_line_fmt(
        3,
        format_args!(
            "Align:{:<3} L:{} R:{}",
            on_off(state.aligning),
            ok(state.left_aligned),
            ok(state.right_aligned),
        ),
    )?;
    panel.set_line_fmt(
        4,
        format_args!(
            "Comp:{:<3}  Full:{}",
            on_off(state.compressor_running),
            yes_no(state.at_pressure),
        ),
    )?;
    panel.set_line_fmt(
        5,
        format_args!("Cam:{:<5} T:{}", camera_label(state.camera()), state.tick),
    )
}

struct Distance(Option<f64>);

impl core::fmt::Display for Distance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(distance) => write!(f, "{distance:.0}"),
            None => f.write_str("--"),
        }
    }
}

const fn yes_no(value: bool) -> char {
    if value { 'Y' } else { 'N' }
}

const fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

const fn camera_label(position: CameraPosition) -> &'static str {
    match position {
        CameraPosition::Low => "Low",
        CameraPosition::High => "High",
    }
}

const fn ok(value: bool) -> &'static str {
    if value { "ok" } else { "--" }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use trackbot_display::LINE_WIDTH;
    use trackbot_sensing::RangeSample;

    use super::*;
    use crate::{Buttons, DriverInputs, SensorInputs, Teleop, TeleopConfig};

    #[test]
    fn renders_alignment_status() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let driver = DriverInputs {
            buttons: Buttons {
                align: true,
                ..Buttons::default()
            },
            ..DriverInputs::default()
        };
        let sensors = SensorInputs {
            ranges: RangeSample {
                left: Some(130.4),
                center: None,
                right: Some(108.0),
            },
            ..SensorInputs::default()
        };
        teleop.step(&driver, &sensors, Duration::ZERO);

        let mut panel = Panel::new();
        render_status(teleop.state(), &mut panel).unwrap();

        assert_eq!(panel.line(0).unwrap().trim_end(), "Mode: Align   Rev:N");
        assert_eq!(panel.line(1).unwrap().trim_end(), "L:130 C:-- R:108");
        assert_eq!(panel.line(2).unwrap().trim_end(), "Drive L+0.50 R+0.00");
        assert_eq!(panel.line(3).unwrap().trim_end(), "Align:ON  L:-- R:ok");
        assert_eq!(panel.line(4).unwrap().trim_end(), "Comp:OFF  Full:N");
        assert_eq!(panel.line(5).unwrap().trim_end(), "Cam:Low   T:1");
        assert!(panel.lines().all(|line| line.chars().count() == LINE_WIDTH));
    }
}
