use core::time::Duration;

use log::{debug, info};
use trackbot_control::Alignment;
use trackbot_drivetrain::TankCommand;
use trackbot_math::desaturate;
use trackbot_mechanisms::{ValveState, compressor, lift};

use crate::{
    commands::{Commands, DriveMode},
    config::{DriveScheme, TeleopConfig},
    inputs::{Buttons, DriverInputs, SensorInputs},
    state::RobotState,
};

/// The driver-control loop body.
#[derive(Debug, Clone)]
pub struct Teleop {
    config: TeleopConfig,
    state: RobotState,
    alignment: Alignment,
}

impl Teleop {
    /// Creates the loop in its startup state.
    #[must_use]
    pub const fn new(config: TeleopConfig) -> Self {
        Self {
            state: RobotState::new(&config),
            alignment: Alignment::new(config.align),
            config,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &TeleopConfig {
        &self.config
    }

    /// State after the latest cycle.
    #[must_use]
    pub const fn state(&self) -> &RobotState {
        &self.state
    }

    /// Outputs matching the current state with every motor stopped.
    #[must_use]
    pub fn idle_commands(&self) -> Commands {
        Commands::idle(self.state.camera())
    }

    /// Stops any alignment in progress, for example when the robot is disabled.
    pub fn abort_alignment(&mut self) {
        if self.state.aligning {
            info!("alignment aborted");
        }
        self.state.aligning = false;
        self.state.left_aligned = false;
        self.state.right_aligned = false;
        self.alignment.reset();
    }

    /// Runs one control cycle.
    ///
    /// `now` must come from a monotonic clock; it only drives the toggle cooldowns.
    pub fn step(
        &mut self,
        driver: &DriverInputs,
        sensors: &SensorInputs,
        now: Duration,
    ) -> Commands {
        let buttons = driver.buttons;

        self.state.tick += 1;
        self.state.ranges = sensors.ranges;
        self.state.at_pressure = sensors.at_pressure;

        self.update_toggles(&buttons, now);
        self.update_alignment_latch(&buttons);

        let (mode, drive) = self.drive(driver);
        self.state.mode = mode;
        self.state.drive = drive;

        let compressor_on =
            compressor::should_run(self.state.is_compressor_enabled(), sensors.at_pressure);
        self.state.compressor_running = compressor_on;

        let commands = Commands {
            mode,
            drive,
            lift: lift::power_for(buttons.lift_up, buttons.lift_down, self.config.lift_speed),
            launcher: ValveState::from_buttons(buttons.fire, buttons.retract),
            camera: self.state.camera(),
            compressor: compressor_on,
        };

        self.log_diagnostics(sensors);
        commands
    }

    fn update_toggles(&mut self, buttons: &Buttons, now: Duration) {
        let state = &mut self.state;

        if state.reversed.update(buttons.reverse_toggle, now) {
            info!("drive reversed: {}", state.reversed.get());
        }
        if state.camera_high.update(buttons.camera_toggle, now) {
            debug!("camera moved to {:?}", state.camera());
        }
        if state.compressor_enabled.update(buttons.compressor_toggle, now) {
            info!("compressor enabled: {}", state.compressor_enabled.get());
        }
    }

    fn update_alignment_latch(&mut self, buttons: &Buttons) {
        let pressed = buttons.align && !self.state.align_held;
        self.state.align_held = buttons.align;

        if buttons.cancel_align {
            self.abort_alignment();
        } else if pressed && !self.state.aligning {
            info!("alignment started");
            self.alignment.reset();
            self.state.aligning = true;
            self.state.left_aligned = false;
            self.state.right_aligned = false;
        }
    }

    fn drive(&mut self, driver: &DriverInputs) -> (DriveMode, TankCommand) {
        if self.state.aligning {
            let output = self.alignment.update(&self.state.ranges);
            self.state.left_aligned = output.left.is_aligned();
            self.state.right_aligned = output.right.is_aligned();

            if output.is_complete() {
                info!("alignment complete after {} cycles", self.state.tick);
                self.state.aligning = false;
            }

            let (left, right) = output.speeds();
            return (DriveMode::Align, TankCommand::new(left, right));
        }

        let (mode, command) = if driver.buttons.creep {
            (DriveMode::Creep, TankCommand::uniform(self.config.creep_speed))
        } else {
            (DriveMode::Manual, self.manual(driver))
        };

        if self.state.is_reversed() {
            (mode, command.reversed())
        } else {
            (mode, command)
        }
    }

    fn manual(&self, driver: &DriverInputs) -> TankCommand {
        match self.config.scheme {
            DriveScheme::Tank => TankCommand::new(driver.left_y, driver.right_y),
            DriveScheme::Arcade => {
                let [left, right] = desaturate(
                    [driver.left_y + driver.left_x, driver.left_y - driver.left_x],
                    1.0,
                );
                TankCommand::new(left, right)
            }
        }
    }

    fn log_diagnostics(&self, sensors: &SensorInputs) {
        if !is_diagnostic_tick(self.state.tick, self.config.diagnostic_interval) {
            return;
        }

        info!(
            "tick {}: raw range L {:?} C {:?} R {:?}, pressure switch {}, compressor {}",
            self.state.tick,
            sensors.raw.left,
            sensors.raw.center,
            sensors.raw.right,
            sensors.at_pressure,
            self.state.compressor_running,
        );
    }
}

/// An interval of zero disables diagnostics.
const fn is_diagnostic_tick(tick: u64, interval: u64) -> bool {
    interval != 0 && tick % interval == 0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use trackbot_control::{AlignConfig, AlignMode, ladder::MEDIUM_FAST_AUTO_SPEED};
    use trackbot_mechanisms::CameraPosition;
    use trackbot_sensing::RangeSample;

    use super::*;

    const CYCLE: Duration = Duration::from_millis(20);

    fn sticks(left_y: f64, right_y: f64) -> DriverInputs {
        DriverInputs {
            left_y,
            right_y,
            ..DriverInputs::default()
        }
    }

    fn pressing(buttons: Buttons) -> DriverInputs {
        DriverInputs {
            buttons,
            ..DriverInputs::default()
        }
    }

    fn ranges(left: f64, right: f64) -> SensorInputs {
        SensorInputs {
            ranges: RangeSample {
                left: Some(left),
                center: None,
                right: Some(right),
            },
            ..SensorInputs::default()
        }
    }

    #[test]
    fn manual_tank_follows_sticks() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let commands = teleop.step(&sticks(0.6, -0.2), &SensorInputs::default(), Duration::ZERO);

        assert_eq!(commands.mode, DriveMode::Manual);
        assert_relative_eq!(commands.drive.left(), 0.6);
        assert_relative_eq!(commands.drive.right(), -0.2);
    }

    #[test]
    fn arcade_scheme_mixes_one_stick() {
        let mut teleop = Teleop::new(TeleopConfig::new().scheme(DriveScheme::Arcade));
        let driver = DriverInputs {
            left_x: 1.0,
            left_y: 1.0,
            ..DriverInputs::default()
        };
        let commands = teleop.step(&driver, &SensorInputs::default(), Duration::ZERO);

        assert_relative_eq!(commands.drive.left(), 1.0);
        assert_relative_eq!(commands.drive.right(), 0.0);
    }

    #[test]
    fn creep_drives_forward_slowly() {
        let mut teleop = Teleop::new(TeleopConfig::new().creep_speed(0.3));
        let driver = DriverInputs {
            left_y: 1.0,
            right_y: 1.0,
            buttons: Buttons {
                creep: true,
                ..Buttons::default()
            },
            ..DriverInputs::default()
        };
        let commands = teleop.step(&driver, &SensorInputs::default(), Duration::ZERO);

        assert_eq!(commands.mode, DriveMode::Creep);
        assert_eq!(commands.drive, TankCommand::uniform(0.3));
    }

    #[test]
    fn reversal_negates_manual_but_not_alignment() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let reverse = pressing(Buttons {
            reverse_toggle: true,
            ..Buttons::default()
        });
        teleop.step(&reverse, &SensorInputs::default(), Duration::ZERO);
        assert!(teleop.state().is_reversed());

        let commands = teleop.step(&sticks(0.5, 0.4), &SensorInputs::default(), CYCLE);
        assert_relative_eq!(commands.drive.left(), -0.5);
        assert_relative_eq!(commands.drive.right(), -0.4);

        let align = pressing(Buttons {
            align: true,
            ..Buttons::default()
        });
        let commands = teleop.step(&align, &ranges(130.0, 130.0), CYCLE * 2);
        assert_eq!(commands.mode, DriveMode::Align);
        assert_relative_eq!(commands.drive.left(), MEDIUM_FAST_AUTO_SPEED);
    }

    #[test]
    fn held_reverse_button_respects_cooldown() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let reverse = pressing(Buttons {
            reverse_toggle: true,
            ..Buttons::default()
        });

        let mut now = Duration::from_secs(1);
        teleop.step(&reverse, &SensorInputs::default(), now);
        assert!(teleop.state().is_reversed());

        for _ in 0..12 {
            now += CYCLE;
            teleop.step(&reverse, &SensorInputs::default(), now);
            assert!(teleop.state().is_reversed());
        }

        now += CYCLE;
        teleop.step(&reverse, &SensorInputs::default(), now);
        assert!(!teleop.state().is_reversed());
    }

    #[test]
    fn camera_toggle_uses_its_own_cooldown() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let camera = pressing(Buttons {
            camera_toggle: true,
            ..Buttons::default()
        });

        let commands = teleop.step(&camera, &SensorInputs::default(), Duration::ZERO);
        assert_eq!(commands.camera, CameraPosition::High);

        let commands = teleop.step(&camera, &SensorInputs::default(), Duration::from_millis(300));
        assert_eq!(commands.camera, CameraPosition::High);

        let commands = teleop.step(&camera, &SensorInputs::default(), Duration::from_millis(500));
        assert_eq!(commands.camera, CameraPosition::Low);
    }

    #[test]
    fn alignment_runs_until_complete_then_reverts() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let align = pressing(Buttons {
            align: true,
            ..Buttons::default()
        });

        let commands = teleop.step(&align, &ranges(130.0, 108.0), Duration::ZERO);
        assert_eq!(commands.mode, DriveMode::Align);
        assert!(teleop.state().aligning);
        assert!(teleop.state().right_aligned);
        assert!(!teleop.state().left_aligned);
        assert_relative_eq!(commands.drive.left(), MEDIUM_FAST_AUTO_SPEED);
        assert_relative_eq!(commands.drive.right(), 0.0);

        // Button released; alignment stays latched and ignores the sticks.
        let commands = teleop.step(&sticks(-1.0, -1.0), &ranges(109.0, 107.5), CYCLE);
        assert_eq!(commands.mode, DriveMode::Align);
        assert_eq!(commands.drive, TankCommand::STOP);
        assert!(!teleop.state().aligning);

        let commands = teleop.step(&sticks(-1.0, -1.0), &ranges(109.0, 107.5), CYCLE * 2);
        assert_eq!(commands.mode, DriveMode::Manual);
        assert_relative_eq!(commands.drive.left(), -1.0);
    }

    #[test]
    fn holding_align_does_not_restart_after_completion() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let align = pressing(Buttons {
            align: true,
            ..Buttons::default()
        });

        teleop.step(&align, &ranges(108.0, 108.0), Duration::ZERO);
        assert!(!teleop.state().aligning);

        let commands = teleop.step(&align, &ranges(108.0, 108.0), CYCLE);
        assert_eq!(commands.mode, DriveMode::Manual);
    }

    #[test]
    fn cancel_stops_alignment() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let align = pressing(Buttons {
            align: true,
            ..Buttons::default()
        });
        let cancel = pressing(Buttons {
            cancel_align: true,
            ..Buttons::default()
        });

        teleop.step(&align, &ranges(200.0, 200.0), Duration::ZERO);
        assert!(teleop.state().aligning);

        let commands = teleop.step(&cancel, &ranges(200.0, 200.0), CYCLE);
        assert_eq!(commands.mode, DriveMode::Manual);
        assert!(!teleop.state().aligning);
    }

    #[test]
    fn center_mode_uses_center_sensor() {
        let config = TeleopConfig::new().align(AlignConfig::new().mode(AlignMode::Center));
        let mut teleop = Teleop::new(config);
        let align = pressing(Buttons {
            align: true,
            ..Buttons::default()
        });
        let sensors = SensorInputs {
            ranges: RangeSample {
                left: None,
                center: Some(130.0),
                right: None,
            },
            ..SensorInputs::default()
        };

        let commands = teleop.step(&align, &sensors, Duration::ZERO);
        assert_eq!(commands.drive, TankCommand::uniform(MEDIUM_FAST_AUTO_SPEED));
    }

    #[test]
    fn lift_and_launcher_run_in_every_mode() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let driver = pressing(Buttons {
            align: true,
            lift_up: true,
            lift_down: true,
            fire: true,
            ..Buttons::default()
        });

        let commands = teleop.step(&driver, &ranges(200.0, 200.0), Duration::ZERO);
        assert_eq!(commands.mode, DriveMode::Align);
        assert_relative_eq!(commands.lift, -0.25);
        assert_eq!(commands.launcher, ValveState::Forward);

        let driver = pressing(Buttons {
            retract: true,
            lift_up: true,
            ..Buttons::default()
        });
        let commands = teleop.step(&driver, &ranges(200.0, 200.0), CYCLE);
        assert_relative_eq!(commands.lift, 0.25);
        assert_eq!(commands.launcher, ValveState::Reverse);
    }

    #[test]
    fn compressor_gated_by_pressure_switch() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let toggle = pressing(Buttons {
            compressor_toggle: true,
            ..Buttons::default()
        });

        let idle = DriverInputs::default();
        let commands = teleop.step(&idle, &SensorInputs::default(), Duration::ZERO);
        assert!(!commands.compressor);

        let commands = teleop.step(&toggle, &SensorInputs::default(), CYCLE);
        assert!(teleop.state().is_compressor_enabled());
        assert!(commands.compressor);

        let full = SensorInputs {
            at_pressure: true,
            ..SensorInputs::default()
        };
        let commands = teleop.step(&DriverInputs::default(), &full, CYCLE * 2);
        assert!(!commands.compressor);
        assert!(teleop.state().is_compressor_enabled());
    }

    #[test]
    fn diagnostics_fire_every_interval() {
        let mut teleop = Teleop::new(TeleopConfig::new().diagnostic_interval(2));
        let mut logged = Vec::new();

        for i in 0..5 {
            teleop.step(&DriverInputs::default(), &SensorInputs::default(), CYCLE * i);
            let tick = teleop.state().tick;
            if is_diagnostic_tick(tick, teleop.config().diagnostic_interval) {
                logged.push(tick);
            }
        }

        assert_eq!(teleop.state().tick, 5);
        assert_eq!(logged, vec![2, 4]);
    }

    #[test]
    fn zero_interval_disables_diagnostics() {
        assert!((0..=300).all(|tick| !is_diagnostic_tick(tick, 0)));
        assert!(is_diagnostic_tick(100, 100));
        assert!(!is_diagnostic_tick(99, 100));
        assert!(!is_diagnostic_tick(101, 100));
    }

    #[test]
    fn cancel_clears_aligned_flags() {
        let mut teleop = Teleop::new(TeleopConfig::new());
        let align = pressing(Buttons {
            align: true,
            ..Buttons::default()
        });
        let cancel = pressing(Buttons {
            cancel_align: true,
            ..Buttons::default()
        });

        teleop.step(&align, &ranges(108.0, 200.0), Duration::ZERO);
        assert!(teleop.state().aligning);
        assert!(teleop.state().left_aligned);

        let commands = teleop.step(&cancel, &ranges(300.0, 200.0), CYCLE);
        assert_eq!(commands.mode, DriveMode::Manual);
        assert!(!teleop.state().aligning);
        assert!(!teleop.state().left_aligned);
        assert!(!teleop.state().right_aligned);
    }
}
