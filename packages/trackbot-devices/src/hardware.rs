use core::fmt::Debug;

use log::{info, warn};
use trackbot_display::{Panel, PanelSink};
use trackbot_drivetrain::{Drivetrain, TankCommand};
use trackbot_mechanisms::{CameraMount, Compressor, Launcher, Lift, ValveState};
use trackbot_sensing::RangeArray;
use trackbot_teleop::{Commands, RobotState, SensorInputs, render_status};

use crate::{
    drivetrain::Differential,
    mechanisms::{CameraServo, DoubleSolenoid, LiftMotor, PressureSwitch, RelayOutput},
    panel::BrainPanel,
};

/// Every device on the robot.
pub struct Hardware {
    /// Drive motors.
    pub drivetrain: Drivetrain<Differential>,
    /// Lift motor.
    pub lift: Lift<LiftMotor>,
    /// Launcher valves.
    pub launcher: Launcher<DoubleSolenoid>,
    /// Camera servo.
    pub camera: CameraMount<CameraServo>,
    /// Compressor relay and pressure switch.
    pub compressor: Compressor<RelayOutput, PressureSwitch>,
    /// Range sensors.
    pub ranges: RangeArray,
    /// Brain screen.
    pub screen: BrainPanel,
    status: Panel,
}

impl Hardware {
    /// Bundles the robot's devices.
    pub fn new(
        drivetrain: Differential,
        lift: LiftMotor,
        launcher: [DoubleSolenoid; 2],
        camera: CameraMount<CameraServo>,
        compressor: Compressor<RelayOutput, PressureSwitch>,
        ranges: RangeArray,
        screen: BrainPanel,
    ) -> Self {
        let [left, right] = launcher;

        Self {
            drivetrain: Drivetrain::new(drivetrain),
            lift: Lift::new(lift),
            launcher: Launcher::new(left, right),
            camera,
            compressor,
            ranges,
            screen,
            status: Panel::new(),
        }
    }

    /// Reads every sensor once.
    ///
    /// An unreadable pressure switch is treated as full so the compressor stays off.
    pub fn sample(&mut self) -> SensorInputs {
        let ranges = self.ranges.sample();
        let at_pressure = self.compressor.at_pressure().unwrap_or_else(|err| {
            warn!("pressure switch read failed: {err:?}");
            true
        });

        SensorInputs {
            ranges,
            raw: self.ranges.raw(),
            at_pressure,
        }
    }

    /// Writes one cycle of outputs. Failed writes are logged and skipped.
    pub fn apply(&mut self, commands: &Commands) {
        report("drivetrain", self.drivetrain.drive(commands.drive));
        report("lift", self.lift.set(commands.lift));
        report("launcher", self.launcher.set(commands.launcher));
        report("camera", self.camera.set(commands.camera));
        report("compressor", self.compressor.run(commands.compressor));
    }

    /// Redraws the status panel from `state`.
    pub fn show(&mut self, state: &RobotState) {
        report("status panel", render_status(state, &mut self.status));
        report("brain screen", self.screen.show(&self.status));
    }

    /// Stops every actuator and releases the compressor relay.
    pub fn stop(&mut self) {
        report("drivetrain", self.drivetrain.drive(TankCommand::STOP));
        report("lift", self.lift.set(0.0));
        report("launcher", self.launcher.set(ValveState::Off));
        report("compressor", self.compressor.run(false));
    }

    /// Logs a one-line summary of the bundled devices.
    pub fn describe(&self) {
        info!(
            "hardware: differential drivetrain, lift, 2-valve launcher, camera at {:?}, \
             compressor running: {}, ranges {:?}",
            self.camera.position(),
            self.compressor.is_running(),
            self.ranges,
        );
    }
}

fn report<E: Debug>(device: &str, result: Result<(), E>) {
    if let Err(err) = result {
        warn!("{device} write failed: {err:?}");
    }
}
