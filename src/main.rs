//! Competition program: driver control with range-sensor alignment and an
//! alignment-only autonomous period.

use std::time::Duration;

use log::{LevelFilter, error, info};
use trackbot::{
    devices::logger,
    prelude::*,
    teleop::{Commands, DriveMode},
};
use vexide::prelude::*;

const ALIGN: AlignConfig = AlignConfig::new()
    .mode(AlignMode::Sides)
    .target(AlignTarget::new(108.0, 2.0));

const TELEOP: TeleopConfig = TeleopConfig::new()
    .scheme(DriveScheme::Tank)
    .creep_speed(0.3)
    .align(ALIGN);

const AUTONOMOUS_TIMEOUT: Duration = Duration::from_secs(10);

struct Robot {
    controller: Controller,
    buttons: ButtonMap,
    hardware: Hardware,
    teleop: Teleop,
    clock: UptimeClock,
}

impl Compete for Robot {
    async fn autonomous(&mut self) {
        info!("autonomous: aligning to target");
        let mut routine =
            AutoAlign::new(self.teleop.config().align).with_timeout(AUTONOMOUS_TIMEOUT);

        while !routine.is_finished() {
            let sensors = self.hardware.sample();
            let commands = Commands {
                mode: DriveMode::Align,
                drive: routine.step(&sensors.ranges, self.clock.now()),
                ..self.teleop.idle_commands()
            };
            self.hardware.apply(&commands);

            sleep(Controller::UPDATE_INTERVAL).await;
        }

        self.hardware.stop();
    }

    async fn driver(&mut self) {
        info!("driver control enabled");

        loop {
            let driver = sample_driver(&self.controller, &self.buttons);
            let sensors = self.hardware.sample();

            let commands = self.teleop.step(&driver, &sensors, self.clock.now());
            self.hardware.apply(&commands);
            self.hardware.show(self.teleop.state());

            sleep(Controller::UPDATE_INTERVAL).await;
        }
    }

    async fn disabled(&mut self) {
        self.teleop.abort_alignment();
        self.hardware.stop();
    }
}

fn checked_config() -> TeleopConfig {
    match TELEOP.align.validate() {
        Ok(()) => TELEOP,
        Err(err) => {
            error!("invalid alignment config ({err}), falling back to defaults");
            TELEOP.align(AlignConfig::new())
        }
    }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    if let Err(err) = logger::init(LevelFilter::Info) {
        println!("logger unavailable: {err}");
    }

    let expander = AdiExpander::new(peripherals.port_20);

    let hardware = Hardware::new(
        Differential::new(
            [
                Motor::new(peripherals.port_1, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse),
            ],
            [
                Motor::new(peripherals.port_3, Gearset::Green, Direction::Forward),
                Motor::new(peripherals.port_4, Gearset::Green, Direction::Forward),
            ],
        ),
        LiftMotor(Motor::new(peripherals.port_5, Gearset::Red, Direction::Forward)),
        [
            DoubleSolenoid::new(
                AdiDigitalOut::new(peripherals.adi_a),
                AdiDigitalOut::new(peripherals.adi_b),
            ),
            DoubleSolenoid::new(
                AdiDigitalOut::new(peripherals.adi_c),
                AdiDigitalOut::new(peripherals.adi_d),
            ),
        ],
        CameraMount::new(
            CameraServo(AdiServo::new(peripherals.adi_e)),
            CameraPresets::DEFAULT,
        ),
        Compressor::new(
            RelayOutput(AdiDigitalOut::new(peripherals.adi_f)),
            PressureSwitch(AdiDigitalIn::new(peripherals.adi_g)),
        ),
        RangeArray::new()
            .with_left(
                AnalogRange::new(
                    AdiAnalogIn::new(expander.adi_a),
                    AnalogRange::MAXBOTIX_INCHES,
                ),
                ValidityWindow::ANALOG_SONAR,
            )
            .with_right(
                AnalogRange::new(
                    AdiAnalogIn::new(expander.adi_b),
                    AnalogRange::MAXBOTIX_INCHES,
                ),
                ValidityWindow::ANALOG_SONAR,
            )
            .with_center(
                Sonar(AdiRangeFinder::new(expander.adi_c, expander.adi_d)),
                ValidityWindow::ULTRASONIC,
            ),
        BrainPanel(peripherals.display),
    );
    hardware.describe();

    Robot {
        controller: peripherals.primary_controller,
        buttons: ButtonMap::DEFAULT,
        hardware,
        teleop: Teleop::new(checked_config()),
        clock: UptimeClock,
    }
    .compete()
    .await;
}
