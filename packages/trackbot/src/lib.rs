//! # trackbot
//!
//! Driver control for a tank-drive competition robot with a lift, a pneumatic launcher,
//! a pivoting camera and range sensors for automatic alignment, on top of
//! [vexide](https://vexide.dev).
//!
//! The crates re-exported here split the robot into host-testable logic
//! ([`control`], [`sensing`], [`drivetrain`], [`mechanisms`], [`display`], [`teleop`])
//! and the V5 device bindings in [`devices`].
//!
//! ```ignore
//! use trackbot::prelude::*;
//!
//! let mut teleop = Teleop::new(TeleopConfig::new());
//! loop {
//!     let driver = sample_driver(&controller, &ButtonMap::DEFAULT);
//!     let sensors = hardware.sample();
//!     let commands = teleop.step(&driver, &sensors, clock.now());
//!     hardware.apply(&commands);
//!     hardware.show(teleop.state());
//!     sleep(Controller::UPDATE_INTERVAL).await;
//! }
//! ```

pub use trackbot_control as control;
pub use trackbot_devices as devices;
pub use trackbot_display as display;
pub use trackbot_drivetrain as drivetrain;
pub use trackbot_math as math;
pub use trackbot_mechanisms as mechanisms;
pub use trackbot_sensing as sensing;
pub use trackbot_teleop as teleop;

/// Commonly used types.
pub mod prelude {
    pub use trackbot_control::{
        AlignConfig, AlignMode, AlignTarget, Clock, SpeedLadder, Tier,
    };
    pub use trackbot_devices::{
        AnalogRange, BrainPanel, ButtonMap, CameraServo, ControllerButton, Differential,
        DoubleSolenoid, Hardware, LiftMotor, PressureSwitch, RelayOutput, Sonar, UptimeClock,
        sample_driver,
    };
    pub use trackbot_drivetrain::TankCommand;
    pub use trackbot_mechanisms::{CameraMount, CameraPosition, CameraPresets, Compressor};
    pub use trackbot_sensing::{RangeArray, ValidityWindow};
    pub use trackbot_teleop::{AutoAlign, DriveScheme, Teleop, TeleopConfig};
}
