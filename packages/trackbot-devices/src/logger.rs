//! Console logger for the V5 brain.
//!
//! Implements the [`log`] facade, printing each record to the program's serial
//! terminal prefixed with its level and the time since the program started:
//!
//! ```text
//! INFO [1m 12s 40ms] trackbot_teleop::teleop - alignment started
//! WARN [1m 12s 60ms] trackbot_devices::hardware - lift write failed: Disconnected
//! ```
//!
//! Call [`init`] once at the top of `main`.

use std::{sync::OnceLock, time::Duration};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use vexide::time::user_uptime;

/// Serial-terminal logger.
#[derive(Debug)]
pub struct ConsoleLogger {
    _private: (),
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            println!("{}", format_line(record, user_uptime()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Installs the console logger.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger { _private: () });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

fn format_line(record: &Record<'_>, uptime: Duration) -> String {
    // Millisecond resolution keeps lines short.
    let uptime = Duration::from_millis(uptime.as_millis() as u64);

    format!(
        "{} [{}] {} - {}",
        record.level(),
        format_duration(uptime),
        record.target(),
        record.args()
    )
}
