use core::time::Duration;

use trackbot_control::Clock;
use vexide::time::user_uptime;

/// Time since the user program started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now(&self) -> Duration {
        user_uptime()
    }
}
