//! services/clinic/src/adapters/clock.rs

use chrono::{DateTime, Utc};
use petopia_core::ports::Clock;

/// The system wall clock.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
