use std::time::{Duration, Instant};

pub const TIMER_DEC_PER_SECOND: u32 = 60;

/// One 1/60 s period.
pub const TIMER_PERIOD: Duration =
    Duration::from_nanos(1_000_000_000 / TIMER_DEC_PER_SECOND as u64);

/// A countdown register that stops at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    pub count: u8,
}

impl Timer {
    pub fn new(init_count: u8) -> Self {
        Self { count: init_count }
    }

    pub fn set(&mut self, value: u8) {
        self.count = value;
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

/// Turns elapsed wall-clock time into whole ticks of a fixed period (60Hz
/// unless built with [`TimerDriver::with_frequency`]), independent of how
/// many instructions ran in between.
#[derive(Debug, Clone, Copy)]
pub struct TimerDriver {
    last_updated: Instant,
    period: Duration,
}

impl TimerDriver {
    pub fn new(now: Instant) -> Self {
        Self {
            last_updated: now,
            period: TIMER_PERIOD,
        }
    }

    /// A driver ticking `hz` times per second; `hz` of 0 is treated as 1.
    /// The period never drops below 1ns.
    pub fn with_frequency(now: Instant, hz: u32) -> Self {
        let nanos = (1_000_000_000 / u64::from(hz.max(1))).max(1);
        Self {
            last_updated: now,
            period: Duration::from_nanos(nanos),
        }
    }

    /// Number of ticks owed since the last call. The leftover fraction of a
    /// period carries into the next call. A gap too long to count in a `u32`
    /// saturates and drops the reference point to `now`.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last_updated);
        match u32::try_from(elapsed.as_nanos() / self.period.as_nanos()) {
            Ok(ticks) => {
                self.last_updated += self.period * ticks;
                ticks
            }
            Err(_) => {
                self.last_updated = now;
                u32::MAX
            }
        }
    }
}
