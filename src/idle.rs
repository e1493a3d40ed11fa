//! Screen idle timeout.
//!
//! The OLED switches off after `SCREEN_IDLE_TIMEOUT_SECS` without activity
//! and comes back on the next activity or when a peripheral reconnects.
//! Time is passed in as milliseconds since boot so the logic runs on the
//! host as well as on target.

use crate::config::SCREEN_IDLE_TIMEOUT_SECS;

/// Decide whether the screen should be on for a given idle time.
pub fn screen_should_be_on(idle_secs: u64, timeout_secs: u64) -> bool {
    if timeout_secs == 0 {
        return true;
    }

    idle_secs < timeout_secs
}

/// Screen power transitions reported by [`ScreenPower`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerChange {
    TurnedOn,
    TurnedOff,
}

/// Tracks activity and whether the screen is lit.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenPower {
    last_activity_ms: u64,
    on: bool,
    timeout_secs: u64,
}

impl ScreenPower {
    /// Screen on, idle clock starting at `now_ms`.
    pub const fn new(now_ms: u64) -> Self {
        Self::with_timeout(now_ms, SCREEN_IDLE_TIMEOUT_SECS)
    }

    pub const fn with_timeout(now_ms: u64, timeout_secs: u64) -> Self {
        Self {
            last_activity_ms: now_ms,
            on: true,
            timeout_secs,
        }
    }

    /// Record activity (layer change, typing, lock key, brightness).
    pub fn activity(&mut self, now_ms: u64) -> Option<PowerChange> {
        self.last_activity_ms = now_ms;
        if self.on {
            return None;
        }
        self.on = true;
        Some(PowerChange::TurnedOn)
    }

    /// Wake for a reconnected peripheral. Same effect as activity.
    pub fn wake(&mut self, now_ms: u64) -> Option<PowerChange> {
        self.activity(now_ms)
    }

    /// Periodic check; switches the screen off once the timeout passes.
    pub fn tick(&mut self, now_ms: u64) -> Option<PowerChange> {
        let idle_secs = now_ms.saturating_sub(self.last_activity_ms) / 1000;
        let should_be_on = screen_should_be_on(idle_secs, self.timeout_secs);

        match (self.on, should_be_on) {
            (true, false) => {
                self.on = false;
                Some(PowerChange::TurnedOff)
            }
            _ => None,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
