//! Words-per-minute gauge.

use crate::config::WPM_BAR_MAX;
use crate::gauge;

/// Current typing speed as shown on the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WpmGauge {
    wpm: u8,
    shown: bool,
}

impl WpmGauge {
    pub const fn new() -> Self {
        Self { wpm: 0, shown: false }
    }

    /// Apply a WPM report; returns `true` when the displayed value changed.
    pub fn set(&mut self, wpm: u8) -> bool {
        let changed = !self.shown || self.wpm != wpm;
        self.wpm = wpm;
        self.shown = true;
        changed
    }

    /// Raw reported value.
    pub fn wpm(&self) -> u8 {
        self.wpm
    }

    /// Bar is hidden until the first report arrives.
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Filled width for a bar `width` pixels wide.
    pub fn fill(&self, width: u32) -> u32 {
        gauge::fill_width(u32::from(self.wpm), 0, u32::from(WPM_BAR_MAX), width)
    }
}
