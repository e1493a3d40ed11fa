//! Battery bars - one per peripheral, plus the dongle's own cell when
//! `dongle-battery` is enabled.

pub mod reconnect;

pub use reconnect::{PriorState, ReconnectTracker, Reconnection};

use crate::config::{BATTERY_SOURCE_COUNT, DONGLE_BATTERY_ENABLED, SOURCE_OFFSET};

/// Source index of the dongle's own battery.
pub const DONGLE_SOURCE: usize = 0;

/// Bar index for a peripheral battery report.
pub fn peripheral_source(peripheral: u8) -> usize {
    usize::from(peripheral) + SOURCE_OFFSET
}

/// Bar index for the dongle's own battery, if it has a bar.
pub fn dongle_source() -> Option<usize> {
    DONGLE_BATTERY_ENABLED.then_some(DONGLE_SOURCE)
}

/// Fill band of a battery bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryBand {
    /// 0-10%
    Critical,
    /// 11-20%
    Low,
    /// 21-30%
    Fair,
    /// 31-90%
    Good,
    /// 91-100%
    Full,
}

impl BatteryBand {
    pub fn for_level(level: u8) -> Self {
        match level {
            0..=10 => BatteryBand::Critical,
            11..=20 => BatteryBand::Low,
            21..=30 => BatteryBand::Fair,
            31..=90 => BatteryBand::Good,
            _ => BatteryBand::Full,
        }
    }
}

/// Displayed state of one battery bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryBar {
    /// Last level; `None` keeps the bar hidden.
    pub level: Option<u8>,
    /// Dongle running from USB power.
    pub usb_present: bool,
}

impl BatteryBar {
    pub const fn hidden() -> Self {
        Self {
            level: None,
            usb_present: false,
        }
    }

    pub fn band(&self) -> Option<BatteryBand> {
        self.level.map(BatteryBand::for_level)
    }
}

/// All bars, indexed by source.
pub type BatteryBars = [BatteryBar; BATTERY_SOURCE_COUNT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(BatteryBand::for_level(0), BatteryBand::Critical);
        assert_eq!(BatteryBand::for_level(10), BatteryBand::Critical);
        assert_eq!(BatteryBand::for_level(11), BatteryBand::Low);
        assert_eq!(BatteryBand::for_level(20), BatteryBand::Low);
        assert_eq!(BatteryBand::for_level(21), BatteryBand::Fair);
        assert_eq!(BatteryBand::for_level(30), BatteryBand::Fair);
        assert_eq!(BatteryBand::for_level(31), BatteryBand::Good);
        assert_eq!(BatteryBand::for_level(90), BatteryBand::Good);
        assert_eq!(BatteryBand::for_level(91), BatteryBand::Full);
        assert_eq!(BatteryBand::for_level(100), BatteryBand::Full);
    }

    #[test]
    fn hidden_bar_has_no_band() {
        assert_eq!(BatteryBar::hidden().band(), None);
    }

    #[test]
    fn peripheral_sources_follow_offset() {
        assert_eq!(peripheral_source(0), SOURCE_OFFSET);
        assert_eq!(peripheral_source(1), 1 + SOURCE_OFFSET);
        assert_eq!(dongle_source().is_some(), DONGLE_BATTERY_ENABLED);
    }
}
