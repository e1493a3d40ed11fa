//! Keyboard state changes the screen reacts to.

/// One event for the screen task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayEvent {
    /// A split peripheral reported its battery. `level < 1` means the link
    /// is down.
    PeripheralBattery { peripheral: u8, level: u8 },
    /// The dongle's own battery.
    CentralBattery { level: u8, usb_present: bool },
    /// USB power appeared or went away.
    UsbPower { powered: bool },
    /// Highest active layer changed.
    LayerChanged { highest: u8 },
    /// Host LED report (lock keys).
    HidIndicators(u8),
    /// Typing speed update.
    Wpm(u8),
    /// Brightness set to a new percentage.
    Brightness(u8),
}

impl DisplayEvent {
    /// Whether the event comes from the user touching the keyboard, and so
    /// keeps the screen awake.
    pub fn is_activity(&self) -> bool {
        match self {
            DisplayEvent::LayerChanged { .. }
            | DisplayEvent::HidIndicators(_)
            | DisplayEvent::Brightness(_) => true,
            DisplayEvent::Wpm(wpm) => *wpm > 0,
            DisplayEvent::PeripheralBattery { .. }
            | DisplayEvent::CentralBattery { .. }
            | DisplayEvent::UsbPower { .. } => false,
        }
    }
}

/// Outcome of [`DropLog::dropped`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReport {
    /// First drop of a run; worth a warning.
    Started,
    /// Still dropping; stay quiet.
    Ongoing,
}

/// Counts events dropped on a full queue so a stalled consumer produces
/// one warning per run instead of one per event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropLog {
    dropped: u32,
}

impl DropLog {
    pub const fn new() -> Self {
        Self { dropped: 0 }
    }

    pub fn dropped(&mut self) -> DropReport {
        self.dropped = self.dropped.saturating_add(1);
        if self.dropped == 1 {
            DropReport::Started
        } else {
            DropReport::Ongoing
        }
    }

    /// An event got through. Returns how many were lost before it, if any.
    pub fn delivered(&mut self) -> Option<u32> {
        let lost = core::mem::take(&mut self.dropped);
        (lost > 0).then_some(lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_is_not_activity() {
        assert!(!DisplayEvent::PeripheralBattery {
            peripheral: 0,
            level: 50
        }
        .is_activity());
        assert!(!DisplayEvent::UsbPower { powered: true }.is_activity());
    }

    #[test]
    fn idle_wpm_is_not_activity() {
        assert!(!DisplayEvent::Wpm(0).is_activity());
        assert!(DisplayEvent::Wpm(12).is_activity());
    }

    #[test]
    fn input_events_are_activity() {
        assert!(DisplayEvent::LayerChanged { highest: 1 }.is_activity());
        assert!(DisplayEvent::HidIndicators(2).is_activity());
        assert!(DisplayEvent::Brightness(50).is_activity());
    }

    #[test]
    fn full_queue_warns_once_per_run() {
        let mut log = DropLog::new();
        assert_eq!(log.delivered(), None);

        assert_eq!(log.dropped(), DropReport::Started);
        for _ in 0..100 {
            assert_eq!(log.dropped(), DropReport::Ongoing);
        }
        assert_eq!(log.delivered(), Some(101));

        assert_eq!(log.delivered(), None);
        assert_eq!(log.dropped(), DropReport::Started);
    }
}
