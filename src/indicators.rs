//! HID lock-key indicators (Caps / Num / Scroll).
//!
//! The host sends the keyboard LED output report; bit layout follows the
//! HID LED usage page:
//! ```text
//! Bit 0: Num Lock
//! Bit 1: Caps Lock
//! Bit 2: Scroll Lock
//! Bit 3: Compose
//! Bit 4: Kana
//! ```

const NUM_LOCK: u8 = 1 << 0;
const CAPS_LOCK: u8 = 1 << 1;
const SCROLL_LOCK: u8 = 1 << 2;

/// Lock-key state from the host's LED report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HidIndicators(pub u8);

/// One indicator label and whether it is lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lamp {
    pub label: &'static str,
    pub active: bool,
}

impl HidIndicators {
    pub fn num_lock(&self) -> bool {
        self.0 & NUM_LOCK != 0
    }

    pub fn caps_lock(&self) -> bool {
        self.0 & CAPS_LOCK != 0
    }

    pub fn scroll_lock(&self) -> bool {
        self.0 & SCROLL_LOCK != 0
    }

    /// Lamps in on-screen order, left to right.
    pub fn lamps(&self) -> [Lamp; 3] {
        [
            Lamp {
                label: "CAPS",
                active: self.caps_lock(),
            },
            Lamp {
                label: "NUM",
                active: self.num_lock(),
            },
            Lamp {
                label: "SCRL",
                active: self.scroll_lock(),
            },
        ]
    }
}
