//! User interface model - what the OLED shows and the buttons that change it.
//!
//! ## Layout (128×64)
//!
//! - **Top row**: battery bars, one per source
//! - **Middle**: layer roller, selected layer centred
//! - **Lower**: WPM bar and lock-key lamps
//! - **Overlay**: brightness percentage after a change

pub mod state;

pub use state::{Effects, ScreenState};

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    BrightnessUp,
    BrightnessDown,
}

impl ButtonEvent {
    /// Brightness after this press, starting from `current`.
    pub fn apply(self, current: u8) -> u8 {
        match self {
            ButtonEvent::BrightnessUp => crate::brightness::step_up(current),
            ButtonEvent::BrightnessDown => crate::brightness::step_down(current),
        }
    }
}
