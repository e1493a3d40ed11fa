//! Screen brightness - button stepping, panel contrast and the transient
//! "NN%" overlay shown after a change.

use core::fmt::Write;

use crate::config::{
    BRIGHTNESS_FADE_TIME_MS, BRIGHTNESS_MAX, BRIGHTNESS_MIN, BRIGHTNESS_SAVE_DELAY_MS,
    BRIGHTNESS_STEP,
};
use heapless::String;

/// Keep a requested brightness inside the usable range.
pub fn clamp(percent: u8) -> u8 {
    percent.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// One step brighter, saturating at the maximum.
pub fn step_up(percent: u8) -> u8 {
    clamp(percent.saturating_add(BRIGHTNESS_STEP))
}

/// One step dimmer, saturating at the minimum.
pub fn step_down(percent: u8) -> u8 {
    clamp(percent.saturating_sub(BRIGHTNESS_STEP))
}

/// SSD1306 contrast register value for a brightness percentage.
pub fn contrast(percent: u8) -> u8 {
    (u16::from(percent.min(100)) * 255 / 100) as u8
}

/// Overlay text, e.g. `"80%"`.
pub fn label(percent: u8) -> String<8> {
    let mut s = String::new();
    let _ = write!(s, "{}%", percent);
    s
}

/// Brightness overlay visibility window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Overlay {
    shown_at_ms: Option<u64>,
}

impl Overlay {
    pub const fn new() -> Self {
        Self { shown_at_ms: None }
    }

    /// (Re)start the overlay at `now_ms`.
    pub fn show(&mut self, now_ms: u64) {
        self.shown_at_ms = Some(now_ms);
    }

    pub fn is_visible(&self, now_ms: u64) -> bool {
        match self.shown_at_ms {
            Some(at) => now_ms.saturating_sub(at) < BRIGHTNESS_FADE_TIME_MS,
            None => false,
        }
    }

    /// Drop an overlay whose window has passed. Returns `true` if it was
    /// just hidden.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        if self.shown_at_ms.is_some() && !self.is_visible(now_ms) {
            self.shown_at_ms = None;
            return true;
        }
        false
    }
}

/// Deferred flash write for brightness changes.
///
/// Each change pushes the deadline back, so a run of button taps ends in a
/// single write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendingSave {
    due_ms: Option<u64>,
}

impl PendingSave {
    pub const fn new() -> Self {
        Self { due_ms: None }
    }

    /// A change happened at `now_ms`.
    pub fn schedule(&mut self, now_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(BRIGHTNESS_SAVE_DELAY_MS));
    }

    /// `true` once the quiet period has passed; clears the pending save.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_saturate() {
        assert_eq!(step_up(80), 90);
        assert_eq!(step_up(95), BRIGHTNESS_MAX);
        assert_eq!(step_up(BRIGHTNESS_MAX), BRIGHTNESS_MAX);
        assert_eq!(step_down(30), 20);
        assert_eq!(step_down(BRIGHTNESS_MIN), BRIGHTNESS_MIN);
        assert_eq!(step_down(0), BRIGHTNESS_MIN);
    }

    #[test]
    fn clamp_keeps_panel_lit() {
        assert_eq!(clamp(0), BRIGHTNESS_MIN);
        assert_eq!(clamp(250), BRIGHTNESS_MAX);
        assert_eq!(clamp(55), 55);
    }

    #[test]
    fn contrast_scale() {
        assert_eq!(contrast(0), 0);
        assert_eq!(contrast(50), 127);
        assert_eq!(contrast(100), 255);
        assert_eq!(contrast(200), 255);
    }

    #[test]
    fn label_text() {
        assert_eq!(label(80).as_str(), "80%");
        assert_eq!(label(100).as_str(), "100%");
    }

    #[test]
    fn overlay_window() {
        let mut o = Overlay::new();
        assert!(!o.is_visible(0));
        o.show(1_000);
        assert!(o.is_visible(1_000));
        assert!(o.is_visible(1_000 + BRIGHTNESS_FADE_TIME_MS - 1));
        assert!(!o.is_visible(1_000 + BRIGHTNESS_FADE_TIME_MS));
    }

    #[test]
    fn overlay_expires_once() {
        let mut o = Overlay::new();
        o.show(0);
        assert!(!o.expire(100));
        assert!(o.expire(BRIGHTNESS_FADE_TIME_MS));
        assert!(!o.expire(BRIGHTNESS_FADE_TIME_MS + 1));
    }

    #[test]
    fn taps_in_a_row_save_once() {
        let mut p = PendingSave::new();
        assert!(!p.take_due(0));

        p.schedule(0);
        p.schedule(300);
        p.schedule(600);
        assert!(!p.take_due(BRIGHTNESS_SAVE_DELAY_MS));
        assert!(p.take_due(600 + BRIGHTNESS_SAVE_DELAY_MS));
        assert!(!p.take_due(10_000));
    }
}
