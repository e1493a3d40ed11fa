//! Everything the screen shows, updated one event at a time.
//!
//! The screen task owns a single `ScreenState`, feeds it every
//! [`DisplayEvent`] and acts on the returned [`Effects`]: redraw, switch
//! the panel on or off, apply a new contrast.

use crate::battery::{self, BatteryBar, BatteryBars, ReconnectTracker, Reconnection};
use crate::brightness::{self, Overlay};
use crate::config::BATTERY_SOURCE_COUNT;
use crate::events::DisplayEvent;
use crate::idle::{PowerChange, ScreenPower};
use crate::indicators::HidIndicators;
use crate::layers::LayerRoller;
use crate::wpm::WpmGauge;

/// What the caller has to do after an update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Effects {
    /// Visible content changed.
    pub redraw: bool,
    /// Panel should be switched on or off.
    pub power: Option<PowerChange>,
    /// New brightness to apply and persist.
    pub brightness: Option<u8>,
    /// A peripheral just came back.
    pub reconnection: Option<Reconnection>,
}

pub struct ScreenState {
    roller: LayerRoller,
    batteries: BatteryBars,
    tracker: ReconnectTracker<BATTERY_SOURCE_COUNT>,
    wpm: WpmGauge,
    indicators: HidIndicators,
    brightness: u8,
    overlay: Overlay,
    power: ScreenPower,
}

impl ScreenState {
    pub fn new(roller: LayerRoller, brightness: u8, now_ms: u64) -> Self {
        Self::with_power(roller, brightness, ScreenPower::new(now_ms))
    }

    pub fn with_power(roller: LayerRoller, brightness: u8, power: ScreenPower) -> Self {
        Self {
            roller,
            batteries: [BatteryBar::hidden(); BATTERY_SOURCE_COUNT],
            tracker: ReconnectTracker::new(),
            wpm: WpmGauge::new(),
            indicators: HidIndicators::default(),
            brightness: brightness::clamp(brightness),
            overlay: Overlay::new(),
            power,
        }
    }

    /// Apply one event.
    pub fn apply(&mut self, event: DisplayEvent, now_ms: u64) -> Effects {
        let mut fx = Effects::default();

        match event {
            DisplayEvent::PeripheralBattery { peripheral, level } => {
                let source = battery::peripheral_source(peripheral);
                self.battery_sample(source, level, None, now_ms, &mut fx);
            }
            DisplayEvent::CentralBattery { level, usb_present } => {
                if let Some(source) = battery::dongle_source() {
                    self.battery_sample(source, level, Some(usb_present), now_ms, &mut fx);
                }
            }
            DisplayEvent::UsbPower { powered } => {
                if let Some(bar) = battery::dongle_source().and_then(|s| self.batteries.get_mut(s)) {
                    if bar.usb_present != powered {
                        bar.usb_present = powered;
                        fx.redraw = bar.level.is_some();
                    }
                }
            }
            DisplayEvent::LayerChanged { highest } => {
                fx.redraw = self.roller.select(usize::from(highest)).is_some();
            }
            DisplayEvent::HidIndicators(mask) => {
                let indicators = HidIndicators(mask);
                fx.redraw = indicators != self.indicators;
                self.indicators = indicators;
            }
            DisplayEvent::Wpm(wpm) => {
                fx.redraw = self.wpm.set(wpm);
            }
            DisplayEvent::Brightness(percent) => {
                let percent = brightness::clamp(percent);
                self.overlay.show(now_ms);
                fx.redraw = true;
                if percent != self.brightness {
                    self.brightness = percent;
                    fx.brightness = Some(percent);
                }
            }
        }

        if event.is_activity() {
            if let Some(change) = self.power.activity(now_ms) {
                fx.power = Some(change);
                fx.redraw = true;
            }
        }

        fx
    }

    /// Apply one event, then run the housekeeping that is due at `now_ms`.
    ///
    /// Keeps the idle timeout and overlay expiry moving while events arrive
    /// faster than the tick.
    pub fn update(&mut self, event: DisplayEvent, now_ms: u64) -> Effects {
        let fx = self.apply(event, now_ms);
        let due = self.tick(now_ms);
        Effects {
            redraw: fx.redraw || due.redraw,
            power: fx.power.or(due.power),
            ..fx
        }
    }

    /// Periodic housekeeping: overlay expiry and idle timeout.
    pub fn tick(&mut self, now_ms: u64) -> Effects {
        Effects {
            redraw: self.overlay.expire(now_ms),
            power: self.power.tick(now_ms),
            ..Effects::default()
        }
    }

    fn battery_sample(
        &mut self,
        source: usize,
        level: u8,
        usb_present: Option<bool>,
        now_ms: u64,
        fx: &mut Effects,
    ) {
        let Some(bar) = self.batteries.get_mut(source) else {
            return;
        };

        fx.reconnection = self.tracker.observe_detailed(source, level);

        let updated = BatteryBar {
            level: Some(level),
            usb_present: usb_present.unwrap_or(bar.usb_present),
        };
        fx.redraw = *bar != updated;
        *bar = updated;

        if fx.reconnection.is_some() {
            fx.power = self.power.wake(now_ms);
            fx.redraw = true;
        }
    }

    pub fn roller(&self) -> &LayerRoller {
        &self.roller
    }

    pub fn batteries(&self) -> &BatteryBars {
        &self.batteries
    }

    pub fn wpm(&self) -> &WpmGauge {
        &self.wpm
    }

    pub fn indicators(&self) -> HidIndicators {
        self.indicators
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Brightness to show in the overlay, while it is up.
    pub fn overlay(&self, now_ms: u64) -> Option<u8> {
        self.overlay
            .is_visible(now_ms)
            .then_some(self.brightness)
    }

    pub fn is_on(&self) -> bool {
        self.power.is_on()
    }
}
