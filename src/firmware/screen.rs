//! Screen task - owns the display and the screen state.
//!
//! Waits on keyboard events, button presses and a housekeeping tick, feeds
//! them to `ScreenState` and carries out the resulting effects.

use crate::firmware::display::{self, Display};
use crate::firmware::storage::SettingsStore;
use defmt::{debug, info, warn};
use dongle_screen::battery::PriorState;
use dongle_screen::brightness::PendingSave;
use dongle_screen::bus;
use dongle_screen::config::SCREEN_TICK_MS;
use dongle_screen::idle::PowerChange;
use dongle_screen::ui::{Effects, ScreenState};
use dongle_screen::DisplayEvent;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Instant, Ticker};
use embedded_storage_async::nor_flash::NorFlash;

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

pub async fn run<I2C, F>(
    mut display: Display<I2C>,
    mut state: ScreenState,
    mut settings: SettingsStore,
    mut flash: F,
) -> !
where
    I2C: embedded_hal::i2c::I2c,
    F: NorFlash,
{
    if let Err(e) = display::draw(&mut display, &state, now_ms()) {
        warn!("Initial draw failed: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(SCREEN_TICK_MS));
    let mut pending_save = PendingSave::new();

    loop {
        let fx = match select3(
            bus::EVENTS.receive(),
            bus::BUTTONS.receive(),
            ticker.next(),
        )
        .await
        {
            Either3::First(event) => {
                debug!("Event: {:?}", event);
                state.update(event, now_ms())
            }
            Either3::Second(button) => {
                let percent = button.apply(state.brightness());
                state.update(DisplayEvent::Brightness(percent), now_ms())
            }
            Either3::Third(()) => state.tick(now_ms()),
        };

        let now = now_ms();
        handle_effects(&mut display, &state, &mut pending_save, fx, now);

        if pending_save.take_due(now) {
            settings.set_brightness(state.brightness());
            if let Err(e) = settings.save_to_flash(&mut flash).await {
                warn!("Brightness not persisted: {:?}", e);
            }
        }
    }
}

fn handle_effects<I2C>(
    display: &mut Display<I2C>,
    state: &ScreenState,
    pending_save: &mut PendingSave,
    fx: Effects,
    now: u64,
) where
    I2C: embedded_hal::i2c::I2c,
{
    if let Some(r) = fx.reconnection {
        match r.previous {
            PriorState::NeverSeen => {
                info!("Battery source {} reconnected at {}% (was never seen)", r.source, r.level)
            }
            PriorState::Disconnected => {
                info!("Battery source {} reconnected at {}% (was disconnected)", r.source, r.level)
            }
        }
    }

    if let Some(percent) = fx.brightness {
        info!("Brightness: {}%", percent);
        if let Err(e) = display::set_brightness(display, percent) {
            warn!("Brightness update failed: {:?}", e);
        }
        pending_save.schedule(now);
    }

    if let Some(change) = fx.power {
        info!("Screen: {:?}", change);
        if let Err(e) = display::set_power(display, change == PowerChange::TurnedOn) {
            warn!("Screen power change failed: {:?}", e);
        }
    }

    if fx.redraw && state.is_on() {
        if let Err(e) = display::draw(display, state, now) {
            warn!("Draw failed: {:?}", e);
        }
    }
}
