//! Brightness buttons.
//!
//! Two active-low buttons with internal pull-ups, one per direction. A
//! press becomes a `ButtonEvent` for the screen task, which turns it into a
//! `BRIGHTNESS_STEP` change, updates the contrast and shows the overlay.
//! Holding a button does not repeat; each step needs a fresh press.

use dongle_screen::bus::BUTTON_QUEUE_DEPTH;
use dongle_screen::config::BUTTON_DEBOUNCE_MS;
use dongle_screen::ui::ButtonEvent;
use defmt::debug;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

fn debounce() -> Timer {
    Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS))
}

/// Wait for a press that is still held after the debounce interval.
async fn pressed(button: &mut Input<'static>) {
    loop {
        button.wait_for_falling_edge().await;
        debounce().await;
        if button.is_low() {
            return;
        }
    }
}

/// Wait for the button to be let go, ignoring contact bounce.
async fn released(button: &mut Input<'static>) {
    button.wait_for_high().await;
    debounce().await;
}

/// Watch one brightness button and forward each debounced press as `event`.
///
/// `send` waits when the screen task is behind, so presses are never lost.
pub async fn button_task(
    pin: AnyPin,
    event: ButtonEvent,
    screen: Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>,
) -> ! {
    let mut button = Input::new(pin, Pull::Up);

    loop {
        pressed(&mut button).await;
        debug!("Brightness button: {}", event);
        screen.send(event).await;
        released(&mut button).await;
    }
}
