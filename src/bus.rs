//! Event channels between the keyboard side and the screen task.
//!
//! Keyboard-side code (split central, HID stack, WPM counter) calls
//! [`publish`]; the screen task is the only receiver.

use crate::config::EVENT_QUEUE_DEPTH;
use core::cell::RefCell;

use crate::events::{DisplayEvent, DropLog, DropReport};
use crate::ui::ButtonEvent;
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;

/// Depth of the button event queue.
pub const BUTTON_QUEUE_DEPTH: usize = 4;

/// Keyboard state changes for the screen.
pub static EVENTS: Channel<CriticalSectionRawMutex, DisplayEvent, EVENT_QUEUE_DEPTH> =
    Channel::new();

/// Debounced button presses.
pub static BUTTONS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();

static DROPS: Mutex<CriticalSectionRawMutex, RefCell<DropLog>> =
    Mutex::new(RefCell::new(DropLog::new()));

/// Queue an event for the screen without blocking.
///
/// When the queue is full the event is dropped. Only the first drop of a
/// run is logged, so a screen task that never started (no panel) stays
/// quiet after one warning.
pub fn publish(event: DisplayEvent) {
    let sent = EVENTS.try_send(event).is_ok();
    DROPS.lock(|drops| {
        let mut drops = drops.borrow_mut();
        if sent {
            if let Some(lost) = drops.delivered() {
                info!("Display event queue drained - {} events were dropped", lost);
            }
        } else if drops.dropped() == DropReport::Started {
            warn!("Display event queue full - dropping events, first {:?}", event);
        }
    });
}
