//! Integration tests for dongle-screen host-testable logic.

use dongle_screen::battery::ReconnectTracker;
use dongle_screen::config::SOURCE_OFFSET;
use dongle_screen::idle::{PowerChange, ScreenPower};
use dongle_screen::layers::{LayerRoller, StaticLayerNames};
use dongle_screen::ui::{ButtonEvent, ScreenState};
use dongle_screen::DisplayEvent;

const NAMES: StaticLayerNames = StaticLayerNames(&["Base", "Nav", "", "Num", "Fun", "Game"]);

fn screen() -> ScreenState {
    let roller = LayerRoller::new(&NAMES, false).expect("roller");
    ScreenState::with_power(roller, 80, ScreenPower::with_timeout(0, 30))
}

#[test]
fn roller_text_in_display_order() {
    let roller = LayerRoller::new(&NAMES, false).unwrap();
    // Unnamed logical layer 2 sits at slot 4.
    assert_eq!(roller.text(), "Game\nNum\nNav\nBase\n4\nFun");
    assert_eq!(roller.label(roller.selected()), Some("Base"));
}

#[test]
fn reconnection_literal_cases() {
    let mut t = ReconnectTracker::<4>::new();

    t.observe(0, 0);
    assert!(t.observe(0, 55));

    assert!(t.observe(1, 75));

    t.observe(2, 60);
    assert!(!t.observe(2, 40));

    t.observe(3, 0);
    assert!(!t.observe(3, 0));
}

#[test]
fn out_of_range_source_keeps_state() {
    let mut t = ReconnectTracker::<3>::new();
    t.observe(0, 10);
    t.observe(1, 0);
    t.observe(2, 90);

    assert!(!t.observe(99, 50));
    assert_eq!(t.last_level(0), Some(10));
    assert_eq!(t.last_level(1), Some(0));
    assert_eq!(t.last_level(2), Some(90));
}

#[test]
fn peripheral_drop_and_return_wakes_sleeping_screen() {
    let mut s = screen();

    s.apply(
        DisplayEvent::PeripheralBattery {
            peripheral: 0,
            level: 64,
        },
        0,
    );
    s.apply(
        DisplayEvent::PeripheralBattery {
            peripheral: 0,
            level: 0,
        },
        5_000,
    );
    assert_eq!(s.tick(30_000).power, Some(PowerChange::TurnedOff));

    let fx = s.apply(
        DisplayEvent::PeripheralBattery {
            peripheral: 0,
            level: 63,
        },
        60_000,
    );
    assert_eq!(fx.power, Some(PowerChange::TurnedOn));
    assert_eq!(s.batteries()[SOURCE_OFFSET].level, Some(63));
}

#[test]
fn typing_session() {
    let mut s = screen();

    assert!(s.apply(DisplayEvent::LayerChanged { highest: 2 }, 100).redraw);
    assert_eq!(s.roller().label(s.roller().selected()), Some("4"));

    assert!(s.apply(DisplayEvent::Wpm(72), 200).redraw);
    assert!(s.apply(DisplayEvent::HidIndicators(0b010), 300).redraw);
    assert!(s.indicators().caps_lock());

    // Back to base.
    assert!(s.apply(DisplayEvent::LayerChanged { highest: 0 }, 400).redraw);
    assert_eq!(s.roller().selected(), 3);
}

#[test]
fn button_presses_step_brightness() {
    let mut s = screen();

    let up = ButtonEvent::BrightnessUp.apply(s.brightness());
    let fx = s.apply(DisplayEvent::Brightness(up), 0);
    assert_eq!(fx.brightness, Some(90));
    assert_eq!(s.overlay(0), Some(90));

    let down = ButtonEvent::BrightnessDown.apply(s.brightness());
    let fx = s.apply(DisplayEvent::Brightness(down), 10);
    assert_eq!(fx.brightness, Some(80));
}
