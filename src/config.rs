//! Application-wide constants and compile-time configuration.
//!
//! Pin assignments, widget limits and timing parameters live here so they
//! can be tuned in one place. Options that change behaviour rather than a
//! number are cargo features, surfaced here as `bool` / `usize` constants.

// Battery

/// Number of split peripherals reporting a battery level to the dongle.
pub const PERIPHERAL_COUNT: usize = 2;

/// Offset applied to peripheral battery sources.
///
/// With `dongle-battery` the dongle's own cell occupies source 0.
pub const SOURCE_OFFSET: usize = if DONGLE_BATTERY_ENABLED { 1 } else { 0 };

/// Whether the dongle's own battery is shown as source 0.
pub const DONGLE_BATTERY_ENABLED: bool = cfg!(feature = "dongle-battery");

/// Total battery sources tracked (peripherals plus optional dongle cell).
pub const BATTERY_SOURCE_COUNT: usize = PERIPHERAL_COUNT + SOURCE_OFFSET;

/// Battery bar range (percent).
pub const BATTERY_BAR_MIN: u8 = 0;
pub const BATTERY_BAR_MAX: u8 = 100;

// Layer roller

/// Upper bound on named layers the roller can hold.
pub const MAX_LAYERS: usize = 32;

/// Capacity of the concatenated, newline-delimited layer names.
pub const LAYER_NAMES_BUFFER_LEN: usize = 256;

/// Upper-case layer names before they reach the roller.
pub const LAYER_ROLLER_ALL_CAPS: bool = cfg!(feature = "layer-roller-all-caps");

/// Rows visible in the roller (selected row in the middle).
pub const LAYER_ROLLER_VISIBLE_ROWS: usize = 3;

/// Layer names of the keymap, indexed by logical layer.
///
/// An empty entry is shown as its display-slot number.
pub const LAYER_NAMES: &[&str] = &["Base", "Nav", "Sym", "Num", "Fun", ""];

// WPM

/// Upper end of the WPM bar; faster typing pins the bar full.
pub const WPM_BAR_MAX: u8 = 160;

// Brightness

/// Brightness used until a stored value is loaded (percent).
pub const BRIGHTNESS_DEFAULT: u8 = 80;

/// Lowest brightness reachable from the buttons; 0 would blank the panel.
pub const BRIGHTNESS_MIN: u8 = 10;

pub const BRIGHTNESS_MAX: u8 = 100;

/// Brightness change per button press (percent).
pub const BRIGHTNESS_STEP: u8 = 10;

/// How long the brightness overlay stays on screen (ms).
pub const BRIGHTNESS_FADE_TIME_MS: u64 = 500;

/// Quiet period after the last brightness change before it is written to
/// flash (ms).
pub const BRIGHTNESS_SAVE_DELAY_MS: u64 = 2_000;

// Screen power

/// Inactivity timeout before the OLED is switched off (seconds). 0 = never.
pub const SCREEN_IDLE_TIMEOUT_SECS: u64 = 30;

/// Screen task housekeeping period (ms).
pub const SCREEN_TICK_MS: u64 = 100;

// Event bus

/// Depth of the display event queue.
pub const EVENT_QUEUE_DEPTH: usize = 16;

// GPIO pin assignments (nRF52840-DK defaults)
//
// Logical names only; the concrete pins are picked in `main.rs`.
//
//   Button BRIGHTNESS UP   → P0.11
//   Button BRIGHTNESS DOWN → P0.12
//   I²C SDA                → P0.26
//   I²C SCL                → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

// Settings storage

/// Flash page index where settings storage starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for settings storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;
