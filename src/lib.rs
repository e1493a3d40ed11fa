//! Status screen logic for a split-keyboard dongle.
//!
//! Everything here is plain `no_std` logic that also builds on the host:
//! layer ordering for the roller, peripheral reconnection detection,
//! battery/WPM/lock-key presentation and the screen state machine that ties
//! them to incoming events.
//!
//! Usage: `cargo test` (no embedded hardware required).
//!
//! The firmware binary (`src/main.rs`, feature `embedded`) adds the SSD1306
//! driver, buttons, flash settings and the event channel on top.

#![cfg_attr(not(test), no_std)]

pub mod battery;
pub mod brightness;
pub mod config;
pub mod error;
pub mod events;
pub mod gauge;
pub mod idle;
pub mod indicators;
pub mod layers;
pub mod ui;
pub mod wpm;

pub use error::{Error, Result};
pub use events::DisplayEvent;

#[cfg(feature = "embedded")]
pub mod bus;
