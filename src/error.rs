//! Unified error type for dongle-screen.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for on-target
//! logging.

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Layers
    /// The keymap exposes no named layers.
    NoLayers,

    /// More layers than the roller can hold (carries the requested count).
    TooManyLayers(usize),

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    // Storage
    /// Flash read/write/erase failed.
    Storage,
}

pub type Result<T> = core::result::Result<T, Error>;
