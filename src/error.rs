//! Unified error type for the scale firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! None of these ever reach the user; the display falls back to "Er"
//! and the firmware keeps running.

/// Internal error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A segment or indicator line could not be driven.
    Pin,

    /// A button press arrived while the previous one was still pending.
    EventQueueFull,
}
