//! Application-wide constants and compile-time configuration.
//!
//! All target-weight bounds, calibration constants and display policy
//! live here so they can be tuned in one place.

// Target weight

/// Lowest settable target weight.
pub const NUMBER_MIN: u8 = 5;

/// Highest settable target weight.
pub const NUMBER_MAX: u8 = 30;

/// Largest target offset; offsets live in `0..=TARGET_RANGE`.
pub const TARGET_RANGE: u8 = NUMBER_MAX - NUMBER_MIN;

/// Target weight restored at boot and after every reset.
pub const DEFAULT_TARGET_WEIGHT: u8 = 23;

// Analog front-end

/// SAADC resolution in bits. Samples are `0..(1 << ADC_RESOLUTION_BITS)`.
pub const ADC_RESOLUTION_BITS: u8 = 10;

/// Added before the division so it rounds to nearest.
pub const SAMPLE_ROUNDING: u16 = 5;

/// ×10 amplifier gain times the 2:1 mechanical scale (full scale = 50 units).
pub const SAMPLE_DIVISOR: u16 = 20;

// Display

/// First value that no longer fits on two digits and renders as "Er".
pub const DISPLAY_LIMIT: u16 = 100;

/// Render the current device state instead of the weight (bring-up aid).
pub const SHOW_STATE_ON_DISPLAY: bool = false;

// Buttons

/// Pending button events the controller can hold. A press arriving while the
/// queue is full is dropped.
pub const BUTTON_EVENT_QUEUE_DEPTH: usize = 1;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for your custom PCB.
//
//   Button INCREMENT   → P0.11  (active-low, pull-up)
//   Button DECREMENT   → P0.12  (active-low, pull-up)
//   Button TOGGLE      → P0.24  (active-low, pull-up)
//   Button SLEEP       → P0.25  (active-low, pull-up)
//   Tens bus  a..g, WM → P1.01 .. P1.08  (bit 7 = weighing-mode LED)
//   Units bus a..g, OW → P0.13 .. P0.20  (bit 7 = overweight LED)
//   Load cell amp      → P0.02 / AIN0
