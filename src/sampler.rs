//! Raw analog sample → weight conversion.
//!
//! The amplifier in front of AIN0 has a ×10 gain and the platform is built
//! so that a full-scale reading corresponds to 50 units. Both factors fold
//! into one integer divisor; the conversion must stay bit-exact with the
//! original calibration.

use crate::config::{ADC_RESOLUTION_BITS, SAMPLE_DIVISOR, SAMPLE_ROUNDING};

/// One unsigned conversion result in the native ADC resolution.
pub type RawSample = u16;

/// Largest value the converter can produce.
pub const RAW_SAMPLE_MAX: RawSample = (1 << ADC_RESOLUTION_BITS) - 1;

/// Convert a raw sample to weight units, rounding to nearest.
///
/// Defined for every `RawSample`, not just the converter's range.
pub const fn to_weight(raw: RawSample) -> u16 {
    ((raw as u32 + SAMPLE_ROUNDING as u32) / SAMPLE_DIVISOR as u32) as u16
}

/// Clamp a signed SAADC reading into the unsigned sample range.
///
/// Single-ended inputs can read slightly below zero due to offset error.
pub fn from_signed(reading: i16) -> RawSample {
    if reading <= 0 {
        0
    } else {
        (reading as u16).min(RAW_SAMPLE_MAX)
    }
}
