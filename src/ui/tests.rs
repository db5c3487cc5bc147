//! Unit tests for the glyph table and the two-digit readout.
//!
//! These tests run on the host (not embedded) and check segment patterns
//! and the indicator-preserving read-modify-write.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;

use super::display::{number_glyphs, state_glyphs, DigitPort, PinPort, Readout};
use super::segments::*;
use crate::controller::DeviceState;
use crate::error::Error;

/// Latching port that remembers every value written to it.
#[derive(Default)]
struct MockPort {
    value: u8,
    history: Vec<u8, 16>,
}

impl DigitPort for MockPort {
    fn read(&self) -> u8 {
        self.value
    }

    fn write(&mut self, value: u8) -> Result<(), Error> {
        self.value = value;
        let _ = self.history.push(value);
        Ok(())
    }
}

fn port(value: u8) -> MockPort {
    MockPort {
        value,
        history: Vec::new(),
    }
}

#[derive(Default)]
struct MockPin {
    high: bool,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = embedded_hal::digital::ErrorKind;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(embedded_hal::digital::ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(embedded_hal::digital::ErrorKind::Other)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Segment Table Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn digit_patterns_match_fixture() {
    let expected = [0x40, 0x79, 0x24, 0x30, 0x19, 0x12, 0x03, 0x78, 0x00, 0x10];
    for (d, pattern) in expected.iter().enumerate() {
        assert_eq!(encode(d as u8), *pattern, "digit {}", d);
        assert_eq!(Glyph::Digit(d as u8).segments(), *pattern);
    }
}

#[test]
fn error_letters() {
    assert_eq!(encode(b'E'), 0x06);
    assert_eq!(encode(b'r'), 0x2F);
    assert_eq!(Glyph::from_code(b'E'), Glyph::E);
    assert_eq!(Glyph::from_code(b'r'), Glyph::R);
}

#[test]
fn unknown_symbols_fall_back_to_e() {
    for code in [10u8, 42, b'R', b'e', 0x7F, 0xFF] {
        assert_eq!(encode(code), encode(b'E'), "code {}", code);
    }
    assert_eq!(Glyph::Digit(12).segments(), ERROR_E);
}

#[test]
fn patterns_never_touch_indicator_bit() {
    for code in 0..=u8::MAX {
        assert_eq!(encode(code) & INDICATOR_MASK, 0);
    }
    assert_eq!(Glyph::Blank.segments(), 0x7F);
}

#[test]
fn merge_keeps_indicator() {
    assert_eq!(merge(0x80, Glyph::Digit(8)), 0x80);
    assert_eq!(merge(0xFF, Glyph::Digit(0)), 0xC0);
    assert_eq!(merge(0x7F, Glyph::Digit(1)), 0x79);
}

// ═══════════════════════════════════════════════════════════════════════════
// Number Split Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn number_glyphs_two_digits() {
    assert_eq!(number_glyphs(0), (Glyph::Digit(0), Glyph::Digit(0)));
    assert_eq!(number_glyphs(7), (Glyph::Digit(0), Glyph::Digit(7)));
    assert_eq!(number_glyphs(23), (Glyph::Digit(2), Glyph::Digit(3)));
    assert_eq!(number_glyphs(99), (Glyph::Digit(9), Glyph::Digit(9)));
}

#[test]
fn number_glyphs_out_of_range_is_er() {
    assert_eq!(number_glyphs(100), (Glyph::E, Glyph::R));
    assert_eq!(number_glyphs(u16::MAX), (Glyph::E, Glyph::R));
}

#[test]
fn state_glyph_codes() {
    assert_eq!(state_glyphs(DeviceState::Idle), (Glyph::Digit(0), Glyph::Digit(0)));
    assert_eq!(state_glyphs(DeviceState::Weighing), (Glyph::Digit(0), Glyph::Digit(1)));
    assert_eq!(state_glyphs(DeviceState::Sleeping), (Glyph::Digit(9), Glyph::Digit(9)));
    assert_eq!(
        state_glyphs(DeviceState::ResetRequested),
        (Glyph::Digit(1), Glyph::Digit(0))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// Readout Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn readout_digit_update_preserves_indicators() {
    let mut readout = Readout::new(port(0x80), port(0x80));
    readout.show_number(23).unwrap();

    let (tens, units) = readout.ports();
    assert_eq!(tens.read(), 0x80 | 0x24);
    assert_eq!(units.read(), 0x80 | 0x30);
    assert!(readout.weighing());
    assert!(readout.overweight());
}

#[test]
fn readout_indicators_are_independent() {
    let mut readout = Readout::new(port(BLANK), port(BLANK));
    readout.set_weighing(true).unwrap();
    assert!(readout.weighing());
    assert!(!readout.overweight());

    readout.set_overweight(true).unwrap();
    readout.set_weighing(false).unwrap();
    assert!(!readout.weighing());
    assert!(readout.overweight());

    let (tens, units) = readout.ports();
    assert_eq!(tens.read(), BLANK);
    assert_eq!(units.read(), 0x80 | BLANK);
}

#[test]
fn readout_error_pair() {
    let mut readout = Readout::new(port(0), port(0));
    readout.show_number(150).unwrap();
    let (tens, units) = readout.ports();
    assert_eq!(tens.read(), ERROR_E);
    assert_eq!(units.read(), ERROR_R);
}

#[test]
fn readout_blank_clears_everything() {
    let mut readout = Readout::new(port(0xFF), port(0x80));
    readout.blank().unwrap();
    let (tens, units) = readout.ports();
    assert_eq!(tens.read(), 0x7F);
    assert_eq!(units.read(), 0x7F);
    assert!(!readout.weighing());
    assert!(!readout.overweight());
}

#[test]
fn readout_writes_each_bus_once_per_glyph() {
    let mut readout = Readout::new(port(0), port(0));
    readout.show_number(42).unwrap();
    let (tens, units) = readout.ports();
    assert_eq!(tens.history.as_slice(), &[0x19]);
    assert_eq!(units.history.as_slice(), &[0x24]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Pin Port Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn pin_port_drives_bits_lsb_first() {
    let pins: [MockPin; 8] = Default::default();
    let mut port = PinPort::new(pins, BLANK).unwrap();
    assert_eq!(port.read(), BLANK);

    port.write(0x81).unwrap();
    assert_eq!(port.read(), 0x81);
    let levels: [bool; 8] = core::array::from_fn(|i| port.pins()[i].high);
    assert_eq!(levels, [true, false, false, false, false, false, false, true]);
}

#[test]
fn pin_port_reports_pin_errors() {
    let pins = [BrokenPin, BrokenPin, BrokenPin, BrokenPin, BrokenPin, BrokenPin, BrokenPin, BrokenPin];
    assert_eq!(PinPort::new(pins, 0x00).err(), Some(Error::Pin));
}
