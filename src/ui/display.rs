//! Two-digit seven-segment readout.
//!
//! Each digit is an 8-line bus: seven segment lines plus one indicator LED
//! in bit 7. The tens bus carries the weighing-mode LED, the units bus the
//! overweight LED. Glyph writes go through a read-modify-write so the
//! indicator survives every digit update.

use embedded_hal::digital::{OutputPin, PinState};

use super::segments::{self, Glyph, INDICATOR_MASK};
use crate::config::DISPLAY_LIMIT;
use crate::controller::DeviceState;
use crate::error::Error;

/// One 8-bit output bus.
pub trait DigitPort {
    /// Value last driven onto the bus.
    fn read(&self) -> u8;

    /// Drive all eight lines.
    fn write(&mut self, value: u8) -> Result<(), Error>;
}

/// A [`DigitPort`] built from eight GPIO lines, bit 0 first.
///
/// GPIO outputs cannot be read back portably, so the last written value is
/// latched in software.
pub struct PinPort<P> {
    pins: [P; 8],
    latch: u8,
}

impl<P: OutputPin> PinPort<P> {
    /// Take ownership of the lines and drive `initial` onto them.
    pub fn new(pins: [P; 8], initial: u8) -> Result<Self, Error> {
        let mut port = Self { pins, latch: 0 };
        port.write(initial)?;
        Ok(port)
    }

    #[cfg(test)]
    pub fn pins(&self) -> &[P; 8] {
        &self.pins
    }
}

impl<P: OutputPin> DigitPort for PinPort<P> {
    fn read(&self) -> u8 {
        self.latch
    }

    fn write(&mut self, value: u8) -> Result<(), Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            let state = PinState::from(value & (1 << bit) != 0);
            pin.set_state(state).map_err(|_| Error::Pin)?;
        }
        self.latch = value;
        Ok(())
    }
}

/// Split a value into the glyphs for the tens and units positions.
///
/// Anything that does not fit on two digits becomes "Er".
pub fn number_glyphs(value: u16) -> (Glyph, Glyph) {
    if value < DISPLAY_LIMIT {
        (
            Glyph::Digit((value / 10) as u8),
            Glyph::Digit((value % 10) as u8),
        )
    } else {
        (Glyph::E, Glyph::R)
    }
}

/// Debug codes used when the display shows the device state.
pub fn state_glyphs(state: DeviceState) -> (Glyph, Glyph) {
    match state {
        DeviceState::Idle => (Glyph::Digit(0), Glyph::Digit(0)),
        DeviceState::Weighing => (Glyph::Digit(0), Glyph::Digit(1)),
        DeviceState::Sleeping => (Glyph::Digit(9), Glyph::Digit(9)),
        DeviceState::ResetRequested => (Glyph::Digit(1), Glyph::Digit(0)),
    }
}

/// The pair of digit buses.
pub struct Readout<P> {
    tens: P,
    units: P,
}

impl<P: DigitPort> Readout<P> {
    pub fn new(tens: P, units: P) -> Self {
        Self { tens, units }
    }

    /// Show two glyphs, leaving both indicator bits alone.
    pub fn show(&mut self, tens: Glyph, units: Glyph) -> Result<(), Error> {
        put_glyph(&mut self.tens, tens)?;
        put_glyph(&mut self.units, units)
    }

    /// Show a two-digit number, or "Er" when it is out of range.
    pub fn show_number(&mut self, value: u16) -> Result<(), Error> {
        let (tens, units) = number_glyphs(value);
        self.show(tens, units)
    }

    pub fn show_state(&mut self, state: DeviceState) -> Result<(), Error> {
        let (tens, units) = state_glyphs(state);
        self.show(tens, units)
    }

    pub fn set_weighing(&mut self, on: bool) -> Result<(), Error> {
        put_indicator(&mut self.tens, on)
    }

    pub fn set_overweight(&mut self, on: bool) -> Result<(), Error> {
        put_indicator(&mut self.units, on)
    }

    /// Both digits dark and both indicators off. Also the power-on value.
    pub fn blank(&mut self) -> Result<(), Error> {
        self.tens.write(segments::BLANK)?;
        self.units.write(segments::BLANK)
    }

    pub fn weighing(&self) -> bool {
        self.tens.read() & INDICATOR_MASK != 0
    }

    pub fn overweight(&self) -> bool {
        self.units.read() & INDICATOR_MASK != 0
    }

    pub fn ports(&self) -> (&P, &P) {
        (&self.tens, &self.units)
    }
}

fn put_glyph<P: DigitPort>(port: &mut P, glyph: Glyph) -> Result<(), Error> {
    let value = segments::merge(port.read(), glyph);
    port.write(value)
}

fn put_indicator<P: DigitPort>(port: &mut P, on: bool) -> Result<(), Error> {
    let current = port.read();
    let value = if on {
        current | INDICATOR_MASK
    } else {
        current & !INDICATOR_MASK
    };
    port.write(value)
}
