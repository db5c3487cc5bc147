//! User interface subsystem - two seven-segment digits + four buttons.
//!
//! ## Components
//!
//! - **Segments**: glyph table for one digit position
//! - **Display**: tens/units buses, each sharing bit 7 with an indicator LED
//! - **Input logic**: reduces a snapshot of the button bank to one event
//!
//! The GPIO edge task that feeds button events lives in `buttons.rs` and is
//! only built into the embedded binary.

pub mod display;
pub mod input_logic;
pub mod segments;

#[cfg(test)]
mod tests;

/// Control action produced by a button press.
///
/// Listed in decode priority: when several lines are pressed together
/// only the first one in this order fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Increment,
    Decrement,
    ToggleWeighing,
    RequestSleep,
}
