//! Button line decoding.
//!
//! Four buttons share one input bank. On every edge the whole bank is
//! sampled and reduced to at most one event, checked in fixed priority:
//! INCREMENT, DECREMENT, TOGGLE, SLEEP.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use super::ButtonEvent;
use crate::error::Error;

/// Snapshot of the input bank, one bit per button (set = pressed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLines(u8);

impl ButtonLines {
    pub const INCREMENT: u8 = 1 << 0;
    pub const DECREMENT: u8 = 1 << 1;
    pub const TOGGLE: u8 = 1 << 2;
    pub const SLEEP: u8 = 1 << 3;

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0x0F)
    }

    /// Build from the raw pin levels, in pin order INCREMENT, DECREMENT,
    /// TOGGLE, SLEEP. Lines are active-low: `false` (low) means pressed.
    pub fn from_levels(levels: [bool; 4]) -> Self {
        let mut bits = 0u8;
        for (i, high) in levels.into_iter().enumerate() {
            if !high {
                bits |= 1 << i;
            }
        }
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Reduce the snapshot to the single highest-priority event.
    pub fn decode(self) -> Option<ButtonEvent> {
        if self.0 & Self::INCREMENT != 0 {
            Some(ButtonEvent::Increment)
        } else if self.0 & Self::DECREMENT != 0 {
            Some(ButtonEvent::Decrement)
        } else if self.0 & Self::TOGGLE != 0 {
            Some(ButtonEvent::ToggleWeighing)
        } else if self.0 & Self::SLEEP != 0 {
            Some(ButtonEvent::RequestSleep)
        } else {
            None
        }
    }
}

/// Decode a snapshot and post the event without blocking.
///
/// Returns the posted event, `None` for an empty snapshot, or
/// [`Error::EventQueueFull`] when the channel still holds an unread event.
/// The new press is dropped in that case; the pending one is kept.
pub fn post_event<M: RawMutex, const N: usize>(
    lines: ButtonLines,
    events: &Channel<M, ButtonEvent, N>,
) -> Result<Option<ButtonEvent>, Error> {
    match lines.decode() {
        Some(event) => events
            .try_send(event)
            .map(|_| Some(event))
            .map_err(|_| Error::EventQueueFull),
        None => Ok(None),
    }
}
