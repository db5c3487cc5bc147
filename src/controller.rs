//! Device state machine.
//!
//! Owns the only persistent control state: which mode the scale is in and
//! the configured target offset. Mutated exclusively by button events.
//!
//! | Current  | Event          | Next                    |
//! |----------|----------------|-------------------------|
//! | any      | Increment      | Idle, offset + 1        |
//! | any      | Decrement      | Idle, offset - 1        |
//! | Idle     | ToggleWeighing | Weighing                |
//! | Weighing | ToggleWeighing | Idle                    |
//! | any      | RequestSleep   | Sleeping                |
//! | Sleeping | any            | ResetRequested (→ Idle) |
//!
//! On wake the caller reinitializes and then re-applies an INCREMENT or
//! DECREMENT press to the defaults (see `Scale::dispatch`).

use crate::config::{DEFAULT_TARGET_WEIGHT, NUMBER_MIN, TARGET_RANGE};
use crate::ui::ButtonEvent;

/// Operating mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Showing the target weight, waiting for a button.
    Idle,
    /// Free-running sampling and weight display.
    Weighing,
    /// Display dark, analog front-end off.
    Sleeping,
    /// Transient: peripherals must be reinitialized, then back to `Idle`.
    ResetRequested,
}

/// Target weight stored as an offset above [`NUMBER_MIN`].
///
/// Always in `0..=TARGET_RANGE`; stepping wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TargetOffset(u8);

impl TargetOffset {
    const MODULUS: u8 = TARGET_RANGE + 1;

    /// Offset for [`DEFAULT_TARGET_WEIGHT`].
    pub const DEFAULT: Self = Self(DEFAULT_TARGET_WEIGHT - NUMBER_MIN);

    /// Build from a raw offset, wrapping values past the range.
    pub const fn new(offset: u8) -> Self {
        Self(offset % Self::MODULUS)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The weight this offset stands for.
    pub const fn weight(self) -> u16 {
        self.0 as u16 + NUMBER_MIN as u16
    }

    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::MODULUS)
    }

    pub const fn prev(self) -> Self {
        Self((self.0 + Self::MODULUS - 1) % Self::MODULUS)
    }
}

impl Default for TargetOffset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of feeding one event to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: DeviceState,
    pub to: DeviceState,
    pub target: TargetOffset,
}

impl Transition {
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }

    /// The caller has to reinitialize the peripherals and then call
    /// [`Controller::complete_reset`].
    pub fn needs_reset(&self) -> bool {
        self.to == DeviceState::ResetRequested
    }
}

/// Mode + target, one instance per device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Controller {
    state: DeviceState,
    target: TargetOffset,
}

impl Controller {
    /// Boot state: `Idle` with the default target.
    pub const fn new() -> Self {
        Self {
            state: DeviceState::Idle,
            target: TargetOffset::DEFAULT,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn target(&self) -> TargetOffset {
        self.target
    }

    /// Apply one button event.
    ///
    /// A press while `Sleeping` only requests the wake: the state becomes
    /// `ResetRequested` and the press is left for the caller to re-apply
    /// after [`complete_reset`](Self::complete_reset).
    pub fn handle(&mut self, event: ButtonEvent) -> Transition {
        let from = self.state;

        if from == DeviceState::Sleeping {
            self.state = DeviceState::ResetRequested;
        } else {
            match event {
                ButtonEvent::Increment => {
                    self.state = DeviceState::Idle;
                    self.target = self.target.next();
                }
                ButtonEvent::Decrement => {
                    self.state = DeviceState::Idle;
                    self.target = self.target.prev();
                }
                ButtonEvent::ToggleWeighing => {
                    self.state = match from {
                        DeviceState::Weighing => DeviceState::Idle,
                        _ => DeviceState::Weighing,
                    };
                }
                ButtonEvent::RequestSleep => self.state = DeviceState::Sleeping,
            }
        }

        Transition {
            from,
            to: self.state,
            target: self.target,
        }
    }

    /// Finish a reset: back to `Idle` with the default target.
    pub fn complete_reset(&mut self) {
        *self = Self::new();
    }

    /// True when `weight` is strictly above the target weight.
    pub fn is_overweight(&self, weight: u16) -> bool {
        weight > self.target.weight()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
