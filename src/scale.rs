//! Main-loop orchestration.
//!
//! [`Scale`] ties the controller to the readout and the hardware seams.
//! One call to [`Scale::step`] is one iteration of the firmware main loop:
//! pick the activity for the current state, drive the outputs, and consume
//! at most one button event.
//!
//! Button events are the only writer of controller state. They arrive
//! through an [`EventSource`] and are applied here, synchronously, between
//! outputs, so no state change can race a half-finished display update.

use crate::controller::{Controller, DeviceState, TargetOffset, Transition};
use crate::error::Error;
use crate::power_logic::{activity_for, Activity};
use crate::sampler::{to_weight, RawSample};
use crate::ui::display::{DigitPort, Readout};
use crate::ui::ButtonEvent;

/// Power/reset side of the board.
pub trait PowerControl {
    /// Bring the analog front-end (and whatever else the board owns) back to
    /// its boot configuration. Safe to call repeatedly.
    fn reinit(&mut self);

    /// Switch the analog front-end off until the next [`reinit`](Self::reinit).
    fn power_down_analog(&mut self);
}

/// Blocking single-shot analog acquisition.
#[allow(async_fn_in_trait)]
pub trait AnalogSource {
    /// Start a conversion and wait for it to complete. There is no timeout.
    async fn acquire(&mut self) -> RawSample;
}

/// Producer side of the button interrupt, as seen by the main loop.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    /// Halt until the next button event.
    async fn wait(&mut self) -> ButtonEvent;

    /// Take a pending event without waiting.
    fn try_next(&mut self) -> Option<ButtonEvent>;
}

/// What happened during one [`Scale::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub activity: Activity,
    /// Converted weight, for `Sample` steps.
    pub weight: Option<u16>,
    /// Event applied at the end of the step, if any.
    pub transition: Option<Transition>,
    /// First output error of the step. The step still ran to completion.
    pub output: Result<(), Error>,
}

/// The device: controller, two digit buses and the board.
pub struct Scale<P, B> {
    controller: Controller,
    readout: Readout<P>,
    board: B,
    show_state: bool,
}

impl<P, B> Scale<P, B>
where
    P: DigitPort,
    B: PowerControl + AnalogSource,
{
    /// `show_state` replaces numeric output with the state code.
    pub fn new(readout: Readout<P>, board: B, show_state: bool) -> Self {
        Self {
            controller: Controller::new(),
            readout,
            board,
            show_state,
        }
    }

    pub fn state(&self) -> DeviceState {
        self.controller.state()
    }

    pub fn target(&self) -> TargetOffset {
        self.controller.target()
    }

    pub fn readout(&self) -> &Readout<P> {
        &self.readout
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn activity(&self) -> Activity {
        activity_for(self.controller.state())
    }

    /// Full reinitialization: board first, then defaults, then a dark display.
    pub fn reinit(&mut self) -> Result<(), Error> {
        self.board.reinit();
        self.controller.complete_reset();
        self.readout.blank()
    }

    /// Apply a button event.
    ///
    /// Waking from `Sleeping` reinitializes everything first. The waking
    /// press is then applied to the fresh defaults if it is INCREMENT or
    /// DECREMENT; TOGGLE and SLEEP only wake, so the scale always lands in
    /// `Idle`. The returned transition is the wake itself.
    pub fn dispatch(&mut self, event: ButtonEvent) -> (Transition, Result<(), Error>) {
        let transition = self.controller.handle(event);
        if !transition.needs_reset() {
            return (transition, Ok(()));
        }

        let output = self.reinit();
        if matches!(event, ButtonEvent::Increment | ButtonEvent::Decrement) {
            self.controller.handle(event);
        }
        (transition, output)
    }

    /// Idle output: indicators off, target weight on the digits.
    pub fn show_idle(&mut self) -> Result<(), Error> {
        let weighing = self.readout.set_weighing(false);
        let overweight = self.readout.set_overweight(false);
        let digits = if self.show_state {
            self.readout.show_state(self.controller.state())
        } else {
            self.readout.show_number(self.controller.target().weight())
        };
        weighing.and(overweight).and(digits)
    }

    /// Weighing output for one raw sample. Returns the converted weight.
    pub fn show_sample(&mut self, raw: RawSample) -> (u16, Result<(), Error>) {
        let weight = to_weight(raw);
        let digits = if self.show_state {
            self.readout.show_state(self.controller.state())
        } else {
            self.readout.show_number(weight)
        };
        let overweight = self
            .readout
            .set_overweight(self.controller.is_overweight(weight));
        let weighing = self.readout.set_weighing(true);
        (weight, digits.and(overweight).and(weighing))
    }

    /// Sleep output: analog off, display dark.
    pub fn power_down(&mut self) -> Result<(), Error> {
        self.board.power_down_analog();
        self.readout.blank()
    }

    /// One main-loop iteration.
    ///
    /// Activities that halt wait in [`EventSource::wait`]; the others only
    /// pick up an event that is already pending.
    pub async fn step<E: EventSource>(&mut self, events: &mut E) -> StepReport {
        let activity = self.activity();
        let mut weight = None;

        let output = match activity {
            Activity::AwaitInput => self.show_idle(),
            Activity::Sample => {
                let raw = self.board.acquire().await;
                let (w, output) = self.show_sample(raw);
                weight = Some(w);
                output
            }
            Activity::PowerDown => self.power_down(),
            Activity::Reinitialize => self.reinit(),
        };

        let event = if activity.halts() {
            Some(events.wait().await)
        } else {
            events.try_next()
        };

        let (transition, output) = match event {
            Some(event) => {
                let (transition, dispatched) = self.dispatch(event);
                (Some(transition), output.and(dispatched))
            }
            None => (None, output),
        };

        StepReport {
            activity,
            weight,
            transition,
            output,
        }
    }
}
