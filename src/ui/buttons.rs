//! GPIO button bank driven by edge interrupts.
//!
//! Four tactile switches (active-low with internal pull-up):
//!   - INCREMENT - raise the target weight
//!   - DECREMENT - lower the target weight
//!   - TOGGLE    - start / stop weighing
//!   - SLEEP     - blank the display and power the analog side down
//!
//! A falling edge on any line wakes the task through GPIOTE. The whole bank
//! is then sampled with interrupts masked, reduced to one event by priority
//! and posted to the controller. There is no software debounce; a press
//! that arrives while the previous event is still queued is dropped.

use defmt::{debug, warn};
use embassy_futures::select::select4;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use scales::config::BUTTON_EVENT_QUEUE_DEPTH;
use scales::ui::input_logic::{post_event, ButtonLines};
use scales::ui::ButtonEvent;
use scales::{Error, EventSource};

/// Button interrupt → main loop.
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_QUEUE_DEPTH> =
    Channel::new();

/// The four inputs, in decode order.
pub struct ButtonBank {
    lines: [Input<'static>; 4],
}

impl ButtonBank {
    pub fn new(increment: AnyPin, decrement: AnyPin, toggle: AnyPin, sleep: AnyPin) -> Self {
        Self {
            lines: [
                Input::new(increment, Pull::Up),
                Input::new(decrement, Pull::Up),
                Input::new(toggle, Pull::Up),
                Input::new(sleep, Pull::Up),
            ],
        }
    }

    async fn wait_for_edge(&mut self) {
        let [inc, dec, toggle, sleep] = &mut self.lines;
        select4(
            inc.wait_for_falling_edge(),
            dec.wait_for_falling_edge(),
            toggle.wait_for_falling_edge(),
            sleep.wait_for_falling_edge(),
        )
        .await;
    }

    fn snapshot(&self) -> ButtonLines {
        let [inc, dec, toggle, sleep] = &self.lines;
        ButtonLines::from_levels([inc.is_high(), dec.is_high(), toggle.is_high(), sleep.is_high()])
    }
}

/// Sample the bank and post at most one event.
fn service(bank: &ButtonBank) -> (ButtonLines, Result<Option<ButtonEvent>, Error>) {
    cortex_m::interrupt::free(|_| {
        let lines = bank.snapshot();
        (lines, post_event(lines, &BUTTON_EVENTS))
    })
}

/// Run the button edge loop forever.
#[embassy_executor::task]
pub async fn button_task(mut bank: ButtonBank) -> ! {
    loop {
        bank.wait_for_edge().await;

        match service(&bank) {
            (lines, Ok(Some(event))) => debug!("Button: {} (lines {=u8:#b})", event, lines.bits()),
            // Edge already gone by the time we sampled.
            (_, Ok(None)) => {}
            (lines, Err(e)) => warn!("Button: dropped {=u8:#b}: {}", lines.bits(), e),
        }
    }
}

/// Main-loop side of [`BUTTON_EVENTS`].
pub struct ButtonEvents {
    rx: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_EVENT_QUEUE_DEPTH>,
}

impl ButtonEvents {
    pub fn new() -> Self {
        Self {
            rx: BUTTON_EVENTS.receiver(),
        }
    }
}

impl EventSource for ButtonEvents {
    async fn wait(&mut self) -> ButtonEvent {
        self.rx.receive().await
    }

    fn try_next(&mut self) -> Option<ButtonEvent> {
        self.rx.try_receive().ok()
    }
}
