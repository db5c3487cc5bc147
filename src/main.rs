//! Scale firmware for nRF52840.
//!
//! Tasks:
//! - `button_task`: GPIOTE edges on the button bank → event channel
//! - main: the control loop (`Scale::step`) forever
//!
//! The main loop halts in WFE whenever it waits for a button, which is the
//! only low-power mechanism: Idle and Sleeping both just await the channel.
//!
//! DEFMT_LOG=debug cargo run --release --features embedded

#![no_std]
#![no_main]

#[path = "ui/buttons.rs"]
mod buttons;
mod power;

use buttons::{ButtonBank, ButtonEvents};
use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::config::Config;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::interrupt::Priority;
use panic_probe as _;
use power::PowerManager;
use scales::config::SHOW_STATE_ON_DISPLAY;
use scales::ui::display::{PinPort, Readout};
use scales::ui::segments::BLANK;
use scales::Scale;

fn line(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::High, OutputDrive::Standard)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut config = Config::default();
    // Both tasks share the thread-mode executor. GPIOTE priority only decides
    // how soon the edge waker fires; `button_task` itself runs at the next
    // await point of the main loop, e.g. while a conversion is pending.
    config.gpiote_interrupt_priority = Priority::P2;
    config.time_interrupt_priority = Priority::P3;
    let p = embassy_nrf::init(config);

    info!("scales: boot");

    let tens = unwrap!(PinPort::new(
        [
            line(p.P1_01.degrade()),
            line(p.P1_02.degrade()),
            line(p.P1_03.degrade()),
            line(p.P1_04.degrade()),
            line(p.P1_05.degrade()),
            line(p.P1_06.degrade()),
            line(p.P1_07.degrade()),
            line(p.P1_08.degrade()),
        ],
        BLANK,
    ));
    let units = unwrap!(PinPort::new(
        [
            line(p.P0_13.degrade()),
            line(p.P0_14.degrade()),
            line(p.P0_15.degrade()),
            line(p.P0_16.degrade()),
            line(p.P0_17.degrade()),
            line(p.P0_18.degrade()),
            line(p.P0_19.degrade()),
            line(p.P0_20.degrade()),
        ],
        BLANK,
    ));

    let bank = ButtonBank::new(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
        p.P0_25.degrade(),
    );
    unwrap!(spawner.spawn(buttons::button_task(bank)));

    let power = PowerManager::new(p.SAADC, p.P0_02);
    let mut scale = Scale::new(Readout::new(tens, units), power, SHOW_STATE_ON_DISPLAY);
    if let Err(e) = scale.reinit() {
        warn!("Display: {}", e);
    }
    info!(
        "scales: {}, target {}",
        scale.state(),
        scale.target().weight()
    );

    let mut events = ButtonEvents::new();
    loop {
        let report = scale.step(&mut events).await;

        if let Some(t) = report.transition {
            if t.needs_reset() {
                info!(
                    "State: {:?} -> reset -> {:?}, target {}",
                    t.from,
                    scale.state(),
                    scale.target().weight()
                );
            } else {
                info!("State: {:?} -> {:?}, target {}", t.from, t.to, t.target.weight());
            }
        }
        if let Err(e) = report.output {
            warn!("Display: {} during {:?}", e, report.activity);
        }
    }
}
