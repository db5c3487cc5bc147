//! Power/reset management - owns the SAADC and its enable bit.
//!
//! Implements:
//! - Analog front-end configuration (reference, gain, acquisition time)
//! - Front-end power down while sleeping
//! - Reinitialization at boot and on every wake
//!
//! Pin direction and button pull-ups are fixed by the typestate
//! constructors in `main.rs` and survive every reinit; the segment buses
//! are reset by `Scale::reinit` itself.
//!
//! nRF52840 power while halted in WFE:
//! - SAADC enabled: ~1 mA on the analog rail
//! - SAADC disabled: GPIOTE port event only (~2 µA)

use defmt::{debug, info, trace};
use embassy_nrf::peripherals::{P0_02, SAADC};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::{bind_interrupts, pac};
use scales::sampler::{self, RawSample};
use scales::{AnalogSource, PowerControl};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

/// Power state of the analog front-end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum AnalogPower {
    On,
    Off,
}

/// Power manager: the single owner of the SAADC.
pub struct PowerManager {
    adc: Saadc<'static, 1>,
    analog: AnalogPower,
    reinits: u32,
}

impl PowerManager {
    /// Configure AIN0 single-ended against VDD/4 with gain 1/4, so the
    /// full VDD swing maps onto the 10-bit range.
    pub fn new(saadc: SAADC, ain: P0_02) -> Self {
        let mut config = saadc::Config::default();
        config.resolution = saadc::Resolution::_10BIT;
        config.oversample = saadc::Oversample::BYPASS;

        let mut channel = ChannelConfig::single_ended(ain);
        channel.reference = saadc::Reference::VDD1_4;
        channel.gain = saadc::Gain::GAIN1_4;
        channel.time = saadc::Time::_10US;

        Self {
            adc: Saadc::new(saadc, Irqs, config, [channel]),
            analog: AnalogPower::On,
            reinits: 0,
        }
    }

    fn set_analog(&mut self, power: AnalogPower) {
        pac::SAADC
            .enable()
            .write(|w| w.set_enable(power == AnalogPower::On));
        if power != self.analog {
            debug!("Power: analog {:?} -> {:?}", self.analog, power);
            self.analog = power;
        }
    }
}

impl PowerControl for PowerManager {
    fn reinit(&mut self) {
        self.set_analog(AnalogPower::On);
        self.reinits = self.reinits.wrapping_add(1);
        info!("Power: reinit #{}", self.reinits);
    }

    fn power_down_analog(&mut self) {
        self.set_analog(AnalogPower::Off);
    }
}

impl AnalogSource for PowerManager {
    async fn acquire(&mut self) -> RawSample {
        let mut buf = [0i16; 1];
        self.adc.sample(&mut buf).await;
        trace!("SAADC: {}", buf[0]);
        sampler::from_signed(buf[0])
    }
}
