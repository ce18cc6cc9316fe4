//! Hotplate - Reflow Hot Plate Controller Firmware
//!
//! Main firmware binary for an RP2040 board switching the plate element
//! through a MOSFET, with a bit-banged SSD1306 OLED and three buttons.
//!
//! Pin map:
//!
//! | GPIO | Function                          |
//! |------|-----------------------------------|
//! | 4    | Display data (SDA)                |
//! | 5    | Display clock (SCL)               |
//! | 10   | Increment button (active high)    |
//! | 11   | Decrement button (active high)    |
//! | 12   | Select button (active high)       |
//! | 15   | Heater MOSFET gate                |
//! | 26   | ADC0: plate temperature probe     |
//! | 27   | ADC1: supply voltage divider      |

#![no_std]
#![no_main]

use defmt::*;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use hotplate_core::config::ControllerConfig;
use hotplate_core::process::Controller;
use hotplate_core::sensors::Sensors;
use hotplate_drivers::bus::two_wire::DEFAULT_ADDRESS;
use hotplate_drivers::bus::{PinPair, TwoWire};
use hotplate_drivers::display::Ssd1306;
use hotplate_drivers::heater::GpioHeater;
use hotplate_drivers::input::Buttons;
use hotplate_hal_rp2040::adc::RpAdc;
use hotplate_hal_rp2040::flash::Rp2040ConfigStore;
use hotplate_hal_rp2040::gpio::{RpInput, RpOutput};

/// Heater gate polarity (true if the MOSFET driver is active-low)
const HEATER_ACTIVE_LOW: bool = false;

/// Minimum time each display bus level is held
const BUS_HOLD_NS: u32 = 1_250;

/// Main entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Hotplate firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Heater gate first so the element is off as early as possible
    let heater_level = if HEATER_ACTIVE_LOW { Level::High } else { Level::Low };
    let heater = GpioHeater::new(
        RpOutput::new(Output::new(p.PIN_15, heater_level)),
        HEATER_ACTIVE_LOW,
    );

    // Sensors
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let temperature = Channel::new_pin(p.PIN_26, Pull::None);
    let supply = Channel::new_pin(p.PIN_27, Pull::None);
    let sensors = Sensors::new(RpAdc::new(adc, temperature, supply));

    // Display on the bit-banged bus
    let lines = PinPair::new(
        RpOutput::new(Output::new(p.PIN_5, Level::High)),
        RpOutput::new(Output::new(p.PIN_4, Level::High)),
    );
    let bus = TwoWire::new(lines, Delay, DEFAULT_ADDRESS).with_hold_ns(BUS_HOLD_NS);
    let display = Ssd1306::new(bus);

    // Buttons
    let buttons = Buttons::new(
        RpInput::new(Input::new(p.PIN_10, Pull::Down)),
        RpInput::new(Input::new(p.PIN_11, Pull::Down)),
        RpInput::new(Input::new(p.PIN_12, Pull::Down)),
    );

    // Set-point storage
    let store = Rp2040ConfigStore::new(p.FLASH, p.DMA_CH0);

    info!("Peripherals ready");

    Controller::new(
        sensors,
        heater,
        display,
        buttons,
        store,
        Delay,
        ControllerConfig::default(),
    )
    .run()
}
