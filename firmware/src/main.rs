// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fuel cell car firmware for the Nucleo-F767ZI.
//!
//! Brings up the board, then hands the pins to [`fuelcar::Vehicle`] which runs the course selected
//! at build time (see [`config`]).

#![no_main]
#![no_std]

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use fuelcar::drivers::SensorBoard;
use fuelcar::hw::{Led, LightBar};
use fuelcar::Vehicle;

mod adc;
mod config;
mod hal_compat;
mod pins;
mod usart;

use adc::Adc1;
use hal_compat::{BusyDelay, Compat};
use pins::BoardPins;
use usart::Usart;

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

    // USART3 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);
    usart.println("fuelcar up");
    usart.flush();

    // SysTick busy-wait
    let delay = BusyDelay::new(Delay::new(cp.SYST, clocks.sysclk().raw()));

    // Sensors
    let adc = Adc1::new(dp.ADC1, pins.reflect);
    let sensors = SensorBoard::new(Compat(pins.car.button), Compat(pins.car.bumper), adc);

    // Indicators
    let status = Led::active_high(Compat(pins.leds.red));
    let bar = LightBar::new(
        Compat(pins.car.bar0),
        Compat(pins.car.bar1),
        Compat(pins.car.bar2),
    );

    let vehicle = Vehicle::new(Compat(pins.car.motor_tx), delay, sensors, status, bar);
    vehicle.run(config::COURSE, &mut usart)
}
