// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bridges from the HAL's `embedded-hal` 0.2 pins and the SysTick delay to the `embedded-hal` 1.0
//! traits the control core is written against.

use core::convert::Infallible;

use cortex_m::delay::Delay;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};
use embedded_hal_02::digital::v2 as hal02;

/// A HAL GPIO pin seen through the 1.0 digital traits.
pub struct Compat<P>(pub P);

impl<P> ErrorType for Compat<P> {
    type Error = Infallible;
}

impl<P: hal02::OutputPin<Error = Infallible>> OutputPin for Compat<P> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hal02::OutputPin::set_low(&mut self.0)
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        hal02::OutputPin::set_high(&mut self.0)
    }
}

impl<P: hal02::InputPin<Error = Infallible>> InputPin for Compat<P> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        hal02::InputPin::is_high(&self.0)
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        hal02::InputPin::is_low(&self.0)
    }
}

/// SysTick busy-wait delay.
pub struct BusyDelay {
    delay: Delay,
}

impl BusyDelay {
    pub fn new(delay: Delay) -> Self {
        Self { delay }
    }
}

impl DelayNs for BusyDelay {
    // Rounded up to whole microseconds
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
