// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Indicator outputs: single status LEDs and the 3-bit light bar.

use embedded_hal::digital::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low().ok(),
        };
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

/// Highest value the light bar can show.
pub const LIGHT_BAR_MAX: u8 = 7;

/// Eight-LED light bar behind a 3-to-8 decoder.
///
/// Only one LED can be lit at a time; the three select lines carry the binary index, `b0` being the
/// least significant.
pub struct LightBar<B0, B1, B2> {
    b0: B0,
    b1: B1,
    b2: B2,
    value: u8,
}

impl<B0: OutputPin, B1: OutputPin, B2: OutputPin> LightBar<B0, B1, B2> {
    /// Take the select lines and light LED 0.
    pub fn new(b0: B0, b1: B1, b2: B2) -> Self {
        let mut bar = Self {
            b0,
            b1,
            b2,
            value: 0,
        };
        bar.write(0);
        bar
    }

    /// Light LED `n`. Values above [`LIGHT_BAR_MAX`] leave the bar unchanged.
    pub fn show(&mut self, n: u8) {
        if n <= LIGHT_BAR_MAX {
            self.write(n);
        }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    fn write(&mut self, n: u8) {
        set_level(&mut self.b0, n & 0b001 != 0);
        set_level(&mut self.b1, n & 0b010 != 0);
        set_level(&mut self.b2, n & 0b100 != 0);
        self.value = n;
    }
}

fn set_level<P: OutputPin>(pin: &mut P, high: bool) {
    if high {
        pin.set_high().ok();
    } else {
        pin.set_low().ok();
    }
}
