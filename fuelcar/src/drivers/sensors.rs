// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sensor board: start button, bumper microswitch and two reflectance sensors.
//!
//! Wiring conventions:
//! - Button: active-low with pull-up. Reported as 1 while pressed.
//! - Bumper: reported at raw pin level.
//! - Reflectance: phototransistor pulls the input down as reflectance rises, so readings are
//!   reported as `1023 - raw` (higher = more reflective surface).

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::hw::adc::{self, AnalogConverter, ADC_MAX};

/// Converter channel of the left reflectance sensor.
pub const REFLECT_1_CHANNEL: u8 = 4;
/// Converter channel of the right reflectance sensor.
pub const REFLECT_2_CHANNEL: u8 = 5;

/// Every input the car can read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sensor {
    Bumper,
    Button,
    /// Left reflectance sensor.
    Reflect1,
    /// Right reflectance sensor.
    Reflect2,
}

/// Blocking access to the car's inputs.
pub struct SensorBoard<BTN, BMP, ADC> {
    button: BTN,
    bumper: BMP,
    adc: ADC,
}

impl<BTN, BMP, ADC> SensorBoard<BTN, BMP, ADC>
where
    BTN: InputPin<Error = Infallible>,
    BMP: InputPin<Error = Infallible>,
    ADC: AnalogConverter,
{
    pub fn new(button: BTN, bumper: BMP, adc: ADC) -> Self {
        Self {
            button,
            bumper,
            adc,
        }
    }

    /// Read one sensor. Digital inputs return 0 or 1, reflectance returns 0..=1023.
    ///
    /// Reflectance reads block until the converter finishes.
    pub fn read(&mut self, sensor: Sensor) -> u16 {
        match sensor {
            Sensor::Bumper => level(&mut self.bumper) as u16,
            Sensor::Button => (!level(&mut self.button)) as u16,
            Sensor::Reflect1 => self.reflect(REFLECT_1_CHANNEL),
            Sensor::Reflect2 => self.reflect(REFLECT_2_CHANNEL),
        }
    }

    #[inline]
    pub fn button_pressed(&mut self) -> bool {
        self.read(Sensor::Button) == 1
    }

    #[inline]
    pub fn bumper_closed(&mut self) -> bool {
        self.read(Sensor::Bumper) == 1
    }

    /// Sample both reflectance sensors, left then right.
    pub fn reflectance(&mut self) -> (u16, u16) {
        (self.read(Sensor::Reflect1), self.read(Sensor::Reflect2))
    }

    fn reflect(&mut self, channel: u8) -> u16 {
        ADC_MAX - adc::convert(&mut self.adc, channel)
    }
}

fn level<P: InputPin<Error = Infallible>>(pin: &mut P) -> bool {
    match pin.is_high() {
        Ok(high) => high,
        Err(never) => match never {},
    }
}
