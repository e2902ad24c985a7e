// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the Nucleo-F767ZI carrying the fuel cell car.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiob, gpiod, gpioe, Alternate, Analog, Floating, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

pub struct BoardPins {
    pub leds: Leds,
    pub usart3: Usart3Pins,
    pub car: CarPins,
    pub reflect: ReflectPins,
}

pub struct Leds {
    pub red: gpiob::PB14<Output<PushPull>>, // LD3, status
}

/// ST-LINK virtual COM port.
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

pub struct CarPins {
    /// Bit-banged line to the motor controller input
    pub motor_tx: gpioe::PE13<Output<PushPull>>,
    /// Start button, pulls to ground when pressed
    pub button: gpioe::PE14<Input<PullUp>>,
    /// Bumper microswitch
    pub bumper: gpioe::PE11<Input<Floating>>,
    pub bar0: gpioe::PE2<Output<PushPull>>,
    pub bar1: gpioe::PE4<Output<PushPull>>,
    pub bar2: gpioe::PE5<Output<PushPull>>,
}

/// Reflectance sensors on ADC1_IN4 (left) and ADC1_IN5 (right).
pub struct ReflectPins {
    pub left: gpioa::PA4<Analog>,
    pub right: gpioa::PA5<Analog>,
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: Leds {
                red: gpiob.pb14.into_push_pull_output(),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            car: CarPins {
                motor_tx: gpioe.pe13.into_push_pull_output(),
                button: gpioe.pe14.into_pull_up_input(),
                bumper: gpioe.pe11.into_floating_input(),
                bar0: gpioe.pe2.into_push_pull_output(),
                bar1: gpioe.pe4.into_push_pull_output(),
                bar2: gpioe.pe5.into_push_pull_output(),
            },

            reflect: ReflectPins {
                left: gpioa.pa4.into_analog(),
                right: gpioa.pa5.into_analog(),
            },
        }
    }
}
