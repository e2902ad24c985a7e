// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Course 3: open-loop curve method.
//!
//! Motor A runs at a fixed speed while motor B runs at a "turn step" the operator trims live: every
//! press of the start button lowers it by one, tightening the turn. The status LED goes dark while
//! the button is held.

use crate::vehicle::Car;

#[derive(Copy, Clone, Debug)]
pub struct CurveConfig {
    /// Fixed speed of motor A
    pub outer_speed: i32,
    /// Motor B speed before any trimming
    pub initial_step: i32,
    /// Loop period (ms)
    pub tick_ms: u32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            outer_speed: 100,
            initial_step: 100,
            tick_ms: 80,
        }
    }
}

pub struct CurveStepper {
    config: CurveConfig,
    turn_step: i32,
}

impl CurveStepper {
    pub fn new(config: CurveConfig) -> Self {
        Self {
            config,
            turn_step: config.initial_step,
        }
    }

    /// Current motor B speed. Not floored: enough presses drive B in reverse.
    #[inline]
    pub fn turn_step(&self) -> i32 {
        self.turn_step
    }

    /// Run one control step.
    pub fn step<C: Car>(&mut self, car: &mut C) {
        car.drive(self.config.outer_speed, self.turn_step);

        if car.button_pressed() {
            car.set_status_led(false);
            self.turn_step -= 1;
            while car.button_pressed() {}
            car.set_status_led(true);
        }

        car.wait_ms(self.config.tick_ms);
    }
}
