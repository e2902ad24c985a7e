// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Course 2: PID differential steering.
//!
//! Each tick the right/left reflectance difference drives a symmetric correction around a fixed
//! base power:
//!
//! ```text
//! error  = min(right, ceiling) - min(left, ceiling)
//! output = pid(error)
//! A      = floor(base + output)
//! B      = floor(base - output)
//! ```
//!
//! Pressing the start button pauses the car. A release, press, release sequence resumes it with the
//! PID history as it was.

use micromath::F32Ext;

use crate::control::Pid;
use crate::drivers::Sensor;
use crate::vehicle::Car;

#[derive(Copy, Clone, Debug)]
pub struct SteeringConfig {
    /// Power both motors get with zero error
    pub base_power: f32,
    /// Readings are clamped to this before computing the error
    pub ceiling: u16,
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
    /// Loop period (ms)
    pub tick_ms: u32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            base_power: 100.0,
            ceiling: 150,
            kp: 0.9,
            // Integral path is wired up but tuned off
            ki: 0.0,
            kd: 3.0,
            tick_ms: 25,
        }
    }
}

pub struct PidSteering {
    config: SteeringConfig,
    pid: Pid,
}

impl PidSteering {
    /// Build the controller, seeding the derivative history from a first unclamped reading.
    pub fn new<C: Car>(config: SteeringConfig, car: &mut C) -> Self {
        let right = car.read(Sensor::Reflect2) as f32;
        let left = car.read(Sensor::Reflect1) as f32;

        let pid = Pid::new(config.kp, config.ki, config.kd).with_previous_error(right - left);

        Self { config, pid }
    }

    #[inline]
    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    /// Run one control step, or one full pause cycle if the button is down.
    pub fn step<C: Car>(&mut self, car: &mut C) {
        if car.button_pressed() {
            self.pause(car);
            return;
        }

        let right = car.read(Sensor::Reflect2).min(self.config.ceiling);
        let left = car.read(Sensor::Reflect1).min(self.config.ceiling);
        let error = right as f32 - left as f32;

        let output = self.pid.update(error);
        let a = F32Ext::floor(self.config.base_power + output) as i32;
        let b = F32Ext::floor(self.config.base_power - output) as i32;

        car.drive(a, b);
        car.wait_ms(self.config.tick_ms);
    }

    /// Stop, then block through release → press → release.
    fn pause<C: Car>(&mut self, car: &mut C) {
        car.stop();

        while car.button_pressed() {}
        while !car.button_pressed() {}
        while car.button_pressed() {}
    }
}
