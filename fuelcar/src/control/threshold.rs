// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Course 1: threshold bang-bang line following.
//!
//! Both motors run flat out. When a side's reflectance sensor drops below the threshold, that
//! side's motor stops and the tick spins until the reading recovers. Left and right are handled
//! one after the other and never resynchronised; the track geometry keeps the car on course.

use crate::drivers::Sensor;
use crate::protocol::Motor;
use crate::vehicle::Car;

#[derive(Copy, Clone, Debug)]
pub struct ThresholdConfig {
    /// Speed of both motors while on the surface
    pub speed: i32,
    /// Readings below this mean the sensor is over the line
    pub threshold: u16,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            speed: 100,
            threshold: 90,
        }
    }
}

pub struct ThresholdFollower {
    config: ThresholdConfig,
}

impl ThresholdFollower {
    pub fn new(config: ThresholdConfig) -> Self {
        Self { config }
    }

    /// Run one control step.
    pub fn step<C: Car>(&mut self, car: &mut C) {
        car.drive(self.config.speed, self.config.speed);

        self.hold_while_dark(car, Motor::A, Sensor::Reflect1);
        self.hold_while_dark(car, Motor::B, Sensor::Reflect2);
    }

    fn hold_while_dark<C: Car>(&self, car: &mut C, motor: Motor, sensor: Sensor) {
        if car.read(sensor) < self.config.threshold {
            car.set_motor(motor, 0);
            while car.read(sensor) < self.config.threshold {}
        }
    }
}
