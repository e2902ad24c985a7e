// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Dual serial motor controller.
//!
//! Speed updates are open loop: each call clocks a 4-byte [`MotorCommand`] frame out of the
//! [`SoftTx`] line and returns. Nothing comes back, so there is nothing to fail.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::hw::{SoftTx, Ticks};
use crate::protocol::{Motor, MotorCommand};

/// Driver for the two-channel motor controller on a transmit-only serial line.
pub struct MotorController<TX> {
    tx: SoftTx<TX>,
}

impl<TX: OutputPin> MotorController<TX> {
    /// Idle the line and wait for the controller to settle.
    pub fn new<D: DelayNs>(line: TX, ticks: &mut Ticks<D>) -> Self {
        Self {
            tx: SoftTx::new(line, ticks),
        }
    }

    /// Set `motor` to a signed speed in -100..=100. Larger magnitudes are clamped.
    pub fn set_motor<D: DelayNs>(&mut self, ticks: &mut Ticks<D>, motor: Motor, speed: i32) {
        self.send(ticks, MotorCommand::new(motor, speed));
    }

    /// Transmit an already encoded command.
    pub fn send<D: DelayNs>(&mut self, ticks: &mut Ticks<D>, cmd: MotorCommand) {
        self.tx.send(ticks, &cmd.frame());
    }

    /// Command motor A, then motor B.
    pub fn drive<D: DelayNs>(&mut self, ticks: &mut Ticks<D>, a: i32, b: i32) {
        self.set_motor(ticks, Motor::A, a);
        self.set_motor(ticks, Motor::B, b);
    }

    /// Zero both motors.
    #[inline]
    pub fn stop<D: DelayNs>(&mut self, ticks: &mut Ticks<D>) {
        self.drive(ticks, 0, 0);
    }
}
