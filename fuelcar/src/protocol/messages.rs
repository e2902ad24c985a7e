// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor command frame understood by the dual serial motor controller.
//!
//! Every speed update is exactly four bytes:
//!
//! | Byte | Value |
//! | ---- | ----- |
//! | 0 | [`START_BYTE`] |
//! | 1 | [`CONTROL_DEVICE`] |
//! | 2 | motor bits \| direction bit |
//! | 3 | device speed, masked to 7 bits |
//!
//! Only the start byte has its MSB set, so the receiver can resynchronise on it.

/// Sync byte for the protocol.
pub const START_BYTE: u8 = 0x80;

/// Device type selector for the motor controller.
pub const CONTROL_DEVICE: u8 = 0x00;

// Motor / direction bits
pub const MOTOR_A_BITS: u8 = 0x00;
pub const MOTOR_B_BITS: u8 = 0x02;
pub const FORWARD_BIT: u8 = 0x00;
pub const REVERSE_BIT: u8 = 0x01;

/// Largest speed magnitude callers may request.
pub const USER_MAX: u8 = 100;

/// Full-scale speed on the controller side.
pub const DEVICE_MAX: u8 = 255;

/// Data bytes never carry the MSB.
pub const DATA_MASK: u8 = 0x7F;

/// Which drive motor a command addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Motor {
    /// Left motor. Mounted mirrored, so its sign is flipped on the wire.
    A,
    /// Right motor.
    B,
}

impl Motor {
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            Motor::A => MOTOR_A_BITS,
            Motor::B => MOTOR_B_BITS,
        }
    }
}

/// Rotation direction as seen by the motor controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn bit(self) -> u8 {
        match self {
            Direction::Forward => FORWARD_BIT,
            Direction::Reverse => REVERSE_BIT,
        }
    }
}

/// One encoded speed update for one motor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotorCommand {
    motor: Motor,
    direction: Direction,
    magnitude: u8,
}

impl MotorCommand {
    /// Encode a signed user speed (nominally -100..=100) for `motor`.
    ///
    /// Motor A's sign is flipped to match its wiring. Magnitudes above [`USER_MAX`] are clamped.
    pub fn new(motor: Motor, speed: i32) -> Self {
        let reverse = match motor {
            Motor::A => speed > 0,
            Motor::B => speed < 0,
        };
        let direction = if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        let magnitude = speed.unsigned_abs().min(USER_MAX as u32) as u8;

        Self {
            motor,
            direction,
            magnitude,
        }
    }

    #[inline]
    pub fn motor(&self) -> Motor {
        self.motor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Clamped user-scale magnitude, 0..=100.
    #[inline]
    pub fn magnitude(&self) -> u8 {
        self.magnitude
    }

    /// Speed byte as sent: `magnitude * 255 / 100`, truncated, MSB forced clear.
    #[inline]
    pub fn device_speed(&self) -> u8 {
        let scaled = self.magnitude as u16 * DEVICE_MAX as u16 / USER_MAX as u16;
        scaled as u8 & DATA_MASK
    }

    /// The four bytes that go on the wire.
    pub fn frame(&self) -> [u8; 4] {
        [
            START_BYTE,
            CONTROL_DEVICE,
            self.motor.bits() | self.direction.bit(),
            self.device_speed(),
        ]
    }
}
