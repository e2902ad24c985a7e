// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Wire format of the dual serial motor controller.

pub mod messages;

pub use messages::{Direction, Motor, MotorCommand};
