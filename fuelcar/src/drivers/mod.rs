// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the `hw/` seams and below the
//! control strategies.
//!
//! ## Existing drivers
//!
//! - [`motor_controller`] – Dual serial motor controller on the bit-banged line
//! - [`sensors`] – Start button, bumper microswitch and the two reflectance sensors

pub mod motor_controller;
pub mod sensors;

pub use motor_controller::MotorController;
pub use sensors::{Sensor, SensorBoard};
