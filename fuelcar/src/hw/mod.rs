// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Seams
//!
//! Thin wrappers over the board primitives the core consumes.
//!
//! - [`timing`] - Busy-wait delays in 10 µs / 1 ms ticks.
//! - [`soft_uart`] - Bit-banged 8N2 transmitter for the motor line.
//! - [`adc`] - Split-phase converter trait and blocking conversion.
//! - [`led`] - Status LEDs and the light bar.

pub mod adc;
pub mod led;
pub mod soft_uart;
pub mod timing;

pub use adc::AnalogConverter;
pub use led::{Led, LightBar};
pub use soft_uart::SoftTx;
pub use timing::Ticks;
