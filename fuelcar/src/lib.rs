// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Fuel Cell Car Firmware Core
//!
//! Portable control core for the autonomous fuel cell car: a two-motor line follower that talks to
//! its dual serial motor controller over a bit-banged 8N2 line and steers from two reflectance
//! sensors.
//!
//! Everything here is generic over `embedded-hal` traits plus the split-phase
//! [`AnalogConverter`](hw::AnalogConverter), so the same code runs on the MCU and against a
//! simulated board in host tests.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Busy-wait timing, bit-banged transmitter, ADC seam, indicator LEDs |
//! | [`protocol`] | 4-byte motor command frame |
//! | [`drivers`] | Motor controller and sensor board drivers |
//! | [`control`] | Driving strategies and course selection |
//! | [`vehicle`] | Owns the hardware, runs the start sequence and the control loop |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board (from `firmware/`):
//!
//! ```bash
//! cargo run --release --features course-2
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod control;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod protocol;
pub mod vehicle;

#[cfg(test)]
mod sim;

pub use error::Error;
pub use vehicle::{Car, Vehicle};
