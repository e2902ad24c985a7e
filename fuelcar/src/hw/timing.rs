// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait timing in the car's calibrated tick units.
//!
//! The motor line and the control loops count time in 10 µs and 1 ms ticks. Each tick is issued as
//! its own delay call, so a long wait is a string of short non-preemptible spins, not one big one.

use embedded_hal::delay::DelayNs;

/// Tick-counting wrapper around a blocking delay provider.
pub struct Ticks<D> {
    delay: D,
}

impl<D: DelayNs> Ticks<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Spin for `n` × 10 µs.
    pub fn wait_10us(&mut self, n: u32) {
        for _ in 0..n {
            self.delay.delay_us(10);
        }
    }

    /// Spin for `n` × 1 ms.
    pub fn wait_1ms(&mut self, n: u32) {
        for _ in 0..n {
            self.delay.delay_ms(1);
        }
    }

    /// Spin for `n` × 10 ms.
    pub fn wait_10ms(&mut self, n: u32) {
        for _ in 0..n {
            self.wait_1ms(10);
        }
    }

    /// Spin for `n` seconds.
    pub fn wait_1s(&mut self, n: u32) {
        for _ in 0..n {
            self.wait_1ms(1000);
        }
    }
}
