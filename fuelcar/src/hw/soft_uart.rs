// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bit-banged, transmit-only serial line.
//!
//! Frames are 8N2: one start bit (low), eight data bits LSB first, two stop bits (high). Every level
//! is held for [`BIT_PERIOD_10US`] ticks of 10 µs, i.e. ~100 µs per bit (the 9600 baud convention
//! of the motor controller).
//!
//! There is no receive path and no acknowledgement. A corrupted frame is silently taken by the far
//! end; the motor controller has no way to report it.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::hw::Ticks;

/// Bit period in 10 µs ticks.
pub const BIT_PERIOD_10US: u32 = 10;

const DATA_BITS: u8 = 8;
const STOP_BITS: u8 = 2;

/// Software UART transmitter on a single push-pull output.
pub struct SoftTx<TX> {
    line: TX,
}

impl<TX: OutputPin> SoftTx<TX> {
    /// Take the line, idle it high and give the receiver 1 ms to settle before the first frame.
    pub fn new<D: DelayNs>(mut line: TX, ticks: &mut Ticks<D>) -> Self {
        line.set_high().ok();
        ticks.wait_1ms(1);
        Self { line }
    }

    /// Clock out one frame. Blocks for 11 bit periods.
    pub fn send_byte<D: DelayNs>(&mut self, ticks: &mut Ticks<D>, mut byte: u8) {
        // Start bit
        self.line.set_low().ok();
        ticks.wait_10us(BIT_PERIOD_10US);

        for _ in 0..DATA_BITS {
            if byte & 0x01 != 0 {
                self.line.set_high().ok();
            } else {
                self.line.set_low().ok();
            }
            byte >>= 1;
            ticks.wait_10us(BIT_PERIOD_10US);
        }

        for _ in 0..STOP_BITS {
            self.line.set_high().ok();
            ticks.wait_10us(BIT_PERIOD_10US);
        }
    }

    /// Clock out `bytes` back to back.
    pub fn send<D: DelayNs>(&mut self, ticks: &mut Ticks<D>, bytes: &[u8]) {
        for &b in bytes {
            self.send_byte(ticks, b);
        }
    }
}
