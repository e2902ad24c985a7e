// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Split-phase ADC access.
//!
//! The board layer exposes the converter one register step at a time so the core can run the
//! select → start → poll → read → power-off sequence itself:
//!
//! ```ignore
//! let raw = adc::convert(&mut adc, 4);
//! ```

/// Full-scale value of a 10-bit conversion.
pub const ADC_MAX: u16 = 1023;

/// Single-channel, software-triggered analog-to-digital converter.
pub trait AnalogConverter {
    /// Route `channel` to the converter input and power the converter up.
    fn select_channel(&mut self, channel: u8);

    /// Trigger one conversion on the selected channel.
    fn start_conversion(&mut self);

    /// `true` while the conversion started by [`start_conversion`](Self::start_conversion) is
    /// still running.
    fn conversion_busy(&mut self) -> bool;

    /// Raw result register. Only the low 10 bits are meaningful.
    fn read_raw(&mut self) -> u16;

    /// Disable the converter between reads.
    fn power_off(&mut self);
}

/// Run one blocking conversion on `channel` and return the raw 10-bit result.
///
/// Spins on the busy flag with no timeout. A converter that never finishes stalls the caller.
pub fn convert<A: AnalogConverter>(adc: &mut A, channel: u8) -> u16 {
    adc.select_channel(channel);
    adc.start_conversion();

    // Wait for completion
    while adc.conversion_busy() {}

    let raw = adc.read_raw() & ADC_MAX;
    adc.power_off();
    raw
}
