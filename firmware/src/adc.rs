// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADC1 through direct PAC register access, exposed to the core one register step at a time.
//!
//! Example:
//! ```ignore
//! let mut adc = Adc1::new(dp.ADC1, pins.reflect);
//! let raw = fuelcar::hw::adc::convert(&mut adc, 4);
//! ```

use fuelcar::hw::AnalogConverter;
use stm32f7xx_hal::pac;

use crate::pins::ReflectPins;

/// Settling time after ADON, in core cycles (> 3 µs at 216 MHz).
const STABILIZATION_CYCLES: u32 = 1_000;

pub struct Adc1 {
    adc: pac::ADC1,
    _pins: ReflectPins,
}

impl Adc1 {
    /// Clock and configure ADC1, leaving it powered off until the first read.
    pub fn new(adc: pac::ADC1, pins: ReflectPins) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        // ADC prescaler: PCLK2 / 4
        let common = unsafe { &*pac::ADC_COMMON::ptr() };
        common.ccr.modify(|_, w| w.adcpre().div4());

        adc.cr2.modify(|_, w| w.adon().clear_bit());

        // 10-bit, right-aligned, software trigger
        adc.cr1.modify(|_, w| w.res().bits(0b01));
        adc.cr2.modify(|_, w| {
            w.cont().clear_bit();
            w.align().right();
            w.exten().disabled();
            w
        });

        // Long sample time on both sensor inputs
        adc.smpr2.modify(|_, w| {
            w.smp4().bits(0b111);
            w.smp5().bits(0b111);
            w
        });

        // Sequence length = 1 conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));

        Self { adc, _pins: pins }
    }
}

impl AnalogConverter for Adc1 {
    fn select_channel(&mut self, channel: u8) {
        self.adc
            .sqr3
            .modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

        if self.adc.cr2.read().adon().bit_is_clear() {
            self.adc.cr2.modify(|_, w| w.adon().set_bit());
            cortex_m::asm::delay(STABILIZATION_CYCLES);
        }
    }

    #[inline]
    fn start_conversion(&mut self) {
        self.adc.cr2.modify(|_, w| w.swstart().set_bit());
    }

    #[inline]
    fn conversion_busy(&mut self) -> bool {
        self.adc.sr.read().eoc().bit_is_clear()
    }

    #[inline]
    fn read_raw(&mut self) -> u16 {
        self.adc.dr.read().data().bits() as u16
    }

    #[inline]
    fn power_off(&mut self) {
        self.adc.cr2.modify(|_, w| w.adon().clear_bit());
    }
}
