// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated board for host tests.
//!
//! All handles share one [`World`] with a virtual nanosecond clock. Delays advance the clock, and
//! so does every pin read and every converter busy poll, so spin loops make progress against
//! time-scripted inputs. Output writes are recorded with their timestamps; the motor line is
//! decoded back into bytes by sampling each bit at its centre.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, InputPin, OutputPin},
};

use crate::drivers::sensors::{SensorBoard, REFLECT_1_CHANNEL, REFLECT_2_CHANNEL};
use crate::hw::adc::{AnalogConverter, ADC_MAX};
use crate::hw::soft_uart::BIT_PERIOD_10US;
use crate::hw::{Led, LightBar};
use crate::vehicle::Vehicle;

/// Conversion time of the simulated converter.
pub const CONVERSION_US: u64 = 13;

const READ_COST_NS: u64 = 1_000;
const BIT_NS: u64 = BIT_PERIOD_10US as u64 * 10_000;

pub type SimVehicle = Vehicle<
    SimOutput,
    SimDelay,
    SimInput,
    SimInput,
    SimAdc,
    SimOutput,
    SimOutput,
    SimOutput,
    SimOutput,
>;

/// Piecewise-constant input over time (µs).
#[derive(Clone, Debug)]
pub struct Script<T> {
    points: Vec<(u64, T)>,
}

impl<T: Copy> Script<T> {
    pub fn constant(value: T) -> Self {
        Self {
            points: vec![(0, value)],
        }
    }

    /// Switch to `value` from `at_us` onwards.
    pub fn then(mut self, at_us: u64, value: T) -> Self {
        self.points.push((at_us, value));
        self
    }

    fn at(&self, now_us: u64) -> T {
        let mut value = self.points[0].1;
        for &(t, v) in &self.points {
            if t <= now_us {
                value = v;
            }
        }
        value
    }

    fn map<U>(&self, f: impl Fn(T) -> U) -> Script<U> {
        Script {
            points: self.points.iter().map(|&(t, v)| (t, f(v))).collect(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Line,
    Red,
    Bar(usize),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Input {
    Button,
    Bumper,
}

struct World {
    now_ns: u64,
    writes: Vec<(Output, u64, bool)>,
    button_pin: Script<bool>,
    bumper_pin: Script<bool>,
    reflect_raw: [Script<u16>; 2],
    adc_channel: u8,
    adc_done_ns: u64,
    adc_powered: bool,
}

impl World {
    fn now_us(&self) -> u64 {
        self.now_ns / 1_000
    }

    fn level_at(&self, id: Output, t_ns: u64) -> bool {
        self.writes
            .iter()
            .filter(|&&(o, t, _)| o == id && t <= t_ns)
            .last()
            .map_or(false, |&(_, _, level)| level)
    }
}

/// Handle to the simulated board.
pub struct Sim {
    world: Rc<RefCell<World>>,
}

impl Sim {
    pub fn new() -> Self {
        let idle = Script::constant(ADC_MAX - 500);
        Self {
            world: Rc::new(RefCell::new(World {
                now_ns: 0,
                writes: Vec::new(),
                button_pin: Script::constant(true),
                bumper_pin: Script::constant(false),
                reflect_raw: [idle.clone(), idle],
                adc_channel: 0,
                adc_done_ns: 0,
                adc_powered: false,
            })),
        }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            world: self.world.clone(),
        }
    }

    pub fn output(&self, id: Output) -> SimOutput {
        SimOutput {
            world: self.world.clone(),
            id,
        }
    }

    pub fn line(&self) -> SimOutput {
        self.output(Output::Line)
    }

    pub fn button(&self) -> SimInput {
        SimInput {
            world: self.world.clone(),
            id: Input::Button,
        }
    }

    pub fn bumper(&self) -> SimInput {
        SimInput {
            world: self.world.clone(),
            id: Input::Bumper,
        }
    }

    pub fn adc(&self) -> SimAdc {
        SimAdc {
            world: self.world.clone(),
        }
    }

    pub fn vehicle(&self) -> SimVehicle {
        Vehicle::new(
            self.line(),
            self.delay(),
            SensorBoard::new(self.button(), self.bumper(), self.adc()),
            Led::active_high(self.output(Output::Red)),
            LightBar::new(
                self.output(Output::Bar(0)),
                self.output(Output::Bar(1)),
                self.output(Output::Bar(2)),
            ),
        )
    }

    pub fn now_us(&self) -> u64 {
        self.world.borrow().now_us()
    }

    /// Raw level of the (active-low) button pin.
    pub fn set_button_pin(&self, script: Script<bool>) {
        self.world.borrow_mut().button_pin = script;
    }

    pub fn set_bumper_pin(&self, script: Script<bool>) {
        self.world.borrow_mut().bumper_pin = script;
    }

    /// Raw converter output for reflectance sensor `index` (0 = left, 1 = right).
    pub fn set_reflect(&self, index: usize, raw: Script<u16>) {
        self.world.borrow_mut().reflect_raw[index] = raw;
    }

    /// Reflectance as the car should read it, after inversion.
    pub fn set_reading(&self, index: usize, reading: Script<u16>) {
        self.set_reflect(index, reading.map(|r| ADC_MAX - r));
    }

    pub fn adc_powered(&self) -> bool {
        self.world.borrow().adc_powered
    }

    pub fn output_level(&self, id: Output) -> bool {
        let world = self.world.borrow();
        world.level_at(id, world.now_ns)
    }

    /// Every level written to `id`, in order.
    pub fn output_writes(&self, id: Output) -> Vec<bool> {
        self.world
            .borrow()
            .writes
            .iter()
            .filter(|&&(o, _, _)| o == id)
            .map(|&(_, _, level)| level)
            .collect()
    }

    pub fn line_level_at(&self, t_us: u64) -> bool {
        self.world.borrow().level_at(Output::Line, t_us * 1_000)
    }

    /// Index currently selected on the light bar.
    pub fn bar(&self) -> u8 {
        (0..3).fold(0, |acc, bit| {
            acc | ((self.output_level(Output::Bar(bit)) as u8) << bit)
        })
    }

    /// Decode every 8N2 frame sent on the motor line so far.
    pub fn bytes(&self) -> Vec<u8> {
        let world = self.world.borrow();
        let level = |t: u64| world.level_at(Output::Line, t);

        let mut falling = Vec::new();
        let mut prev = false;
        for &(o, t, l) in &world.writes {
            if o == Output::Line {
                if prev && !l {
                    falling.push(t);
                }
                prev = l;
            }
        }

        let mut bytes = Vec::new();
        let mut cursor = 0;
        for t0 in falling {
            if t0 < cursor {
                continue;
            }
            let centre = |bit: u64| t0 + bit * BIT_NS + BIT_NS / 2;

            assert!(!level(centre(0)), "start bit at {} ns", t0);
            let mut byte = 0u8;
            for i in 0..8 {
                if level(centre(1 + i)) {
                    byte |= 1 << i;
                }
            }
            assert!(
                level(centre(9)) && level(centre(10)),
                "stop bits at {} ns",
                t0
            );

            bytes.push(byte);
            cursor = centre(10);
        }
        bytes
    }

    /// Decoded bytes grouped into 4-byte motor frames.
    pub fn frames(&self) -> Vec<[u8; 4]> {
        let bytes = self.bytes();
        assert_eq!(bytes.len() % 4, 0, "partial frame: {:02X?}", bytes);
        bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect()
    }
}

pub struct SimDelay {
    world: Rc<RefCell<World>>,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.world.borrow_mut().now_ns += ns as u64;
    }
}

pub struct SimOutput {
    world: Rc<RefCell<World>>,
    id: Output,
}

impl ErrorType for SimOutput {
    type Error = Infallible;
}

impl OutputPin for SimOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut world = self.world.borrow_mut();
        let now = world.now_ns;
        world.writes.push((self.id, now, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut world = self.world.borrow_mut();
        let now = world.now_ns;
        world.writes.push((self.id, now, true));
        Ok(())
    }
}

pub struct SimInput {
    world: Rc<RefCell<World>>,
    id: Input,
}

impl ErrorType for SimInput {
    type Error = Infallible;
}

impl InputPin for SimInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut world = self.world.borrow_mut();
        world.now_ns += READ_COST_NS;
        let now = world.now_us();
        Ok(match self.id {
            Input::Button => world.button_pin.at(now),
            Input::Bumper => world.bumper_pin.at(now),
        })
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub struct SimAdc {
    world: Rc<RefCell<World>>,
}

impl AnalogConverter for SimAdc {
    fn select_channel(&mut self, channel: u8) {
        let mut world = self.world.borrow_mut();
        world.adc_channel = channel;
        world.adc_powered = true;
    }

    fn start_conversion(&mut self) {
        let mut world = self.world.borrow_mut();
        assert!(world.adc_powered, "conversion started while powered off");
        world.adc_done_ns = world.now_ns + CONVERSION_US * 1_000;
    }

    fn conversion_busy(&mut self) -> bool {
        let mut world = self.world.borrow_mut();
        world.now_ns += READ_COST_NS;
        world.now_ns < world.adc_done_ns
    }

    fn read_raw(&mut self) -> u16 {
        let world = self.world.borrow();
        let index = match world.adc_channel {
            REFLECT_1_CHANNEL => 0,
            REFLECT_2_CHANNEL => 1,
            other => panic!("no sensor on channel {}", other),
        };
        world.reflect_raw[index].at(world.now_us())
    }

    fn power_off(&mut self) {
        self.world.borrow_mut().adc_powered = false;
    }
}
