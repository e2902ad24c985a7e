// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The car as a whole: owns the motor line, the sensors, the delay and the indicators, runs the
//! start sequence and then the selected strategy forever.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let car = Vehicle::new(motor_line, delay, sensors, status_led, light_bar);
//! car.run(COURSE, &mut usart);
//! ```
//!
//! Start sequence:
//!
//! 1. Both motors to zero.
//! 2. Course number on the light bar, status LED on.
//! 3. Wait for the start button to be pressed, then released.
//! 4. Resolve the course. An unknown course zeroes both motors again and stops there.

use core::convert::Infallible;
use core::fmt::Write;

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::control::{Course, Strategy};
use crate::drivers::{MotorController, Sensor, SensorBoard};
use crate::error::Error;
use crate::hw::{AnalogConverter, Led, LightBar, Ticks};
use crate::protocol::Motor;

/// What a driving strategy needs from the car.
pub trait Car {
    /// Command one motor, signed -100..=100. Out-of-range speeds are clamped.
    fn set_motor(&mut self, motor: Motor, speed: i32);

    /// Blocking sensor read.
    fn read(&mut self, sensor: Sensor) -> u16;

    /// Busy-wait `ms` milliseconds.
    fn wait_ms(&mut self, ms: u32);

    fn set_status_led(&mut self, on: bool);

    /// Command motor A, then motor B.
    fn drive(&mut self, a: i32, b: i32) {
        self.set_motor(Motor::A, a);
        self.set_motor(Motor::B, b);
    }

    fn stop(&mut self) {
        self.drive(0, 0);
    }

    fn button_pressed(&mut self) -> bool {
        self.read(Sensor::Button) == 1
    }
}

/// Concrete car built from board primitives.
pub struct Vehicle<TX, D, BTN, BMP, ADC, LED, B0, B1, B2>
where
    LED: OutputPin,
{
    ticks: Ticks<D>,
    motors: MotorController<TX>,
    sensors: SensorBoard<BTN, BMP, ADC>,
    status: Led<LED>,
    bar: LightBar<B0, B1, B2>,
}

impl<TX, D, BTN, BMP, ADC, LED, B0, B1, B2> Vehicle<TX, D, BTN, BMP, ADC, LED, B0, B1, B2>
where
    TX: OutputPin,
    D: DelayNs,
    BTN: InputPin<Error = Infallible>,
    BMP: InputPin<Error = Infallible>,
    ADC: AnalogConverter,
    LED: OutputPin,
    B0: OutputPin,
    B1: OutputPin,
    B2: OutputPin,
{
    /// Assemble the car. Idles the motor line, which takes 1 ms.
    pub fn new(
        motor_line: TX,
        delay: D,
        sensors: SensorBoard<BTN, BMP, ADC>,
        status: Led<LED>,
        bar: LightBar<B0, B1, B2>,
    ) -> Self {
        let mut ticks = Ticks::new(delay);
        let motors = MotorController::new(motor_line, &mut ticks);

        Self {
            ticks,
            motors,
            sensors,
            status,
            bar,
        }
    }

    #[inline]
    pub fn sensors(&mut self) -> &mut SensorBoard<BTN, BMP, ADC> {
        &mut self.sensors
    }

    #[inline]
    pub fn ticks(&mut self) -> &mut Ticks<D> {
        &mut self.ticks
    }

    /// Block through one full press of the start button.
    pub fn wait_for_start(&mut self) {
        while !self.sensors.button_pressed() {}
        while self.sensors.button_pressed() {}
    }

    /// Run the start sequence and build the strategy for `course_id`.
    ///
    /// On an unknown course both motors are zeroed and the error is returned; the caller must not
    /// command the motors again.
    pub fn launch<W: Write>(&mut self, course_id: u8, log: &mut W) -> Result<Strategy, Error> {
        self.stop();
        let _ = writeln!(log, "motors stopped\r");

        self.bar.show(course_id);
        self.status.on();
        let _ = writeln!(log, "course {}: waiting for start button\r", course_id);
        self.wait_for_start();

        let course = match Course::try_from(course_id) {
            Ok(course) => course,
            Err(e) => {
                self.stop();
                let _ = writeln!(log, "{}, motors stopped\r", e);
                return Err(e);
            }
        };

        let _ = writeln!(log, "running {}\r", course.name());
        Ok(Strategy::new(course, self))
    }

    /// Launch and drive `course_id` until power-off.
    ///
    /// An unknown course parks the car in an idle spin with the motors at zero.
    pub fn run<W: Write>(mut self, course_id: u8, log: &mut W) -> ! {
        match self.launch(course_id, log) {
            Ok(mut strategy) => loop {
                strategy.step(&mut self);
            },
            Err(_) => {
                let _ = writeln!(log, "halted\r");
                loop {
                    core::hint::spin_loop();
                }
            }
        }
    }
}

impl<TX, D, BTN, BMP, ADC, LED, B0, B1, B2> Car for Vehicle<TX, D, BTN, BMP, ADC, LED, B0, B1, B2>
where
    TX: OutputPin,
    D: DelayNs,
    BTN: InputPin<Error = Infallible>,
    BMP: InputPin<Error = Infallible>,
    ADC: AnalogConverter,
    LED: OutputPin,
{
    #[inline]
    fn set_motor(&mut self, motor: Motor, speed: i32) {
        self.motors.set_motor(&mut self.ticks, motor, speed);
    }

    #[inline]
    fn read(&mut self, sensor: Sensor) -> u16 {
        self.sensors.read(sensor)
    }

    #[inline]
    fn wait_ms(&mut self, ms: u32) {
        self.ticks.wait_1ms(ms);
    }

    #[inline]
    fn set_status_led(&mut self, on: bool) {
        self.status.set(on);
    }
}
