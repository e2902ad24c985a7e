// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Course selection.
//!
//! A run drives exactly one strategy, picked from the course identifier before the loop starts.

use crate::control::{
    CurveConfig, CurveStepper, PidSteering, SteeringConfig, ThresholdConfig, ThresholdFollower,
};
use crate::error::Error;
use crate::vehicle::Car;

/// Physical track layouts the car knows how to drive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Course {
    /// Course 1, threshold bang-bang.
    Threshold,
    /// Course 2, PID steering.
    Steering,
    /// Course 3, curve method.
    Curve,
}

impl Course {
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Course::Threshold => 1,
            Course::Steering => 2,
            Course::Curve => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Course::Threshold => "threshold",
            Course::Steering => "pid steering",
            Course::Curve => "curve",
        }
    }
}

impl TryFrom<u8> for Course {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Course::Threshold),
            2 => Ok(Course::Steering),
            3 => Ok(Course::Curve),
            _ => Err(Error::InvalidCourse(id)),
        }
    }
}

/// The strategy driving the current run.
pub enum Strategy {
    Threshold(ThresholdFollower),
    Steering(PidSteering),
    Curve(CurveStepper),
}

impl Strategy {
    /// Build the strategy for `course` with its stock tuning.
    ///
    /// PID steering samples both reflectance sensors here to seed its history.
    pub fn new<C: Car>(course: Course, car: &mut C) -> Self {
        match course {
            Course::Threshold => Strategy::Threshold(ThresholdFollower::new(
                ThresholdConfig::default(),
            )),
            Course::Steering => {
                Strategy::Steering(PidSteering::new(SteeringConfig::default(), car))
            }
            Course::Curve => Strategy::Curve(CurveStepper::new(CurveConfig::default())),
        }
    }

    pub fn course(&self) -> Course {
        match self {
            Strategy::Threshold(_) => Course::Threshold,
            Strategy::Steering(_) => Course::Steering,
            Strategy::Curve(_) => Course::Curve,
        }
    }

    /// Run one control step of the active strategy.
    pub fn step<C: Car>(&mut self, car: &mut C) {
        match self {
            Strategy::Threshold(s) => s.step(car),
            Strategy::Steering(s) => s.step(car),
            Strategy::Curve(s) => s.step(car),
        }
    }
}
