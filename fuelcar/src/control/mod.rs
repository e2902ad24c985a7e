// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! Driving strategies, one per course, plus the pieces they share.
//!
//! ## Modules
//!
//! - [`pid`] - Per-tick PID on a pre-computed error.
//! - [`threshold`] - Course 1, bang-bang line following.
//! - [`steering`] - Course 2, PID differential steering with pause/resume.
//! - [`curve`] - Course 3, open-loop curve with live trimming.
//! - [`course`] - Course identifiers and strategy dispatch.

pub mod course;
pub mod curve;
pub mod pid;
pub mod steering;
pub mod threshold;

pub use course::{Course, Strategy};
pub use curve::{CurveConfig, CurveStepper};
pub use pid::Pid;
pub use steering::{PidSteering, SteeringConfig};
pub use threshold::{ThresholdConfig, ThresholdFollower};
