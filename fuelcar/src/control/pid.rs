// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Discrete PID on a pre-computed error.
//!
//! Works in `no_std` and does not allocate memory. The loop period is fixed by the caller, so the
//! terms are per tick: the integral is a plain running sum and the derivative a plain difference.

/// PID controller with fixed gains.
#[derive(Clone, Debug)]
pub struct Pid {
    /// Proportional gain
    kp: f32,
    /// Integral gain
    ki: f32,
    /// Derivative gain
    kd: f32,

    /// Sum of every error fed to `update`
    error_sum: f32,
    /// Error from the previous `update`
    prev_error: f32,
}

impl Pid {
    /// Create a new PID controller.
    ///
    /// `kp`, `ki`, `kd` are the gain constants.
    pub fn new(kp: f32, ki: f32, kd: f32) -> Self {
        Self {
            kp,
            ki,
            kd,

            error_sum: 0.0,
            prev_error: 0.0,
        }
    }

    /// Seed the derivative history so the first update sees no spurious step.
    pub fn with_previous_error(mut self, error: f32) -> Self {
        self.prev_error = error;
        self
    }

    /// Run one tick and return the unclamped output.
    ///
    /// `output = kp*e + ki*Σe + kd*(e - e_prev)`, where `Σe` excludes the current error. The
    /// error is folded into the history afterwards.
    pub fn update(&mut self, error: f32) -> f32 {
        // ----- P term -----
        let p = self.kp * error;

        // ----- I term -----
        let i = self.ki * self.error_sum;

        // ----- D term -----
        let d = self.kd * (error - self.prev_error);

        self.prev_error = error;
        self.error_sum += error;

        p + i + d
    }

    #[inline]
    pub fn previous_error(&self) -> f32 {
        self.prev_error
    }

    #[inline]
    pub fn error_sum(&self) -> f32 {
        self.error_sum
    }
}
