// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

use core::fmt;

/// Errors surfaced by the control core.
///
/// Motor, sensor and transmit operations cannot fail observably, so the only fallible step is
/// picking the course at start-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Course identifier outside `1..=3`.
    InvalidCourse(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCourse(id) => write!(f, "invalid course {}", id),
        }
    }
}
