// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time course selection.
//!
//! `course-1` is on by default, so the highest enabled course wins:
//!
//! ```bash
//! cargo run --release --features course-3
//! ```

pub const COURSE: u8 = if cfg!(feature = "course-3") {
    3
} else if cfg!(feature = "course-2") {
    2
} else {
    1
};
