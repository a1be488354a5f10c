// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wrap text, or a character range of it, in ANSI color escape sequences.
//!
//! ```
//! use spanpaint::{foreground, foreground_ranged, Color};
//!
//! assert_eq!(foreground("hi", Color::Red), "\x1b[31mhi\x1b[0m");
//! assert_eq!(
//!     foreground_ranged("hello", Color::Blue, 1, Some(3)).unwrap(),
//!     "h\x1b[34mel\x1b[0mlo"
//! );
//! ```

pub mod colors;
pub mod paint;
pub mod range;

pub use colors::{escape, Channel, Color, ParseColorError};
pub use paint::{background, background_ranged, foreground, foreground_ranged, full, full_ranged};
pub use range::{check_index, RangeError};
