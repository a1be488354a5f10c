// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range validation for ranged painting.
//!
//! Offsets count characters (`char`s), not bytes. The upper bound is
//! exclusive and defaults to the text length when omitted.

use std::ops::Range;
use thiserror::Error;

/// A requested span does not fit the text it targets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Range {start}..{} out of bounds for text of length {len}", .end.map(|e| e.to_string()).unwrap_or_default())]
pub struct RangeError {
    pub start: usize,
    pub end: Option<usize>,
    /// Length of the text in characters.
    pub len: usize,
}

/// Validate `start..end` against a text of `len` characters.
///
/// Returns the resolved range with `end` defaulted to `len`. A provided
/// `end` must be strictly greater than `start` and no larger than `len`;
/// `start` may equal `len` only when `end` is omitted.
pub fn check_index(
    len: usize,
    start: usize,
    end: Option<usize>,
) -> Result<Range<usize>, RangeError> {
    let err = || RangeError { start, end, len };

    if start > len {
        return Err(err());
    }

    match end {
        None => Ok(start..len),
        Some(end) if end <= start || end > len => Err(err()),
        Some(end) => Ok(start..end),
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
