// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wrapping text, or a span of it, in color escape sequences.
//!
//! Every function returns a new string followed by a single reset. Ranged
//! variants validate the range before building anything.

use crate::colors::{escape, Color};
use crate::range::{check_index, RangeError};

/// Changes the foreground and background color of `text`.
///
/// Example output:
/// `[fg][bg]text[reset]`
pub fn full(text: &str, fg: Color, bg: Color) -> String {
    wrap(text, &[escape::fg(fg), escape::bg(bg)])
}

/// Changes the foreground color of `text`.
pub fn foreground(text: &str, color: Color) -> String {
    wrap(text, &[escape::fg(color)])
}

/// Changes the background color of `text`.
pub fn background(text: &str, color: Color) -> String {
    wrap(text, &[escape::bg(color)])
}

/// Changes the foreground and background color of the characters in
/// `start..end`, with `end` defaulting to the end of `text`.
///
/// Example output for `("hello", Red, Black, 1, Some(3))`:
/// `h[fg][bg]el[reset]lo`
pub fn full_ranged(
    text: &str,
    fg: Color,
    bg: Color,
    start: usize,
    end: Option<usize>,
) -> Result<String, RangeError> {
    wrap_ranged(text, &[escape::fg(fg), escape::bg(bg)], start, end)
}

/// Changes the foreground color of the characters in `start..end`.
pub fn foreground_ranged(
    text: &str,
    color: Color,
    start: usize,
    end: Option<usize>,
) -> Result<String, RangeError> {
    wrap_ranged(text, &[escape::fg(color)], start, end)
}

/// Changes the background color of the characters in `start..end`.
pub fn background_ranged(
    text: &str,
    color: Color,
    start: usize,
    end: Option<usize>,
) -> Result<String, RangeError> {
    wrap_ranged(text, &[escape::bg(color)], start, end)
}

fn wrap(text: &str, codes: &[String]) -> String {
    let mut out = String::with_capacity(text.len() + codes_len(codes) + escape::RESET.len());
    codes.iter().for_each(|c| out.push_str(c));
    out.push_str(text);
    out.push_str(escape::RESET);
    out
}

fn wrap_ranged(
    text: &str,
    codes: &[String],
    start: usize,
    end: Option<usize>,
) -> Result<String, RangeError> {
    let span = check_index(text.chars().count(), start, end)?;
    let open = byte_offset(text, span.start);
    let close = byte_offset(text, span.end);

    let mut out = String::with_capacity(text.len() + codes_len(codes) + escape::RESET.len());
    out.push_str(&text[..open]);
    codes.iter().for_each(|c| out.push_str(c));
    out.push_str(&text[open..close]);
    out.push_str(escape::RESET);
    out.push_str(&text[close..]);
    Ok(out)
}

fn codes_len(codes: &[String]) -> usize {
    codes.iter().map(String::len).sum()
}

/// Byte offset of the `n`th character, or `text.len()` past the end.
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
#[path = "paint_tests.rs"]
mod tests;
