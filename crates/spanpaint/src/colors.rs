// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color names and the SGR escape codes they resolve to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name one of the known colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown color '{name}' (expected one of: black, red, green, yellow, blue, magenta, cyan, white, gray)")]
pub struct ParseColorError {
    /// The rejected input.
    pub name: String,
}

/// The nine colors a span can be painted with.
///
/// The first eight follow the standard ANSI ordering; `Gray` is the
/// bright-black variant and sits outside that ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl Color {
    /// Every color, in code order.
    pub const ALL: [Color; 9] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Gray,
    ];

    /// Lowercase name of the color.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }

    /// Try to parse a color from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "black" => Some(Self::Black),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            "gray" => Some(Self::Gray),
            _ => None,
        }
    }

    /// Position of the color in [`Color::ALL`].
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// Whether the color lives in the bright (90/100) code range.
    pub const fn is_bright(&self) -> bool {
        matches!(self, Self::Gray)
    }

    /// SGR parameter selecting this color on `channel`.
    pub const fn sgr_param(&self, channel: Channel) -> u8 {
        match (self.is_bright(), channel) {
            (true, Channel::Foreground) => 90,
            (true, Channel::Background) => 100,
            (false, Channel::Foreground) => 30 + self.index(),
            (false, Channel::Background) => 40 + self.index(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseColorError {
            name: s.to_string(),
        })
    }
}

/// Whether a color applies to the glyphs or the cell behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Foreground,
    Background,
}

impl Channel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ANSI escape sequence helpers
pub mod escape {
    use super::{Channel, Color};

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// SGR sequence with a single numeric parameter: `ESC[{n}m`
    pub fn sgr(n: u8) -> String {
        format!("\x1b[{}m", n)
    }

    /// Escape sequence that sets `color` on `channel`.
    pub fn code(color: Color, channel: Channel) -> String {
        sgr(color.sgr_param(channel))
    }

    /// Foreground color
    pub fn fg(color: Color) -> String {
        code(color, Channel::Foreground)
    }

    /// Background color
    pub fn bg(color: Color) -> String {
        code(color, Channel::Background)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
