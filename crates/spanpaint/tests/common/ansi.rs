// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR-aware assertions over painted output.

use regex::Regex;
use std::sync::LazyLock;

/// Matches ESC [ followed by semicolon-separated numbers, ending with 'm'.
static SGR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[([0-9;]*)m").unwrap());

/// Strip all SGR escape sequences, returning plain text.
pub fn strip_ansi(input: &str) -> String {
    SGR_REGEX.replace_all(input, "").to_string()
}

/// SGR parameters in the order they appear, e.g. `["34", "0"]`.
pub fn sgr_params(input: &str) -> Vec<String> {
    SGR_REGEX
        .captures_iter(input)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
