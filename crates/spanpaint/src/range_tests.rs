// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    full_text = { 5, 0, None, 0..5 },
    omitted_end = { 5, 2, None, 2..5 },
    start_at_len = { 5, 5, None, 5..5 },
    explicit_end = { 5, 1, Some(3), 1..3 },
    end_at_len = { 5, 0, Some(5), 0..5 },
    empty_text = { 0, 0, None, 0..0 },
)]
fn check_index_accepts(len: usize, start: usize, end: Option<usize>, expected: Range<usize>) {
    assert_eq!(check_index(len, start, end), Ok(expected));
}

#[parameterized(
    start_past_len = { 5, 6, None },
    end_equals_start = { 5, 2, Some(2) },
    end_before_start = { 5, 3, Some(1) },
    end_past_len = { 5, 0, Some(6) },
    end_zero_at_start = { 5, 0, Some(0) },
    end_zero_after_start = { 5, 2, Some(0) },
    start_at_len_with_end = { 5, 5, Some(5) },
)]
fn check_index_rejects(len: usize, start: usize, end: Option<usize>) {
    assert_eq!(check_index(len, start, end), Err(RangeError { start, end, len }));
}

#[test]
fn range_error_message_names_bounds() {
    let err = check_index(3, 1, Some(7)).unwrap_err();
    assert_eq!(err.to_string(), "Range 1..7 out of bounds for text of length 3");

    let err = check_index(3, 4, None).unwrap_err();
    assert_eq!(err.to_string(), "Range 4.. out of bounds for text of length 3");
}

proptest! {
    #[test]
    fn omitted_end_never_fails_for_valid_start(len in 0usize..64, start in 0usize..64) {
        prop_assume!(start <= len);
        prop_assert_eq!(check_index(len, start, None), Ok(start..len));
    }

    #[test]
    fn provided_end_accepted_iff_in_bounds(
        len in 0usize..32,
        start in 0usize..32,
        end in 0usize..40,
    ) {
        let ok = start <= len && start < end && end <= len;
        prop_assert_eq!(check_index(len, start, Some(end)).is_ok(), ok);
    }
}
