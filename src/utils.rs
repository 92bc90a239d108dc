// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Case-fold text for keyword matching.
///
/// Lower-casing only. Whitespace and punctuation are left alone, so a keyword
/// like `"node.js"` or `"machine learning"` matches exactly what is written.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Scans left to right and resumes after each match, so `"aaa"` contains
/// `"aa"` once. This is a literal substring count: `"java"` is found inside
/// `"javascript"`. An empty needle counts as zero occurrences.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
