// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for keyword scoring invariants.
//!
//! Any profile the constructor accepts must score any text into `[0, 100]`,
//! and adding one more mention of a keyword must never lower the score.
//! Arbitrary Unicode matters here: case folding can change byte lengths.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resrank::{KeywordProfile, KeywordScorer};

/// Fuzz input for keyword scoring
#[derive(Debug, Arbitrary)]
struct ScoreInput {
    /// Resume text (lossily decoded)
    text_bytes: Vec<u8>,
    /// Keyword / weight pairs; invalid profiles are skipped
    keywords: Vec<(String, i64)>,
    /// Which keyword to mention once more
    pick: usize,
}

fuzz_target!(|input: ScoreInput| {
    let text: String = String::from_utf8_lossy(&input.text_bytes)
        .chars()
        .take(2000)
        .collect();
    let keywords: Vec<(String, i64)> = input.keywords.into_iter().take(16).collect();

    let Ok(profile) = KeywordProfile::new(keywords) else {
        return;
    };

    let scorer = KeywordScorer::new();
    let score = scorer.score_text(&text, &profile);

    // INVARIANT 1: Scores stay in range
    assert!(
        (0.0..=100.0).contains(&score),
        "score {} out of range",
        score
    );

    // INVARIANT 2: Deterministic
    assert_eq!(score.to_bits(), scorer.score_text(&text, &profile).to_bits());

    // INVARIANT 3: Another mention never lowers the score
    if !profile.is_empty() {
        let keywords: Vec<&str> = profile.iter().map(|(k, _)| k).collect();
        let keyword = keywords[input.pick % keywords.len()];
        let more = scorer.score_text(&format!("{} {}", text, keyword), &profile);
        assert!(more >= score, "{} -> {} after adding '{}'", score, more, keyword);
    }
});
