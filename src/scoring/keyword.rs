// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword scoring: weighted substring counts against a role's profile.
//!
//! # The formula
//!
//! ```text
//! raw          = Σ weight(k) × occurrences(k, lower(text))
//! max_possible = Σ weight(k) × 10
//! score        = min(raw / max_possible × 100, 100)      (0 when max_possible = 0)
//! ```
//!
//! The `10` is a saturation point: a document that mentions every keyword ten
//! times reaches 100, and mentioning them more cannot push it further. It is
//! an arbitrary constant kept for parity with existing stored rankings.
//!
//! # Matching
//!
//! Occurrences are literal, non-overlapping substring counts in the lower-cased
//! text. There are no word boundaries, so `"java"` also counts inside
//! `"javascript"`, and `"git"` inside `"digital"`. Existing rankings depend on
//! this, so it stays.
//!
//! # Invariants
//!
//! - Score is in `[0, 100]`: weights are positive (enforced by
//!   [`KeywordProfile`]) and the ratio is capped.
//! - Monotone: more occurrences of any keyword never lowers the score.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::scoring::ranking::into_ranking;
use crate::types::{Document, KeywordProfile, RankingResult, ScoredDocument};
use crate::utils::{count_occurrences, fold_case};

/// Occurrences per keyword at which a document saturates.
pub const SATURATION_OCCURRENCES: u64 = 10;

/// Upper bound of every normalized score.
pub const MAX_SCORE: f64 = 100.0;

/// Occurrences of one keyword in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit {
    pub keyword: String,
    pub weight: u32,
    pub occurrences: usize,
}

impl KeywordHit {
    /// This keyword's share of the raw score.
    pub fn contribution(&self) -> u64 {
        u64::from(self.weight) * self.occurrences as u64
    }
}

/// Stateless weighted-keyword scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    pub fn new() -> Self {
        KeywordScorer
    }

    /// Score every document against `profile` and rank them.
    ///
    /// Pure and infallible: a [`KeywordProfile`] is valid by construction.
    pub fn score(&self, documents: &[Document], profile: &KeywordProfile) -> RankingResult {
        #[cfg(feature = "parallel")]
        let docs = documents.par_iter();
        #[cfg(not(feature = "parallel"))]
        let docs = documents.iter();

        let scored: Vec<ScoredDocument> = docs
            .map(|doc| ScoredDocument::for_document(doc, self.score_text(&doc.text, profile)))
            .collect();

        into_ranking(scored)
    }

    /// Normalized score of a single text.
    pub fn score_text(&self, text: &str, profile: &KeywordProfile) -> f64 {
        let lowered = fold_case(text);
        let raw: u64 = profile
            .iter()
            .map(|(keyword, weight)| {
                u64::from(weight) * count_occurrences(&lowered, keyword) as u64
            })
            .sum();
        normalize(raw, profile.total_weight())
    }

    /// Per-keyword occurrence counts, in the profile's (alphabetical) order.
    pub fn breakdown(&self, text: &str, profile: &KeywordProfile) -> Vec<KeywordHit> {
        let lowered = fold_case(text);
        profile
            .iter()
            .map(|(keyword, weight)| KeywordHit {
                keyword: keyword.to_string(),
                weight,
                occurrences: count_occurrences(&lowered, keyword),
            })
            .collect()
    }
}

/// Map a raw weighted count onto `[0, 100]`.
pub fn normalize(raw: u64, total_weight: u64) -> f64 {
    let max_possible = total_weight * SATURATION_OCCURRENCES;
    if max_possible == 0 {
        return 0.0;
    }
    (raw as f64 / max_possible as f64 * MAX_SCORE).min(MAX_SCORE)
}
