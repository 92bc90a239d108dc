// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranking invariants.
//!
//! Debug-mode assertions that every ranking must satisfy. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Fail early during development and in the test suite
//! 3. Name the invariant in the panic message
//!
//! | Contract Function           | Invariant                                   |
//! |-----------------------------|---------------------------------------------|
//! | `check_score_in_range`      | `0 <= score <= 100`, never NaN              |
//! | `check_ranking_sorted`      | `scores[i] >= scores[i + 1]`                |
//! | `check_ranking_stable`      | ties appear in corpus order                 |

use crate::scoring::keyword::{MAX_SCORE, SATURATION_OCCURRENCES};
use crate::types::{Document, ScoredDocument};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The saturation point must be positive or `max_possible` collapses to zero
/// for every non-empty profile.
const _: () = {
    assert!(SATURATION_OCCURRENCES > 0);
};

// ============================================================================
// SCORE CONTRACTS
// ============================================================================

/// Check that a score is a real number in `[0, 100]`.
///
/// # Panics (debug builds only)
/// Panics on NaN, infinity, negative scores, or scores above 100.
#[inline]
pub fn check_score_in_range(score: f64) {
    debug_assert!(
        (0.0..=MAX_SCORE).contains(&score),
        "Contract violation: ScoreInRange - score {} outside [0, {}]",
        score,
        MAX_SCORE
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranking is sorted by score, descending.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_ranking_sorted(ranking: &[ScoredDocument]) {
    for i in 1..ranking.len() {
        debug_assert!(
            ranking[i - 1].score >= ranking[i].score,
            "Contract violation: RankingSorted - \
             ranking[{}] ({}) < ranking[{}] ({})",
            i - 1,
            ranking[i - 1].score,
            i,
            ranking[i].score
        );
    }
}

/// Check that equal-score entries keep the relative order of `corpus`.
///
/// Ids are looked up in `corpus` and must be unique there; unknown ids are a
/// violation too.
///
/// # Panics (debug builds only)
/// Panics if two tied documents appear in the opposite order from the corpus.
pub fn check_ranking_stable(corpus: &[Document], ranking: &[ScoredDocument]) {
    let position = |id: &str| corpus.iter().position(|doc| doc.id == id);

    for i in 1..ranking.len() {
        let (prev, curr) = (&ranking[i - 1], &ranking[i]);
        if prev.score != curr.score {
            continue;
        }
        let (prev_pos, curr_pos) = (position(&prev.id), position(&curr.id));
        debug_assert!(
            prev_pos.is_some() && curr_pos.is_some() && prev_pos < curr_pos,
            "Contract violation: RankingStable - tied '{}' (corpus {:?}) \
             ranked before '{}' (corpus {:?})",
            prev.id,
            prev_pos,
            curr.id,
            curr_pos
        );
    }
}
