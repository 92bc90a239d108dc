// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! One key, score descending. Ties keep the order the documents arrived in,
//! because the sort is stable and the scorers emit documents in input order.
//! There is deliberately no secondary key (name, id): callers rely on corpus
//! order being the tie-break so that two runs over the same upload list agree.

use std::cmp::Ordering;

use crate::contracts::{check_ranking_sorted, check_score_in_range};
use crate::types::{RankingResult, ScoredDocument};

/// Compare two scored documents for ranking: higher score sorts first.
///
/// Scores are never NaN, but an incomparable pair is treated as equal so the
/// stable sort leaves it in input order.
pub fn compare_scores(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Stable-sort scored documents (given in corpus order) into a ranking.
pub fn into_ranking(mut scored: Vec<ScoredDocument>) -> RankingResult {
    for doc in &scored {
        check_score_in_range(doc.score);
    }
    scored.sort_by(compare_scores);
    check_ranking_sorted(&scored);
    RankingResult::from_sorted(scored)
}
