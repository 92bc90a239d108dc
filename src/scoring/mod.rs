// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two scoring strategies and the ordering they share.
//!
//! | Module       | Strategy                                   |
//! |--------------|--------------------------------------------|
//! | `keyword`    | Weighted substring counts, saturating at 10 |
//! | `similarity` | TF-IDF cosine similarity to a description  |
//! | `ranking`    | Stable descending sort into a ranking      |
//!
//! Both strategies produce scores in `[0, 100]` and hand documents to
//! `ranking::into_ranking` in corpus order.

pub mod keyword;
pub mod ranking;
pub mod similarity;

pub use keyword::{KeywordHit, KeywordScorer, MAX_SCORE, SATURATION_OCCURRENCES};
pub use ranking::compare_scores;
pub use similarity::SimilarityScorer;
