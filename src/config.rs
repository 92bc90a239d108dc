// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning for the similarity scorer.
//!
//! Two knobs, passed explicitly at construction so runs with different tuning
//! can coexist in one process:
//!
//! ```json
//! { "stopWords": "english", "maxFeatures": 5000 }
//! ```
//!
//! Missing fields take the defaults above. `"maxFeatures": null` removes the cap.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::RankError;
use crate::vectorize::StopWords;

/// Default vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Configuration for [`SimilarityScorer`](crate::SimilarityScorer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarityConfig {
    /// Stop-word list applied after case folding.
    pub stop_words: StopWords,
    /// Keep only this many highest document-frequency terms. `None` keeps all.
    pub max_features: Option<usize>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        SimilarityConfig {
            stop_words: StopWords::English,
            max_features: Some(DEFAULT_MAX_FEATURES),
        }
    }
}

impl SimilarityConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The feature cap, checked. A cap of zero would leave nothing to rank.
    pub fn feature_cap(&self) -> Result<Option<NonZeroUsize>, RankError> {
        match self.max_features {
            None => Ok(None),
            Some(cap) => NonZeroUsize::new(cap)
                .map(Some)
                .ok_or_else(|| RankError::invalid_config("maxFeatures must be at least 1")),
        }
    }
}
