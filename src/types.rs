// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a ranking run.
//!
//! Everything here is built fresh per run from caller-supplied data and never
//! outlives it. The engine only reads documents and profiles; the ranking it
//! returns belongs to the caller.
//!
//! | Type             | Role                                              |
//! |------------------|---------------------------------------------------|
//! | `Document`       | One candidate: id, display name, raw text         |
//! | `KeywordProfile` | A role's rubric: keyword → positive weight        |
//! | `ScoredDocument` | One output row: id, name, score in [0, 100]       |
//! | `RankingResult`  | Output rows sorted by score, descending, stable   |
//!
//! # Invariants
//!
//! - **KeywordProfile**: every keyword is lower-case and non-blank, every weight
//!   is at least 1, and no two keywords collide after case folding. Enforced by
//!   the constructors; there is no way to build an invalid profile.
//! - **ScoredDocument**: `0.0 <= score <= 100.0` and never NaN.
//! - **RankingResult**: `scores[i] >= scores[i + 1]`, with input order kept for ties.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RankError;

// =============================================================================
// DOCUMENT
// =============================================================================

/// A candidate document to be ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Opaque identifier, unique within one corpus.
    pub id: String,
    /// Display name (usually the uploaded file name).
    pub name: String,
    /// Raw text content. Missing or `null` text loads as the empty string.
    #[serde(default, deserialize_with = "nullable_text")]
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            name: name.into(),
            text: text.into(),
        }
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// KEYWORD PROFILE
// =============================================================================

/// A job role's scoring rubric: lower-cased keyword → positive weight.
///
/// Keys are stored in a `BTreeMap`, so iteration order is alphabetical and
/// independent of how the profile was built. The keyword scorer's result does
/// not depend on order anyway (integer sums commute), but a fixed order keeps
/// debug output and explanations stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, i64>", into = "BTreeMap<String, u32>")]
pub struct KeywordProfile {
    weights: BTreeMap<String, u32>,
}

impl KeywordProfile {
    /// Build a profile, rejecting anything that would break the score range.
    ///
    /// Fails with [`RankError::InvalidProfile`] when a weight is zero, negative,
    /// or larger than `u32::MAX`, when a keyword is blank, or when two keywords
    /// are the same after case folding.
    pub fn new<I, K>(entries: I) -> Result<Self, RankError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut weights = BTreeMap::new();

        for (keyword, weight) in entries {
            let keyword: String = keyword.into();
            if keyword.trim().is_empty() {
                return Err(RankError::invalid_profile("keyword is empty"));
            }
            if weight <= 0 {
                return Err(RankError::invalid_profile(format!(
                    "weight for '{}' is {}, must be positive",
                    keyword, weight
                )));
            }
            let weight = u32::try_from(weight).map_err(|_| {
                RankError::invalid_profile(format!("weight for '{}' is too large", keyword))
            })?;

            let folded = keyword.to_lowercase();
            if weights.insert(folded, weight).is_some() {
                return Err(RankError::invalid_profile(format!(
                    "keyword '{}' appears more than once",
                    keyword
                )));
            }
        }

        Ok(KeywordProfile { weights })
    }

    /// A profile with no keywords. Every document scores 0 against it.
    pub fn empty() -> Self {
        KeywordProfile::default()
    }

    /// Weight for a keyword, matched case-insensitively.
    pub fn weight(&self, keyword: &str) -> Option<u32> {
        self.weights.get(&keyword.to_lowercase()).copied()
    }

    /// Keywords (lower-cased) and weights in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.weights.iter().map(|(k, w)| (k.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.weights.values().map(|&w| u64::from(w)).sum()
    }
}

impl TryFrom<BTreeMap<String, i64>> for KeywordProfile {
    type Error = RankError;

    fn try_from(map: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        KeywordProfile::new(map)
    }
}

impl From<KeywordProfile> for BTreeMap<String, u32> {
    fn from(profile: KeywordProfile) -> Self {
        profile.weights
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: String,
    pub name: String,
    /// Relevance in `[0, 100]`.
    pub score: f64,
}

impl ScoredDocument {
    pub(crate) fn for_document(doc: &Document, score: f64) -> Self {
        ScoredDocument {
            id: doc.id.clone(),
            name: doc.name.clone(),
            score,
        }
    }
}

/// Documents ordered by score, highest first.
///
/// Only constructed by the scorers (via `scoring::ranking::into_ranking`), so
/// the ordering invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankingResult {
    entries: Vec<ScoredDocument>,
}

impl RankingResult {
    pub(crate) fn from_sorted(entries: Vec<ScoredDocument>) -> Self {
        RankingResult { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDocument> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ScoredDocument] {
        &self.entries
    }

    /// The first `n` entries (or all of them, if there are fewer).
    pub fn top(&self, n: usize) -> &[ScoredDocument] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Highest score in the ranking, if any.
    pub fn best(&self) -> Option<&ScoredDocument> {
        self.entries.first()
    }

    pub fn into_vec(self) -> Vec<ScoredDocument> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a RankingResult {
    type Item = &'a ScoredDocument;
    type IntoIter = std::slice::Iter<'a, ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for RankingResult {
    type Item = ScoredDocument;
    type IntoIter = std::vec::IntoIter<ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
