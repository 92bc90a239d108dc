// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for ranking runs.
//!
//! Five things can go wrong when ranking, and they mean different things to
//! the caller:
//!
//! | Variant          | Meaning                                   | Caller action        |
//! |------------------|-------------------------------------------|----------------------|
//! | `InvalidProfile` | Keyword table is malformed                | Fix the profile      |
//! | `EmptyCorpus`    | Nothing to rank                           | Upload documents     |
//! | `DuplicateId`    | Two documents share an id                 | Dedupe the corpus    |
//! | `ScoringFailed`  | Vectorization hit a genuine fault         | Report it            |
//! | `InvalidConfig`  | Similarity tuning knobs are out of range  | Fix the config       |
//!
//! An empty vocabulary is *not* on this list. A corpus with no usable terms
//! ranks every document at 0.0 instead of failing.

use thiserror::Error;

/// Errors returned by the ranking engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A keyword weight is non-positive or the profile is otherwise malformed.
    #[error("invalid keyword profile: {reason}")]
    InvalidProfile { reason: String },

    /// Zero documents were supplied to a ranking run.
    #[error("cannot rank an empty corpus")]
    EmptyCorpus,

    /// Two documents in one ranking run share an id.
    #[error("document id '{id}' appears more than once")]
    DuplicateId { id: String },

    /// Vectorization failed for a reason other than an empty vocabulary.
    #[error("similarity scoring failed: {reason}")]
    ScoringFailed { reason: String },

    /// Similarity configuration is unusable.
    #[error("invalid similarity config: {reason}")]
    InvalidConfig { reason: String },
}

impl RankError {
    pub(crate) fn invalid_profile(reason: impl Into<String>) -> Self {
        RankError::InvalidProfile {
            reason: reason.into(),
        }
    }

    pub(crate) fn scoring_failed(reason: impl Into<String>) -> Self {
        RankError::ScoringFailed {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        RankError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
