// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking entry point: pick a strategy, run it, hand back the ranking.
//!
//! ```text
//!                      ┌── Keyword(profile) ────▶ KeywordScorer ─────┐
//! rank(mode, docs) ────┤                                             ├──▶ RankingResult
//!                      └── Description(text) ──▶ SimilarityScorer ──┘
//! ```
//!
//! The engine owns its similarity tuning and nothing else. It has no mutable
//! state, so one engine can serve any number of threads at once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SimilarityConfig;
use crate::contracts::check_ranking_stable;
use crate::error::RankError;
use crate::scoring::{KeywordScorer, SimilarityScorer};
use crate::types::{Document, KeywordProfile, RankingResult};
use crate::vectorize::{Tokenizer, WordTokenizer};

/// What to rank against. The two modes never mix in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingMode {
    /// Score by a role's weighted keyword profile.
    Keyword(KeywordProfile),
    /// Score by similarity to a free-text job description.
    Description(String),
}

impl RankingMode {
    /// Short label for logs and display.
    pub fn label(&self) -> &'static str {
        match self {
            RankingMode::Keyword(_) => "keyword",
            RankingMode::Description(_) => "description",
        }
    }
}

/// Dispatches ranking runs to the matching scorer.
#[derive(Debug, Clone)]
pub struct RankingEngine<T = WordTokenizer> {
    keyword: KeywordScorer,
    similarity: SimilarityScorer<T>,
}

impl RankingEngine<WordTokenizer> {
    pub fn new(config: &SimilarityConfig) -> Result<Self, RankError> {
        Ok(RankingEngine::with_similarity(SimilarityScorer::new(config)?))
    }
}

impl<T: Tokenizer> RankingEngine<T> {
    /// Engine around an already-built similarity scorer.
    pub fn with_similarity(similarity: SimilarityScorer<T>) -> Self {
        RankingEngine {
            keyword: KeywordScorer::new(),
            similarity,
        }
    }

    /// Rank `documents` under `mode`.
    ///
    /// Fails with [`RankError::EmptyCorpus`] when there is nothing to rank and
    /// with [`RankError::DuplicateId`] when two documents share an id; ties are
    /// told apart by id, so ids must be unique within a run.
    pub fn rank(
        &self,
        mode: &RankingMode,
        documents: &[Document],
    ) -> Result<RankingResult, RankError> {
        if documents.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        check_distinct_ids(documents)?;

        let span = tracing::debug_span!("rank", mode = mode.label(), documents = documents.len());
        let _guard = span.enter();

        let ranking = match mode {
            RankingMode::Keyword(profile) => self.keyword.score(documents, profile),
            RankingMode::Description(query) => self.similarity.score(documents, query)?,
        };
        check_ranking_stable(documents, ranking.as_slice());

        tracing::debug!(
            top_score = ranking.best().map(|d| d.score),
            "ranking complete"
        );
        Ok(ranking)
    }
}

fn check_distinct_ids(documents: &[Document]) -> Result<(), RankError> {
    let mut seen = HashSet::with_capacity(documents.len());
    for doc in documents {
        if !seen.insert(doc.id.as_str()) {
            return Err(RankError::DuplicateId { id: doc.id.clone() });
        }
    }
    Ok(())
}
