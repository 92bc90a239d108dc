// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Description scoring: TF-IDF cosine similarity to a free-text query.
//!
//! The query is appended to the corpus as one extra row, the whole thing is
//! vectorized together, and each document's score is
//! `cosine(query row, document row) × 100`.
//!
//! Because the query is part of the fit, its terms count toward document
//! frequency. A term that appears only in the query and one resume is "rarer"
//! than one that appears in every resume, which is the point.
//!
//! # Degenerate corpora
//!
//! If nothing survives tokenization (all texts empty, or the query and
//! documents are nothing but stop words), every document scores 0.0. That is
//! an expected outcome for contentless input, not an error. Anything else that
//! goes wrong during vectorization surfaces as [`RankError::ScoringFailed`].

use crate::config::SimilarityConfig;
use crate::error::RankError;
use crate::scoring::keyword::MAX_SCORE;
use crate::scoring::ranking::into_ranking;
use crate::types::{Document, RankingResult, ScoredDocument};
use crate::vectorize::{
    cosine_similarity, TfidfVectorizer, Tokenizer, VectorizeError, WordTokenizer,
};

/// Ranks documents by TF-IDF cosine similarity to a query.
///
/// Generic over the tokenizer so tests can substitute a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct SimilarityScorer<T = WordTokenizer> {
    vectorizer: TfidfVectorizer<T>,
}

impl SimilarityScorer<WordTokenizer> {
    /// Scorer with the default word tokenizer, tuned by `config`.
    pub fn new(config: &SimilarityConfig) -> Result<Self, RankError> {
        let tokenizer = WordTokenizer::new(&config.stop_words);
        Ok(SimilarityScorer {
            vectorizer: TfidfVectorizer::new(tokenizer, config.feature_cap()?),
        })
    }
}

impl<T: Tokenizer> SimilarityScorer<T> {
    /// Scorer with a custom tokenizer. `max_features = Some(0)` is rejected.
    pub fn with_tokenizer(tokenizer: T, max_features: Option<usize>) -> Result<Self, RankError> {
        let config = SimilarityConfig {
            max_features,
            ..SimilarityConfig::default()
        };
        Ok(SimilarityScorer {
            vectorizer: TfidfVectorizer::new(tokenizer, config.feature_cap()?),
        })
    }

    /// Score every document against `query` and rank them.
    pub fn score(&self, documents: &[Document], query: &str) -> Result<RankingResult, RankError> {
        let similarities = self.similarities(documents, query)?;

        let scored = documents
            .iter()
            .zip(similarities)
            .map(|(doc, similarity)| ScoredDocument::for_document(doc, similarity * MAX_SCORE))
            .collect();

        Ok(into_ranking(scored))
    }

    /// Cosine similarity of each document to the query, in corpus order, in `[0, 1]`.
    pub fn similarities(&self, documents: &[Document], query: &str) -> Result<Vec<f64>, RankError> {
        let mut corpus: Vec<&str> = documents.iter().map(|doc| doc.text.as_str()).collect();
        corpus.push(query);

        let matrix = match self.vectorizer.fit_transform(&corpus) {
            Ok(matrix) => matrix,
            Err(err) => return map_vectorize_error(err, documents.len()),
        };

        let rows = matrix.rows();
        let (query_row, doc_rows) = rows
            .split_last()
            .ok_or_else(|| RankError::scoring_failed("term matrix has no rows"))?;

        doc_rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let similarity = cosine_similarity(query_row, row);
                if similarity.is_finite() {
                    // Unit rows can overshoot 1.0 by an ulp.
                    Ok(similarity.clamp(0.0, 1.0))
                } else {
                    Err(RankError::scoring_failed(format!(
                        "similarity for document {} is not finite",
                        i
                    )))
                }
            })
            .collect()
    }
}

/// An empty vocabulary is an expected outcome: all `documents` score 0.
/// Every other vectorizer fault is a scoring failure.
fn map_vectorize_error(err: VectorizeError, documents: usize) -> Result<Vec<f64>, RankError> {
    match err {
        VectorizeError::EmptyVocabulary => {
            tracing::debug!(documents, "no usable vocabulary; every document scores 0");
            Ok(vec![0.0; documents])
        }
        err => Err(RankError::scoring_failed(err.to_string())),
    }
}
