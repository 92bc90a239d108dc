// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vectorization and cosine similarity over sparse rows.
//!
//! # Weighting
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1        (smoothed)
//! w(t, d)   = tf(t, d) × idf(t), then each row is L2-normalized
//! ```
//!
//! `n` is the number of rows in the corpus passed to [`TfidfVectorizer::fit_transform`],
//! query row included. The `+ 1` terms mean no weight is ever zero or negative
//! for a term that occurs, so every cosine lands in `[0, 1]`.
//!
//! # Feature cap
//!
//! With `max_features = k`, only the `k` terms with the highest document
//! frequency survive. Ties go to the alphabetically smaller term. Document
//! frequencies and idf are computed over the full corpus before the cap.
//!
//! # Determinism
//!
//! Feature indices follow alphabetical order of the kept vocabulary, rows are
//! sorted by feature index, and every sum runs in index order. Hash map
//! iteration order never reaches a floating-point accumulator, so two runs on
//! the same corpus produce bit-identical matrices.

use std::collections::HashMap;
use std::num::NonZeroUsize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Tokenizer, VectorizeError};

/// A sparse, L2-normalized row: `(feature index, weight)` sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseRow {
    entries: Vec<(u32, f64)>,
}

impl SparseRow {
    /// Build a row from unsorted `(index, weight)` pairs and L2-normalize it.
    ///
    /// A row whose norm is zero is left as-is (it has no entries in practice).
    pub fn normalized(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(index, _)| index);
        let norm = l2_norm(&entries);
        if norm > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= norm;
            }
        }
        SparseRow { entries }
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight of a feature, or 0.0 when the row does not contain it.
    pub fn get(&self, index: u32) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        l2_norm(&self.entries)
    }

    /// Sparse dot product: merge-join on sorted indices.
    pub fn dot(&self, other: &SparseRow) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn is_finite(&self) -> bool {
        self.entries.iter().all(|(_, w)| w.is_finite())
    }
}

fn l2_norm(entries: &[(u32, f64)]) -> f64 {
    entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Cosine of the angle between two rows. Zero when either row is empty.
pub fn cosine_similarity(a: &SparseRow, b: &SparseRow) -> f64 {
    let denominator = a.norm() * b.norm();
    if denominator == 0.0 {
        return 0.0;
    }
    a.dot(b) / denominator
}

/// The fitted vector space: vocabulary, idf weights, and one row per input text.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<SparseRow>,
}

impl TermMatrix {
    /// Kept terms in feature-index (alphabetical) order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Feature index of a term.
    pub fn feature_index(&self, term: &str) -> Option<u32> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| i as u32)
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.feature_index(term).map(|i| self.idf[i as usize])
    }

    pub fn rows(&self) -> &[SparseRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&SparseRow> {
        self.rows.get(index)
    }
}

/// Smoothed inverse document frequency.
pub fn smooth_idf(n_rows: usize, doc_freq: usize) -> f64 {
    ((1.0 + n_rows as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Fits a TF-IDF space over a corpus.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer<T> {
    tokenizer: T,
    max_features: Option<NonZeroUsize>,
}

impl<T: Tokenizer> TfidfVectorizer<T> {
    pub fn new(tokenizer: T, max_features: Option<NonZeroUsize>) -> Self {
        TfidfVectorizer {
            tokenizer,
            max_features,
        }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn max_features(&self) -> Option<NonZeroUsize> {
        self.max_features
    }

    /// Learn the vocabulary from `corpus` and return one row per entry.
    ///
    /// Fails with [`VectorizeError::EmptyVocabulary`] when no entry yields a
    /// single token.
    pub fn fit_transform(&self, corpus: &[&str]) -> Result<TermMatrix, VectorizeError> {
        let counts = self.count_terms(corpus);

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for row in &counts {
            for term in row.keys() {
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let features = select_features(doc_freq, self.max_features);
        let index: HashMap<&str, u32> = features
            .iter()
            .enumerate()
            .map(|(i, (term, _))| (*term, i as u32))
            .collect();
        let idf: Vec<f64> = features
            .iter()
            .map(|&(_, df)| smooth_idf(corpus.len(), df))
            .collect();

        let mut rows = Vec::with_capacity(counts.len());
        for (row_index, row_counts) in counts.iter().enumerate() {
            let entries: Vec<(u32, f64)> = row_counts
                .iter()
                .filter_map(|(term, &count)| {
                    index
                        .get(term.as_str())
                        .map(|&i| (i, f64::from(count) * idf[i as usize]))
                })
                .collect();
            let row = SparseRow::normalized(entries);
            if !row.is_finite() {
                return Err(VectorizeError::NonFinite { row: row_index });
            }
            rows.push(row);
        }

        tracing::trace!(
            rows = rows.len(),
            features = features.len(),
            "fitted tf-idf space"
        );

        Ok(TermMatrix {
            vocabulary: features.iter().map(|(term, _)| term.to_string()).collect(),
            idf,
            rows,
        })
    }

    fn count_terms(&self, corpus: &[&str]) -> Vec<HashMap<String, u32>> {
        #[cfg(feature = "parallel")]
        let texts = corpus.par_iter();
        #[cfg(not(feature = "parallel"))]
        let texts = corpus.iter();

        texts
            .map(|text| {
                let mut counts: HashMap<String, u32> = HashMap::new();
                for token in self.tokenizer.tokenize(text) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                counts
            })
            .collect()
    }
}

/// Apply the feature cap, then order the survivors alphabetically.
fn select_features(
    doc_freq: HashMap<&str, usize>,
    max_features: Option<NonZeroUsize>,
) -> Vec<(&str, usize)> {
    let mut features: Vec<(&str, usize)> = doc_freq.into_iter().collect();

    if let Some(cap) = max_features {
        if features.len() > cap.get() {
            features.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            features.truncate(cap.get());
        }
    }

    features.sort_unstable_by(|a, b| a.0.cmp(b.0));
    features
}
