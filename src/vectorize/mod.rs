// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vector space: tokenize → term frequency → inverse document frequency → cosine.
//!
//! This is the only part of ranking that depends on how text is split into
//! terms, so the split is a trait. Production uses [`WordTokenizer`]; tests can
//! plug in a fixed-vocabulary tokenizer and check TF-IDF arithmetic without
//! caring about word boundaries or stop-word lists.
//!
//! ```text
//! corpus rows ──▶ Tokenizer ──▶ term counts ──▶ df / feature cap ──▶ idf
//!                                                                     │
//!                       cosine(query row, doc row) ◀── L2 rows ◀──────┘
//! ```

pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;

use thiserror::Error;

pub use stop_words::{StopWords, ENGLISH_STOP_WORDS};
pub use tfidf::{cosine_similarity, SparseRow, TermMatrix, TfidfVectorizer};
pub use tokenizer::WordTokenizer;

/// Splits text into terms.
///
/// Implementations must be deterministic: the same text always yields the
/// same tokens in the same order. `Send + Sync` so one tokenizer can serve
/// parallel ranking runs.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}

/// Why a corpus could not be turned into vectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorizeError {
    /// No row produced a single usable term.
    #[error("empty vocabulary; the corpus has no terms left after tokenization")]
    EmptyVocabulary,

    /// A weight came out as NaN or infinity.
    #[error("non-finite weight in row {row}")]
    NonFinite { row: usize },
}
