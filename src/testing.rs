//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashSet;

use crate::types::{Document, KeywordProfile};
use crate::vectorize::Tokenizer;

/// Create a test document whose id and name derive from `id`.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: usize, text: &str) -> Document {
    Document::new(id.to_string(), format!("resume_{}.txt", id), text)
}

/// Create one document per text, ids counting up from 0.
pub fn make_corpus(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(id, text)| make_doc(id, text))
        .collect()
}

/// Build a profile from literal pairs. Panics on an invalid profile.
pub fn make_profile(entries: &[(&str, i64)]) -> KeywordProfile {
    KeywordProfile::new(entries.iter().copied())
        .unwrap_or_else(|e| panic!("invalid test profile {:?}: {}", entries, e))
}

/// A tokenizer that only recognises a fixed set of terms.
///
/// Splits on whitespace, lowercases, and keeps a token only if it is in the
/// vocabulary. Lets tests pin exactly which terms enter the TF-IDF fit.
#[derive(Debug, Clone, Default)]
pub struct FixedVocabularyTokenizer {
    vocabulary: HashSet<String>,
}

impl FixedVocabularyTokenizer {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FixedVocabularyTokenizer {
            vocabulary: terms
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Tokenizer for FixedVocabularyTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(str::to_lowercase)
            .filter(|token| self.vocabulary.contains(token))
            .collect()
    }
}
