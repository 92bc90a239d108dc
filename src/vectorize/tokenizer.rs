// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Default word tokenizer for the vector space.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics and `_`)
//! at least two characters long, taken from the lower-cased text. Single
//! characters are dropped: "C" in "C and C++" never becomes a feature. Stop
//! words are removed after case folding.

use super::stop_words::{StopWordFilter, StopWords};
use super::Tokenizer;

/// Minimum token length in characters.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Word-boundary tokenizer with stop-word removal.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    stop_words: StopWordFilter,
}

impl WordTokenizer {
    pub fn new(stop_words: &StopWords) -> Self {
        WordTokenizer {
            stop_words: stop_words.filter(),
        }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        WordTokenizer::new(&StopWords::English)
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0usize;

        for ch in lowered.chars() {
            if is_word_char(ch) {
                current.push(ch);
                current_chars += 1;
            } else if !current.is_empty() {
                self.push_token(&mut tokens, std::mem::take(&mut current), current_chars);
                current_chars = 0;
            }
        }

        if !current.is_empty() {
            self.push_token(&mut tokens, current, current_chars);
        }

        tokens
    }
}

impl WordTokenizer {
    fn push_token(&self, tokens: &mut Vec<String>, token: String, chars: usize) {
        if chars >= MIN_TOKEN_CHARS && !self.stop_words.contains(&token) {
            tokens.push(token);
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
