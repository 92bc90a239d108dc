// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::types::Document;

use super::LoadError;

/// Parse a JSON corpus: an array of documents.
pub fn parse_corpus(json: &str) -> Result<Vec<Document>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reject corpora where two documents share an id.
pub fn check_unique_ids(documents: &[Document]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(documents.len());
    for doc in documents {
        if !seen.insert(doc.id.as_str()) {
            return Err(LoadError::DuplicateId(doc.id.clone()));
        }
    }
    Ok(())
}
