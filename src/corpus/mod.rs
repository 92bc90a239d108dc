// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a corpus of documents from disk.
//!
//! Two layouts are accepted:
//!
//! | Path        | Layout                                             |
//! |-------------|----------------------------------------------------|
//! | file        | JSON array of `{"id", "name", "text"}` objects     |
//! | directory   | one document per top-level `.txt` file             |
//!
//! Directory loads read files in parallel and are ordered by file name, so
//! the same directory always yields the same corpus order (which matters for
//! tie-breaking in the ranking).

pub mod document;
pub mod parallel;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Document;

pub use document::{check_unique_ids, parse_corpus};
pub use parallel::load_text_dir;

/// Errors raised while loading a corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate document id '{0}'")]
    DuplicateId(String),
}

impl LoadError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Load a corpus from a JSON file or a directory of `.txt` files.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>, LoadError> {
    let metadata = std::fs::metadata(path).map_err(|e| LoadError::io(path, e))?;

    let documents = if metadata.is_dir() {
        load_text_dir(path)?
    } else {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        parse_corpus(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?
    };

    check_unique_ids(&documents)?;
    tracing::debug!(
        path = %path.display(),
        documents = documents.len(),
        "corpus loaded"
    );
    Ok(documents)
}
