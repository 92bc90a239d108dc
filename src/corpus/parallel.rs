// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel loading of a directory of plain-text resumes.
//!
//! Reading files is the only expensive part and each file is independent, so
//! the reads go through `par_iter()`. Ordering is fixed up front by sorting the
//! file names; rayon's `collect` preserves that order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::Document;

use super::LoadError;

const TEXT_EXTENSION: &str = "txt";

/// Load every top-level `.txt` file in `dir` as a document.
///
/// `id` and `name` are both the file name. Invalid UTF-8 byte sequences are
/// dropped rather than rejected; scanned or mangled resumes are common and
/// still rankable.
pub fn load_text_dir(dir: &Path) -> Result<Vec<Document>, LoadError> {
    let paths = text_files(dir)?;

    #[cfg(feature = "parallel")]
    let iter = paths.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = paths.iter();

    iter.map(|path| read_document(path)).collect()
}

/// Sorted `.txt` files directly under `dir`.
fn text_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        let is_text = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION));
        if is_text && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn read_document(path: &Path) -> Result<Document, LoadError> {
    let bytes = fs::read(path).map_err(|e| LoadError::io(path, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Document::new(name.clone(), name, decode_dropping_invalid(&bytes)))
}

/// UTF-8 decode that skips invalid sequences instead of inserting U+FFFD,
/// so a stray byte inside a word leaves the word intact.
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
