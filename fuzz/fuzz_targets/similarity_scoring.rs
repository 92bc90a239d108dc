// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for description scoring.
//!
//! Whatever the corpus and query, the TF-IDF path must either rank every
//! document with a finite score in `[0, 100]` or report an error. It must
//! never panic, and the ranking must be sorted with ties in corpus order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use resrank::testing::make_doc;
use resrank::{Document, SimilarityConfig, SimilarityScorer};

#[derive(Debug, Arbitrary)]
struct RankInput {
    texts: Vec<Vec<u8>>,
    query: Vec<u8>,
    max_features: Option<u8>,
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(500).collect()
}

fuzz_target!(|input: RankInput| {
    let docs: Vec<Document> = input
        .texts
        .iter()
        .take(32)
        .enumerate()
        .map(|(i, bytes)| make_doc(i, &lossy(bytes)))
        .collect();
    let query = lossy(&input.query);

    let config = SimilarityConfig {
        max_features: input.max_features.map(usize::from),
        ..SimilarityConfig::default()
    };
    // max_features = 0 is a config error, not a crash.
    let Ok(scorer) = SimilarityScorer::new(&config) else {
        return;
    };

    let ranking = scorer
        .score(&docs, &query)
        .expect("similarity scoring must not fail on text input");

    assert_eq!(ranking.len(), docs.len());
    for doc in &ranking {
        assert!(doc.score.is_finite() && (0.0..=100.0).contains(&doc.score));
    }
    for pair in ranking.as_slice().windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            let a: usize = pair[0].id.parse().unwrap();
            let b: usize = pair[1].id.parse().unwrap();
            assert!(a < b, "tie order broken");
        }
    }
});
