// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resume ranking: order a corpus of resumes by fit to a job role or to a
//! free-text job description.
//!
//! Two strategies, never mixed in one run:
//!
//! - **Keyword**: a role's weighted keyword profile is matched against each
//!   resume by case-insensitive substring counts. Scores saturate at ten
//!   mentions per keyword.
//! - **Description**: the description and the resumes are embedded together
//!   in a TF-IDF vector space; each resume scores its cosine similarity to the
//!   description.
//!
//! Both produce scores in `[0, 100]` and a stable, descending ranking: ties
//! keep corpus order, and the same input always gives bit-identical output.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │  corpus.rs  │────▶│  engine.rs   │────▶│  RankingResult    │
//! │ (JSON, .txt)│     │ (RankingMode)│     │ (types.rs)        │
//! └─────────────┘     └──────────────┘     └───────────────────┘
//!                        │         │
//!                        ▼         ▼
//!          ┌──────────────────┐  ┌────────────────────────┐
//!          │ scoring/keyword  │  │ scoring/similarity     │
//!          │ (roles.rs)       │  │ (vectorize: tokenizer, │
//!          │                  │  │  stop words, tf-idf)   │
//!          └──────────────────┘  └────────────────────────┘
//!                        │         │
//!                        ▼         ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                    contracts.rs                          │
//! │  (score range, descending order, stable ties)           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use resrank::{Document, KeywordProfile, RankingEngine, RankingMode, SimilarityConfig};
//!
//! let engine = RankingEngine::new(&SimilarityConfig::default()).unwrap();
//! let docs = vec![Document::new("1", "cv.txt", "Python developer with Python and SQL skills")];
//! let profile = KeywordProfile::new([("python", 5), ("sql", 3)]).unwrap();
//!
//! let ranking = engine.rank(&RankingMode::Keyword(profile), &docs).unwrap();
//! assert_eq!(ranking.as_slice()[0].score, 16.25);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
pub mod corpus;
mod engine;
mod error;
pub mod roles;
pub mod scoring;
pub mod testing;
mod types;
mod utils;
pub mod vectorize;

// Re-exports for public API
pub use config::{SimilarityConfig, DEFAULT_MAX_FEATURES};
pub use corpus::{load_corpus, LoadError};
pub use engine::{RankingEngine, RankingMode};
pub use error::RankError;
pub use roles::{find_role, RoleProfile, BUILTIN_ROLES};
pub use scoring::{KeywordHit, KeywordScorer, SimilarityScorer, MAX_SCORE};
pub use types::{Document, KeywordProfile, RankingResult, ScoredDocument};
pub use vectorize::{StopWords, Tokenizer, WordTokenizer};
