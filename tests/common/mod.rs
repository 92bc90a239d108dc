//! Shared test utilities and fixtures.

#![allow(dead_code)]

use resrank::{Document, RankingEngine, RankingResult, SimilarityConfig};

// Re-export canonical test utilities from resrank::testing
pub use resrank::testing::{make_corpus, make_doc, make_profile, FixedVocabularyTokenizer};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small, varied corpus of resumes.
pub const SAMPLE_RESUMES: &[&str] = &[
    "Data scientist with 5 years of Python, pandas and machine learning. \
     Built deep learning models in TensorFlow and reported statistics in SQL.",
    "Frontend developer: JavaScript, TypeScript, React and Angular. \
     Comfortable with HTML, CSS and Bootstrap; some Node.js backend work.",
    "Project manager leading agile teams. Scrum master, budgeting, planning \
     and stakeholder communication. Strong leadership and teamwork.",
    "DevOps engineer running Kubernetes on AWS. Docker, Terraform, Jenkins \
     pipelines, Linux administration and Bash scripting for CI/CD.",
    "Software engineer writing Java and C++. Algorithms, data structures, \
     OOP design, Git workflows and unit testing.",
    "",
];

pub fn sample_corpus() -> Vec<Document> {
    make_corpus(SAMPLE_RESUMES)
}

pub fn default_engine() -> RankingEngine {
    RankingEngine::new(&SimilarityConfig::default()).expect("default config is valid")
}

/// Ids in ranking order.
pub fn ranked_ids(ranking: &RankingResult) -> Vec<&str> {
    ranking.iter().map(|d| d.id.as_str()).collect()
}

// ============================================================================
// INVARIANT CHECKS
// ============================================================================

/// Sorted descending, scores in range, ties in corpus order, one entry per document.
pub fn assert_ranking_well_formed(corpus: &[Document], ranking: &RankingResult) {
    assert_eq!(ranking.len(), corpus.len(), "ranking drops or adds documents");

    let position = |id: &str| {
        corpus
            .iter()
            .position(|d| d.id == id)
            .unwrap_or_else(|| panic!("unknown id {} in ranking", id))
    };

    for doc in ranking {
        assert!(
            (0.0..=100.0).contains(&doc.score),
            "score {} out of range for {}",
            doc.score,
            doc.id
        );
    }
    for pair in ranking.as_slice().windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking not descending");
        if pair[0].score == pair[1].score {
            assert!(
                position(&pair[0].id) < position(&pair[1].id),
                "tie between {} and {} not in corpus order",
                pair[0].id,
                pair[1].id
            );
        }
    }
}
