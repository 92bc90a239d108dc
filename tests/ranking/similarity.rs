//! Description-mode ranking.

use resrank::{SimilarityConfig, SimilarityScorer, StopWords};

use super::common::{
    assert_ranking_well_formed, make_corpus, ranked_ids, sample_corpus, FixedVocabularyTokenizer,
};

fn scorer() -> SimilarityScorer {
    SimilarityScorer::new(&SimilarityConfig::default()).unwrap()
}

#[test]
fn test_description_finds_matching_resume() {
    let corpus = sample_corpus();
    let cases = [
        ("Kubernetes and Docker engineer for our AWS platform", "3"),
        ("Machine learning with Python, pandas and TensorFlow", "0"),
        ("Scrum master to lead agile planning", "2"),
        ("React and TypeScript frontend developer", "1"),
    ];
    for (query, expected) in cases {
        let ranking = scorer().score(&corpus, query).unwrap();
        assert_eq!(ranking.as_slice()[0].id, expected, "{}", query);
        assert!(ranking.as_slice()[0].score > ranking.as_slice()[1].score);
        assert_ranking_well_formed(&corpus, &ranking);
    }
}

#[test]
fn test_identical_document_scores_one_hundred() {
    let query = "Rust systems programmer, async networking and storage engines";
    let corpus = make_corpus(&["Gardener and florist", query, "Accountant"]);
    let ranking = scorer().score(&corpus, query).unwrap();
    assert_eq!(ranking.as_slice()[0].id, "1");
    assert!((ranking.as_slice()[0].score - 100.0).abs() < 1e-9);
}

#[test]
fn test_fixed_vocabulary_cosine() {
    // Rows: d0 {rust: 2, go: 1}, d1 {go: 1}, d2 {}, query {rust: 1}.
    // rust and go share a df of 2, so idf cancels and cos(d0, q) = 2 / sqrt(5).
    let tokenizer = FixedVocabularyTokenizer::new(["rust", "go"]);
    let scorer = SimilarityScorer::with_tokenizer(tokenizer, None).unwrap();
    let corpus = make_corpus(&["rust rust go", "go", "python"]);

    let ranking = scorer.score(&corpus, "rust").unwrap();
    let expected = 2.0 / 5.0_f64.sqrt() * 100.0;
    assert_eq!(ranked_ids(&ranking), ["0", "1", "2"]);
    assert!((ranking.as_slice()[0].score - expected).abs() < 1e-9);
    assert_eq!(ranking.as_slice()[1].score, 0.0);
    assert_eq!(ranking.as_slice()[2].score, 0.0);
}

#[test]
fn test_stop_word_only_query_scores_zero() {
    let corpus = make_corpus(&["", ""]);
    let ranking = scorer().score(&corpus, "the a an").unwrap();
    assert!(ranking.iter().all(|d| d.score == 0.0));
    assert_eq!(ranked_ids(&ranking), ["0", "1"]);
}

#[test]
fn test_query_without_overlap_scores_zero() {
    let corpus = sample_corpus();
    let ranking = scorer().score(&corpus, "astrophysics telescope").unwrap();
    assert!(ranking.iter().all(|d| d.score == 0.0));
    assert_ranking_well_formed(&corpus, &ranking);
}

#[test]
fn test_feature_cap_from_config() {
    let config = SimilarityConfig::from_json(r#"{"maxFeatures": 1}"#).unwrap();
    assert_eq!(config.stop_words, StopWords::English);
    let corpus = sample_corpus();
    let ranking = SimilarityScorer::new(&config)
        .unwrap()
        .score(&corpus, "python engineer")
        .unwrap();
    assert_ranking_well_formed(&corpus, &ranking);
}
