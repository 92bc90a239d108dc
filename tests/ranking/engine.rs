//! The engine entry point: mode dispatch and corpus-level errors.

use resrank::{
    find_role, RankError, RankingEngine, RankingMode, SimilarityConfig, SimilarityScorer,
};

use super::common::{
    assert_ranking_well_formed, default_engine, make_corpus, make_doc, make_profile, ranked_ids,
    sample_corpus, FixedVocabularyTokenizer,
};

#[test]
fn test_keyword_mode_on_empty_corpus_fails() {
    let mode = RankingMode::Keyword(make_profile(&[("python", 5)]));
    assert_eq!(default_engine().rank(&mode, &[]), Err(RankError::EmptyCorpus));
}

#[test]
fn test_description_mode_on_empty_corpus_fails() {
    let mode = RankingMode::Description("senior rust engineer".into());
    assert_eq!(default_engine().rank(&mode, &[]), Err(RankError::EmptyCorpus));
}

#[test]
fn test_hand_built_corpus_with_repeated_id_fails() {
    // Every resume ties at 0.0; the repeated id would make ties ambiguous.
    let mut corpus = make_corpus(&["pastry", "bread"]);
    corpus.push(make_doc(0, "cake"));
    let mode = RankingMode::Keyword(make_profile(&[("python", 5)]));
    assert_eq!(
        default_engine().rank(&mode, &corpus),
        Err(RankError::DuplicateId { id: "0".into() })
    );
}

#[test]
fn test_empty_texts_with_stop_word_query_are_all_zero() {
    let corpus = vec![make_doc(1, ""), make_doc(2, "")];
    let mode = RankingMode::Description("the a an".into());
    let ranking = default_engine().rank(&mode, &corpus).unwrap();
    assert_eq!(ranked_ids(&ranking), ["1", "2"]);
    assert!(ranking.iter().all(|d| d.score == 0.0));
}

#[test]
fn test_exact_description_match_ranks_first() {
    let query = "Senior Rust engineer with distributed systems experience";
    let corpus = make_corpus(&["Pastry chef and baker", query]);
    let ranking = default_engine()
        .rank(&RankingMode::Description(query.into()), &corpus)
        .unwrap();
    assert_eq!(ranking.as_slice()[0].id, "1");
    assert!(ranking.as_slice()[0].score > ranking.as_slice()[1].score);
}

#[test]
fn test_role_mode_over_sample_corpus() {
    let corpus = sample_corpus();
    let profile = find_role("devops engineer").unwrap().profile().unwrap();
    let ranking = default_engine()
        .rank(&RankingMode::Keyword(profile), &corpus)
        .unwrap();
    assert_eq!(ranking.as_slice()[0].id, "3");
    assert_eq!(ranking.as_slice()[0].score, 10.0);
    assert_ranking_well_formed(&corpus, &ranking);
}

#[test]
fn test_engine_with_custom_tokenizer() {
    let scorer =
        SimilarityScorer::with_tokenizer(FixedVocabularyTokenizer::new(["go"]), None).unwrap();
    let engine = RankingEngine::with_similarity(scorer);
    let corpus = make_corpus(&["rust only", "go and rust"]);
    let ranking = engine
        .rank(&RankingMode::Description("go".into()), &corpus)
        .unwrap();
    assert_eq!(ranked_ids(&ranking), ["1", "0"]);
    assert!((ranking.as_slice()[0].score - 100.0).abs() < 1e-9);
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let config = SimilarityConfig {
        max_features: Some(0),
        ..SimilarityConfig::default()
    };
    assert!(matches!(
        RankingEngine::new(&config),
        Err(RankError::InvalidConfig { .. })
    ));
}

#[test]
fn test_ranking_serializes_as_array() {
    let corpus = make_corpus(&["python"]);
    let mode = RankingMode::Keyword(make_profile(&[("python", 1)]));
    let ranking = default_engine().rank(&mode, &corpus).unwrap();
    let json = serde_json::to_value(&ranking).unwrap();
    assert_eq!(json[0]["id"], "0");
    assert_eq!(json[0]["score"], 10.0);
}
