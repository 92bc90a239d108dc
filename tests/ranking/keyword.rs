//! Keyword-mode ranking over the built-in roles and hand-written profiles.

use resrank::{find_role, Document, KeywordProfile, KeywordScorer, RankError};

use super::common::{assert_ranking_well_formed, make_doc, make_profile, ranked_ids, sample_corpus};

fn role_profile(name: &str) -> KeywordProfile {
    find_role(name)
        .unwrap_or_else(|| panic!("missing role {}", name))
        .profile()
        .unwrap()
}

#[test]
fn test_worked_example_scores_16_25() {
    let profile = make_profile(&[("python", 5), ("sql", 3)]);
    let docs = vec![make_doc(1, "Python developer with Python and SQL skills")];
    let ranking = KeywordScorer::new().score(&docs, &profile);
    assert_eq!(ranking.as_slice()[0].score, 16.25);
}

#[test]
fn test_each_role_picks_its_resume() {
    let corpus = sample_corpus();
    let cases = [
        ("Data Scientist", "0"),
        ("Web Developer", "1"),
        ("Project Manager", "2"),
        ("DevOps Engineer", "3"),
        ("Software Engineer", "4"),
    ];
    for (role, expected) in cases {
        let ranking = KeywordScorer::new().score(&corpus, &role_profile(role));
        assert_eq!(ranking.as_slice()[0].id, expected, "{}", role);
        assert_ranking_well_formed(&corpus, &ranking);
    }
}

#[test]
fn test_zero_scores_keep_corpus_order() {
    let corpus = sample_corpus();
    let ranking = KeywordScorer::new().score(&corpus, &role_profile("Data Scientist"));
    assert_eq!(ranked_ids(&ranking), ["0", "1", "2", "3", "4", "5"]);
    assert_eq!(ranking.as_slice()[0].score, 8.75);
}

#[test]
fn test_substring_matches_are_counted() {
    // "java" is found inside "JavaScript", so the frontend resume outranks the
    // data scientist who only matches "python".
    let corpus = sample_corpus();
    let ranking = KeywordScorer::new().score(&corpus, &role_profile("Software Engineer"));
    assert_eq!(ranked_ids(&ranking)[..3], ["4", "1", "0"]);
}

#[test]
fn test_saturates_at_one_hundred() {
    let profile = make_profile(&[("rust", 2), ("tokio", 1)]);
    let text = "rust tokio ".repeat(25);
    let docs = vec![make_doc(0, &text)];
    let ranking = KeywordScorer::new().score(&docs, &profile);
    assert_eq!(ranking.as_slice()[0].score, 100.0);
}

#[test]
fn test_matching_ignores_case() {
    let profile = make_profile(&[("Kubernetes", 1)]);
    let scorer = KeywordScorer::new();
    assert_eq!(
        scorer.score_text("KUBERNETES kubernetes KuBeRnEtEs", &profile),
        30.0
    );
}

#[test]
fn test_empty_profile_scores_zero() {
    let docs = vec![make_doc(0, "python sql")];
    let ranking = KeywordScorer::new().score(&docs, &KeywordProfile::empty());
    assert_eq!(ranking.as_slice()[0].score, 0.0);
}

#[test]
fn test_missing_text_scores_zero() {
    let docs: Vec<Document> =
        serde_json::from_str(r#"[{"id": "a", "name": "a.txt", "text": null}]"#).unwrap();
    let ranking = KeywordScorer::new().score(&docs, &role_profile("Web Developer"));
    assert_eq!(ranking.as_slice()[0].score, 0.0);
}

#[test]
fn test_invalid_profiles_rejected() {
    for entries in [
        vec![("python", 0)],
        vec![("python", -3)],
        vec![("  ", 2)],
        vec![("Python", 2), ("python", 1)],
    ] {
        assert!(
            matches!(
                KeywordProfile::new(entries.clone()),
                Err(RankError::InvalidProfile { .. })
            ),
            "{:?} accepted",
            entries
        );
    }
}

#[test]
fn test_profile_json_round_trip_validates() {
    let profile: KeywordProfile = serde_json::from_str(r#"{"python": 5, "sql": 3}"#).unwrap();
    assert_eq!(profile.weight("sql"), Some(3));
    assert!(serde_json::from_str::<KeywordProfile>(r#"{"python": 0}"#).is_err());
}

#[test]
fn test_breakdown_explains_score() {
    let profile = make_profile(&[("python", 5), ("sql", 3)]);
    let hits = KeywordScorer::new().breakdown("Python developer with Python and SQL skills", &profile);
    let raw: u64 = hits.iter().map(|h| h.contribution()).sum();
    assert_eq!(raw, 13);
}
