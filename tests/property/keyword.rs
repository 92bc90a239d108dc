//! Keyword scoring properties: score range, monotonicity, ranking shape.

use proptest::prelude::*;
use resrank::{KeywordScorer, RankingMode};

use super::common::{assert_ranking_well_formed, default_engine, make_corpus};
use super::{corpus_strategy, document_strategy, profile_strategy, texts};

proptest! {
    #[test]
    fn prop_keyword_score_in_range(text in document_strategy(), profile in profile_strategy()) {
        let score = KeywordScorer::new().score_text(&text, &profile);
        prop_assert!((0.0..=100.0).contains(&score));
        if profile.is_empty() || text.is_empty() {
            prop_assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn prop_keyword_score_monotone(
        text in document_strategy(),
        profile in profile_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!profile.is_empty());
        let keywords: Vec<&str> = profile.iter().map(|(k, _)| k).collect();
        let keyword = keywords[pick.index(keywords.len())];

        let scorer = KeywordScorer::new();
        let before = scorer.score_text(&text, &profile);
        let after = scorer.score_text(&format!("{} {}", text, keyword), &profile);
        prop_assert!(after >= before, "{} -> {}", before, after);
    }

    #[test]
    fn prop_keyword_ranking_well_formed(corpus in corpus_strategy(), profile in profile_strategy()) {
        let docs = make_corpus(&texts(&corpus));
        let ranking = default_engine().rank(&RankingMode::Keyword(profile), &docs).unwrap();
        assert_ranking_well_formed(&docs, &ranking);
    }
}
