//! Similarity scoring properties: ranking shape, self-match, determinism.

use proptest::prelude::*;
use resrank::{RankingMode, RankingResult, SimilarityConfig, SimilarityScorer};

use super::common::{assert_ranking_well_formed, default_engine, make_corpus};
use super::{corpus_strategy, document_strategy, texts};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_similarity_ranking_well_formed(corpus in corpus_strategy(), query in document_strategy()) {
        let docs = make_corpus(&texts(&corpus));
        let ranking = default_engine()
            .rank(&RankingMode::Description(query), &docs)
            .unwrap();
        assert_ranking_well_formed(&docs, &ranking);
    }

    #[test]
    fn prop_copy_of_query_ranks_first(corpus in corpus_strategy(), query in document_strategy()) {
        let scorer = SimilarityScorer::new(&SimilarityConfig::default()).unwrap();
        let mut all = corpus.clone();
        all.push(query.clone());
        let docs = make_corpus(&texts(&all));

        let similarities = scorer.similarities(&docs, &query).unwrap();
        let own = similarities[similarities.len() - 1];
        for other in &similarities {
            prop_assert!(own + 1e-9 >= *other);
        }
    }

    #[test]
    fn prop_similarity_is_idempotent(corpus in corpus_strategy(), query in document_strategy()) {
        let docs = make_corpus(&texts(&corpus));
        let engine = default_engine();
        let mode = RankingMode::Description(query);
        let first = engine.rank(&mode, &docs).unwrap();
        let second = engine.rank(&mode, &docs).unwrap();
        let bits = |r: &RankingResult| -> Vec<(String, u64)> {
            r.iter().map(|d| (d.id.clone(), d.score.to_bits())).collect()
        };
        prop_assert_eq!(bits(&first), bits(&second));
    }
}
