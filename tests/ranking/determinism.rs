//! Repeated and concurrent runs give bit-identical rankings.

use std::thread;

use resrank::{find_role, RankingMode, RankingResult};

use super::common::{default_engine, sample_corpus};

fn modes() -> Vec<RankingMode> {
    vec![
        RankingMode::Keyword(find_role("Software Engineer").unwrap().profile().unwrap()),
        RankingMode::Description("python engineer with kubernetes experience".into()),
    ]
}

fn bits(ranking: &RankingResult) -> Vec<(String, u64)> {
    ranking
        .iter()
        .map(|d| (d.id.clone(), d.score.to_bits()))
        .collect()
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let engine = default_engine();
    let corpus = sample_corpus();
    for mode in modes() {
        let first = bits(&engine.rank(&mode, &corpus).unwrap());
        for _ in 0..5 {
            assert_eq!(bits(&engine.rank(&mode, &corpus).unwrap()), first);
        }
    }
}

#[test]
fn test_concurrent_runs_agree() {
    let engine = default_engine();
    let corpus = sample_corpus();
    let modes = modes();
    let expected: Vec<_> = modes
        .iter()
        .map(|mode| bits(&engine.rank(mode, &corpus).unwrap()))
        .collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    modes
                        .iter()
                        .map(|mode| bits(&engine.rank(mode, &corpus).unwrap()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_scores_do_not_depend_on_corpus_order_in_keyword_mode() {
    let engine = default_engine();
    let corpus = sample_corpus();
    let mut reversed = corpus.clone();
    reversed.reverse();

    let modes = modes();
    let mode = &modes[0];
    let forward = engine.rank(mode, &corpus).unwrap();
    let backward = engine.rank(mode, &reversed).unwrap();
    for doc in &forward {
        let other = backward.iter().find(|d| d.id == doc.id).unwrap();
        assert_eq!(doc.score.to_bits(), other.score.to_bits());
    }
}
