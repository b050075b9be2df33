use colcrack::api;
use colcrack::cipher::{encode, Key};
use colcrack::config::SearchParams;
use colcrack::error::CrackError;
use colcrack::optimizer::{
    AttackMode, Attacker, ProgressCallback, SearchBudget, SearchProgress, StrategyKind,
};
use colcrack::scorer::Scorer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn fast_params() -> SearchParams {
    SearchParams {
        hill_climb_iterations: 300,
        population_size: 20,
        generations: 60,
        seed: Some(1234),
        ..Default::default()
    }
}

fn attacker(params: SearchParams) -> Attacker {
    Attacker::new(Arc::new(Scorer::default()), params)
}

#[test]
fn test_exhaustive_recovers_attack_at_dawn() {
    let key: Key = "312".parse().unwrap();
    let ct = encode("ATTACKATDAWN", &key, false);

    let results = attacker(fast_params())
        .attack(&ct, AttackMode::Exhaustive, 3)
        .unwrap();

    assert_eq!(results.len(), 1 + 2 + 6);
    let length3: Vec<_> = results.iter().filter(|c| c.key.len() == 3).collect();
    assert_eq!(length3[0].key, key);
    assert!(length3.iter().all(|c| c.score <= length3[0].score));
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_smart_keeps_top_exhaustive_and_runs_heuristics() {
    let key: Key = "4132".parse().unwrap();
    let ct = encode("WEAREDISCOVEREDFLEEATONCE", &key, false);
    let params = SearchParams {
        exhaustive_ceiling: 4,
        smart_keep_exhaustive: 5,
        ..fast_params()
    };

    let results = attacker(params).attack(&ct, AttackMode::Smart, 6).unwrap();

    // 5 kept from enumeration, one hill-climb and one GA result for widths 5 and 6.
    assert_eq!(results.len(), 5 + 4);
    assert_eq!(results.iter().filter(|c| c.key.len() == 5).count(), 2);
    assert_eq!(results.iter().filter(|c| c.key.len() == 6).count(), 2);
    assert!(results.iter().any(|c| c.key == key));
}

#[test]
fn test_exhaustive_ceiling_is_enforced() {
    let err = attacker(fast_params())
        .attack("ABCDEFGHIJ", AttackMode::Exhaustive, 10)
        .unwrap_err();
    assert!(matches!(
        err,
        CrackError::UnsupportedKeyLength {
            requested: 10,
            ceiling: 9
        }
    ));
}

struct CancelAfter {
    calls: AtomicUsize,
    limit: usize,
}

impl ProgressCallback for CancelAfter {
    fn on_progress(&self, _p: &SearchProgress) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst) + 1 < self.limit
    }
}

#[test]
fn test_cancel_returns_partial_results() {
    let ct = encode("THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG", &"213".parse().unwrap(), false);
    let cancel = CancelAfter {
        calls: AtomicUsize::new(0),
        limit: 1,
    };

    // Declining the first report stops the run after its first batch.
    let results = attacker(fast_params())
        .exhaustive(&ct, 7, SearchBudget::unlimited(), &cancel)
        .unwrap();
    let total: usize = (1..=7).map(|n: usize| (1..=n).product::<usize>()).sum();
    assert!(!results.is_empty());
    assert!(results.len() < total);
}

#[test]
fn test_zero_budget_yields_no_candidates() {
    let budget = SearchBudget {
        max_time: Some(Duration::ZERO),
    };
    let err = attacker(fast_params())
        .exhaustive("ABCDEF", 3, budget, &colcrack::optimizer::NoProgress)
        .unwrap_err();
    assert!(matches!(err, CrackError::NoValidCandidates));
}

struct Recorder(Mutex<Vec<SearchProgress>>);

impl ProgressCallback for Recorder {
    fn on_progress(&self, p: &SearchProgress) -> bool {
        self.0.lock().unwrap().push(*p);
        true
    }
}

#[test]
fn test_heuristic_best_never_drops() {
    let ct = encode(
        "ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMES",
        &"5317246".parse().unwrap(),
        false,
    );
    let params = SearchParams {
        exhaustive_ceiling: 0,
        generations: 200,
        hill_climb_iterations: 400,
        threads: 1,
        ..fast_params()
    };
    let recorder = Recorder(Mutex::new(Vec::new()));
    attacker(params)
        .smart(&ct, 7, 7, SearchBudget::unlimited(), &recorder)
        .unwrap();

    let events = recorder.0.lock().unwrap();
    for kind in [StrategyKind::HillClimb, StrategyKind::Genetic] {
        let series: Vec<f64> = events
            .iter()
            .filter(|p| p.strategy == kind)
            .map(|p| p.best_score)
            .collect();
        assert!(!series.is_empty(), "no progress from {}", kind);
        assert!(series.windows(2).all(|w| w[1] >= w[0]), "{} regressed", kind);
    }
}

#[test]
fn test_single_heuristics() {
    let a = attacker(fast_params());
    let ct = encode("MEETMEATTHEOLDBRIDGEATNOON", &"24531".parse().unwrap(), false);
    assert_eq!(a.hill_climb(&ct, 5).unwrap().key.len(), 5);
    assert_eq!(a.genetic(&ct, 5).unwrap().key.len(), 5);
    assert!(matches!(a.hill_climb(&ct, 0), Err(CrackError::InvalidKey(_))));
    assert!(matches!(a.genetic("", 5), Err(CrackError::EmptyInput(_))));
}

#[test]
fn test_equal_scores_rank_shorter_keys_first() {
    // Every decryption of a uniform text is identical, so every score ties.
    let results = api::attack("QQ", AttackMode::Exhaustive, 3, Some(100)).unwrap();
    let keys: Vec<String> = results.iter().map(|c| c.key.to_string()).collect();
    assert_eq!(
        keys,
        vec!["1", "12", "21", "123", "132", "213", "231", "312", "321"]
    );
}
