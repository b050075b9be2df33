pub mod climber;
pub mod crossover;
pub mod exhaustive;
pub mod genetic;
pub mod mutation;
pub mod runner;

pub use self::runner::{AttackMode, Attacker, SearchBudget};

use crate::cipher::{decode, Key};
use crate::scorer::Scorer;
use serde::Serialize;
use std::cmp::Ordering;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::time::Instant;
use strum_macros::Display;

/// A decryption attempt and its fitness.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredCandidate {
    pub key: Key,
    pub plaintext: String,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn rank_cmp(a: &Self, b: &Self) -> Ordering {
        rank_order((a.score, &a.key), (b.score, &b.key))
    }
}

/// Best first: score descending, then the shorter key, then the
/// lexicographically smaller key of the same width.
pub fn rank_order(a: (f64, &Key), b: (f64, &Key)) -> Ordering {
    b.0.total_cmp(&a.0)
        .then_with(|| a.1.len().cmp(&b.1.len()))
        .then_with(|| a.1.cmp(b.1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum StrategyKind {
    Exhaustive,
    HillClimb,
    Genetic,
}

/// One unit of a search plan. Dispatched by `match`, never through a trait object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    ExhaustiveEnumeration { lengths: RangeInclusive<usize> },
    LocalSearch { key_length: usize },
    PopulationSearch { key_length: usize },
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::ExhaustiveEnumeration { .. } => StrategyKind::Exhaustive,
            Self::LocalSearch { .. } => StrategyKind::HillClimb,
            Self::PopulationSearch { .. } => StrategyKind::Genetic,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchProgress {
    pub strategy: StrategyKind,
    pub key_length: usize,
    pub step: usize,
    pub total: usize,
    pub best_score: f64,
}

/// A trait for receiving updates during a search.
/// Returning `false` cancels the search; the best result so far is still returned.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, progress: &SearchProgress) -> bool;
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_progress(&self, _progress: &SearchProgress) -> bool {
        true
    }
}

/// Read-only state shared by every worker of one search.
pub struct SearchContext<'a, CB: ProgressCallback> {
    pub scorer: &'a Scorer,
    pub ciphertext: &'a str,
    deadline: Option<Instant>,
    cancelled: AtomicBool,
    callback: &'a CB,
}

impl<'a, CB: ProgressCallback> SearchContext<'a, CB> {
    pub fn new(
        scorer: &'a Scorer,
        ciphertext: &'a str,
        deadline: Option<Instant>,
        callback: &'a CB,
    ) -> Self {
        Self {
            scorer,
            ciphertext,
            deadline,
            cancelled: AtomicBool::new(false),
            callback,
        }
    }

    pub fn evaluate(&self, key: Key) -> ScoredCandidate {
        let plaintext = decode(self.ciphertext, &key);
        let score = self.scorer.fitness(&plaintext);
        ScoredCandidate {
            key,
            plaintext,
            score,
        }
    }

    pub fn should_stop(&self) -> bool {
        if self.cancelled.load(AtomicOrdering::Relaxed) {
            return true;
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            self.cancelled.store(true, AtomicOrdering::Relaxed);
            return true;
        }
        false
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(AtomicOrdering::Relaxed)
    }

    pub fn report(&self, progress: SearchProgress) {
        if !self.callback.on_progress(&progress) {
            self.cancelled.store(true, AtomicOrdering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(key: &str, score: f64) -> ScoredCandidate {
        ScoredCandidate {
            key: key.parse().unwrap(),
            plaintext: String::new(),
            score,
        }
    }

    #[test]
    fn test_rank_order() {
        let mut v = vec![
            cand("12", 5.0),
            cand("21", 9.0),
            cand("132", 9.0),
            cand("1", 9.0),
            cand("213", 9.0),
        ];
        v.sort_by(ScoredCandidate::rank_cmp);
        let keys: Vec<String> = v.iter().map(|c| c.key.to_string()).collect();
        assert_eq!(keys, vec!["1", "21", "132", "213", "12"]);
    }

    #[test]
    fn test_rank_order_equal_scores() {
        let mut v: Vec<ScoredCandidate> = ["213", "12", "132", "21", "1", "123"]
            .into_iter()
            .map(|k| cand(k, 0.0))
            .collect();
        v.sort_by(ScoredCandidate::rank_cmp);
        let keys: Vec<String> = v.iter().map(|c| c.key.to_string()).collect();
        assert_eq!(keys, vec!["1", "12", "21", "123", "132", "213"]);
    }

    struct StopAtOnce;
    impl ProgressCallback for StopAtOnce {
        fn on_progress(&self, _p: &SearchProgress) -> bool {
            false
        }
    }

    #[test]
    fn test_callback_cancels() {
        let scorer = Scorer::default();
        let ctx = SearchContext::new(&scorer, "ABC", None, &StopAtOnce);
        assert!(!ctx.should_stop());
        ctx.report(SearchProgress {
            strategy: StrategyKind::Genetic,
            key_length: 3,
            step: 0,
            total: 1,
            best_score: 0.0,
        });
        assert!(ctx.should_stop());
    }
}
