use super::climber::{climb, ClimbOptions};
use super::exhaustive::enumerate;
use super::genetic::{evolve, GeneticOptions};
use super::{NoProgress, ProgressCallback, ScoredCandidate, SearchContext, Strategy};
use crate::config::SearchParams;
use crate::error::{CrResult, CrackError};
use crate::scorer::Scorer;
use fastrand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AttackMode {
    #[strum(to_string = "exhaustive", serialize = "brute_force")]
    Exhaustive,
    #[default]
    #[strum(to_string = "smart")]
    Smart,
}

/// Wall-clock limit for one attack. On expiry the best found so far is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBudget {
    pub max_time: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    fn deadline(&self) -> Option<Instant> {
        self.max_time.map(|d| Instant::now() + d)
    }
}

impl From<&SearchParams> for SearchBudget {
    fn from(params: &SearchParams) -> Self {
        Self {
            max_time: params.max_time(),
        }
    }
}

pub struct Attacker {
    scorer: Arc<Scorer>,
    options: SearchParams,
}

impl Attacker {
    pub fn new(scorer: Arc<Scorer>, options: SearchParams) -> Self {
        Self { scorer, options }
    }

    pub fn options(&self) -> &SearchParams {
        &self.options
    }

    pub fn attack(
        &self,
        ciphertext: &str,
        mode: AttackMode,
        max_len: usize,
    ) -> CrResult<Vec<ScoredCandidate>> {
        let budget = SearchBudget::from(&self.options);
        self.attack_with(ciphertext, mode, max_len, budget, &NoProgress)
    }

    pub fn attack_with<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        mode: AttackMode,
        max_len: usize,
        budget: SearchBudget,
        callback: &CB,
    ) -> CrResult<Vec<ScoredCandidate>> {
        match mode {
            AttackMode::Exhaustive => self.exhaustive(ciphertext, max_len, budget, callback),
            AttackMode::Smart => self.smart(ciphertext, 1, max_len, budget, callback),
        }
    }

    /// Every key of every width in `1..=max_len`, ranked best first.
    pub fn exhaustive<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        max_len: usize,
        budget: SearchBudget,
        callback: &CB,
    ) -> CrResult<Vec<ScoredCandidate>> {
        require_ciphertext(ciphertext)?;
        if max_len > self.options.exhaustive_hard_limit {
            return Err(CrackError::UnsupportedKeyLength {
                requested: max_len,
                ceiling: self.options.exhaustive_hard_limit,
            });
        }

        let plan = vec![Strategy::ExhaustiveEnumeration { lengths: 1..=max_len }];
        self.execute(ciphertext, &plan, None, budget, callback)
    }

    /// Enumerates short widths and runs both heuristics once per longer width.
    pub fn smart<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        min_len: usize,
        max_len: usize,
        budget: SearchBudget,
        callback: &CB,
    ) -> CrResult<Vec<ScoredCandidate>> {
        require_ciphertext(ciphertext)?;
        let plan = self.plan(min_len.max(1), max_len);
        let keep = Some(self.options.smart_keep_exhaustive);
        self.execute(ciphertext, &plan, keep, budget, callback)
    }

    pub fn hill_climb(&self, ciphertext: &str, key_length: usize) -> CrResult<ScoredCandidate> {
        require_ciphertext(ciphertext)?;
        require_width(key_length)?;
        let mut results = self.execute(
            ciphertext,
            &[Strategy::LocalSearch { key_length }],
            None,
            SearchBudget::from(&self.options),
            &NoProgress,
        )?;
        Ok(results.swap_remove(0))
    }

    pub fn genetic(&self, ciphertext: &str, key_length: usize) -> CrResult<ScoredCandidate> {
        require_ciphertext(ciphertext)?;
        require_width(key_length)?;
        let mut results = self.execute(
            ciphertext,
            &[Strategy::PopulationSearch { key_length }],
            None,
            SearchBudget::from(&self.options),
            &NoProgress,
        )?;
        Ok(results.swap_remove(0))
    }

    /// Splits `min_len..=max_len` at the exhaustive ceiling.
    pub fn plan(&self, min_len: usize, max_len: usize) -> Vec<Strategy> {
        let ceiling = self.options.exhaustive_ceiling;
        let mut plan = Vec::new();

        if min_len <= ceiling.min(max_len) {
            plan.push(Strategy::ExhaustiveEnumeration {
                lengths: min_len..=ceiling.min(max_len),
            });
        }
        for key_length in (ceiling + 1).max(min_len)..=max_len {
            plan.push(Strategy::LocalSearch { key_length });
            plan.push(Strategy::PopulationSearch { key_length });
        }
        plan
    }

    fn execute<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        plan: &[Strategy],
        keep_exhaustive: Option<usize>,
        budget: SearchBudget,
        callback: &CB,
    ) -> CrResult<Vec<ScoredCandidate>> {
        if self.options.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.threads)
                .build()
                .map_err(|e| CrackError::Config(e.to_string()))?;
            pool.install(|| {
                self.execute_in_pool(ciphertext, plan, keep_exhaustive, budget, callback)
            })
        } else {
            self.execute_in_pool(ciphertext, plan, keep_exhaustive, budget, callback)
        }
    }

    fn execute_in_pool<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        plan: &[Strategy],
        keep_exhaustive: Option<usize>,
        budget: SearchBudget,
        callback: &CB,
    ) -> CrResult<Vec<ScoredCandidate>> {
        let ctx = SearchContext::new(&self.scorer, ciphertext, budget.deadline(), callback);
        let start = Instant::now();
        let mut results: Vec<ScoredCandidate> = Vec::new();

        // Exhaustive steps are already parallel inside; run them in order.
        for step in plan {
            if let Strategy::ExhaustiveEnumeration { lengths } = step {
                let mut found = enumerate(&ctx, lengths.clone());
                if let Some(keep) = keep_exhaustive {
                    found.truncate(keep);
                }
                results.extend(found);
            }
        }

        // Heuristic runs are independent; each gets its own RNG stream.
        let heuristic: Vec<(u64, &Strategy)> = plan
            .iter()
            .filter(|s| !matches!(s, Strategy::ExhaustiveEnumeration { .. }))
            .enumerate()
            .map(|(i, s)| (i as u64, s))
            .collect();

        let found: Vec<ScoredCandidate> = heuristic
            .par_iter()
            .filter_map(|&(stream, step)| {
                if ctx.should_stop() {
                    return None;
                }
                let mut rng = self.rng_for(stream);
                self.run_heuristic(&ctx, step, &mut rng)
            })
            .collect();
        results.extend(found);

        if results.is_empty() {
            return Err(CrackError::NoValidCandidates);
        }

        results.sort_by(ScoredCandidate::rank_cmp);
        debug!(
            "Attack: {} candidates from {} strategies in {:.2?}{}",
            results.len(),
            plan.len(),
            start.elapsed(),
            if ctx.is_cancelled() { " (stopped early)" } else { "" }
        );
        Ok(results)
    }

    fn run_heuristic<CB: ProgressCallback>(
        &self,
        ctx: &SearchContext<CB>,
        step: &Strategy,
        rng: &mut Rng,
    ) -> Option<ScoredCandidate> {
        let opts = &self.options;
        match *step {
            Strategy::LocalSearch { key_length } => Some(climb(
                ctx,
                ClimbOptions {
                    key_length,
                    max_iterations: opts.hill_climb_iterations,
                    restart_threshold: opts.restart_threshold,
                },
                rng,
            )),
            Strategy::PopulationSearch { key_length } => Some(evolve(
                ctx,
                GeneticOptions {
                    key_length,
                    population_size: opts.population_size,
                    generations: opts.generations,
                    mutation_rate: opts.mutation_rate,
                },
                rng,
            )),
            Strategy::ExhaustiveEnumeration { .. } => None,
        }
    }

    fn rng_for(&self, stream: u64) -> Rng {
        match self.options.seed {
            Some(s) => Rng::with_seed(s.wrapping_add(stream)),
            None => Rng::new(),
        }
    }
}

fn require_ciphertext(ciphertext: &str) -> CrResult<()> {
    if ciphertext.is_empty() {
        return Err(CrackError::EmptyInput("ciphertext"));
    }
    Ok(())
}

fn require_width(key_length: usize) -> CrResult<()> {
    if key_length == 0 {
        return Err(CrackError::InvalidKey("key length must be at least 1".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn attacker() -> Attacker {
        Attacker::new(Arc::new(Scorer::default()), SearchParams::default())
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(AttackMode::from_str("smart").unwrap(), AttackMode::Smart);
        assert_eq!(AttackMode::from_str("brute_force").unwrap(), AttackMode::Exhaustive);
        assert_eq!(AttackMode::Exhaustive.to_string(), "exhaustive");
        assert!(AttackMode::from_str("quantum").is_err());
    }

    #[test]
    fn test_plan_splits_at_ceiling() {
        let plan = attacker().plan(3, 9);
        assert_eq!(
            plan,
            vec![
                Strategy::ExhaustiveEnumeration { lengths: 3..=7 },
                Strategy::LocalSearch { key_length: 8 },
                Strategy::PopulationSearch { key_length: 8 },
                Strategy::LocalSearch { key_length: 9 },
                Strategy::PopulationSearch { key_length: 9 },
            ]
        );
    }

    #[test]
    fn test_plan_above_ceiling_only() {
        let plan = attacker().plan(8, 8);
        assert_eq!(
            plan,
            vec![
                Strategy::LocalSearch { key_length: 8 },
                Strategy::PopulationSearch { key_length: 8 },
            ]
        );
    }

    #[test]
    fn test_errors() {
        let a = attacker();
        assert!(matches!(
            a.attack("", AttackMode::Smart, 4),
            Err(CrackError::EmptyInput("ciphertext"))
        ));
        assert!(matches!(
            a.attack("ABCDEF", AttackMode::Exhaustive, 12),
            Err(CrackError::UnsupportedKeyLength { requested: 12, ceiling: 9 })
        ));
        assert!(matches!(
            a.attack("ABCDEF", AttackMode::Exhaustive, 0),
            Err(CrackError::NoValidCandidates)
        ));
    }
}
