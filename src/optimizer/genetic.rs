use super::crossover::order_crossover;
use super::mutation::{mutate, random_key};
use super::{ProgressCallback, ScoredCandidate, SearchContext, SearchProgress, StrategyKind};
use crate::cipher::Key;
use fastrand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

const REPORT_EVERY: usize = 50;
const MIN_POPULATION: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct GeneticOptions {
    pub key_length: usize,
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
}

/// Truncation-selection GA over column permutations.
///
/// Each generation is scored in parallel; the top half survives and the rest
/// is refilled with OX children of uniformly drawn survivors. All randomness
/// comes from `rng` on the calling thread, so seeded runs repeat exactly.
pub fn evolve<CB: ProgressCallback>(
    ctx: &SearchContext<CB>,
    opts: GeneticOptions,
    rng: &mut Rng,
) -> ScoredCandidate {
    let pop_size = opts.population_size.max(MIN_POPULATION);
    let elite_size = (pop_size / 2).max(1);

    let mut population: Vec<Key> = (0..pop_size)
        .map(|_| random_key(rng, opts.key_length))
        .collect();

    let mut ranked = score_generation(ctx, &population);
    let mut best = ranked[0].clone();

    for generation in 0..opts.generations {
        if ctx.should_stop() {
            debug!("Genetic: stopped at generation {}", generation);
            break;
        }

        let survivors: Vec<Key> = ranked
            .iter()
            .take(elite_size)
            .map(|c| c.key.clone())
            .collect();

        population = survivors.clone();
        while population.len() < pop_size {
            let a = &survivors[rng.usize(0..survivors.len())];
            let b = &survivors[rng.usize(0..survivors.len())];
            let mut child = order_crossover(a, b, rng);
            if rng.f64() < opts.mutation_rate {
                mutate(&mut child, rng);
            }
            population.push(child);
        }

        ranked = score_generation(ctx, &population);
        if ranked[0].score > best.score {
            best = ranked[0].clone();
            trace!("Genetic: generation {} new best {:.2}", generation, best.score);
        }

        if generation % REPORT_EVERY == 0 {
            ctx.report(SearchProgress {
                strategy: StrategyKind::Genetic,
                key_length: opts.key_length,
                step: generation,
                total: opts.generations,
                best_score: best.score,
            });
        }
    }

    debug!(
        "Genetic: length {} best {:.2} after {} generations",
        opts.key_length, best.score, opts.generations
    );
    best
}

/// Scores a population in parallel and returns it ranked best first.
fn score_generation<CB: ProgressCallback>(
    ctx: &SearchContext<CB>,
    population: &[Key],
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = population
        .par_iter()
        .map(|k| ctx.evaluate(k.clone()))
        .collect();
    scored.sort_by(ScoredCandidate::rank_cmp);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encode;
    use crate::optimizer::NoProgress;
    use crate::scorer::Scorer;
    use std::sync::Mutex;

    struct Recorder(Mutex<Vec<f64>>);

    impl ProgressCallback for Recorder {
        fn on_progress(&self, p: &SearchProgress) -> bool {
            self.0.lock().unwrap().push(p.best_score);
            true
        }
    }

    fn opts(key_length: usize, population_size: usize, generations: usize) -> GeneticOptions {
        GeneticOptions {
            key_length,
            population_size,
            generations,
            mutation_rate: 0.1,
        }
    }

    fn cipher() -> String {
        let key: Key = "3142".parse().unwrap();
        encode("MEETMEATTHEOLDBRIDGEATNOON", &key, false)
    }

    #[test]
    fn test_best_is_non_decreasing() {
        let cipher = cipher();
        let scorer = Scorer::default();
        let recorder = Recorder(Mutex::new(Vec::new()));
        let ctx = SearchContext::new(&scorer, &cipher, None, &recorder);

        evolve(&ctx, opts(4, 20, 200), &mut Rng::with_seed(99));

        let history = recorder.0.lock().unwrap();
        assert_eq!(history.len(), 4);
        assert!(history.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let cipher = cipher();
        let scorer = Scorer::default();
        let ctx = SearchContext::new(&scorer, &cipher, None, &NoProgress);
        let best = evolve(&ctx, opts(4, 10, 0), &mut Rng::with_seed(1));
        assert_eq!(best.key.len(), 4);
    }

    #[test]
    fn test_tiny_population_is_clamped() {
        let cipher = cipher();
        let scorer = Scorer::default();
        let ctx = SearchContext::new(&scorer, &cipher, None, &NoProgress);
        let best = evolve(&ctx, opts(4, 0, 5), &mut Rng::with_seed(1));
        assert_eq!(best.key.len(), 4);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let cipher = cipher();
        let scorer = Scorer::default();
        let ctx = SearchContext::new(&scorer, &cipher, None, &NoProgress);
        let a = evolve(&ctx, opts(4, 16, 30), &mut Rng::with_seed(8));
        let b = evolve(&ctx, opts(4, 16, 30), &mut Rng::with_seed(8));
        assert_eq!(a, b);
    }
}
