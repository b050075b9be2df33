use super::{ProgressCallback, ScoredCandidate, SearchContext, SearchProgress, StrategyKind};
use crate::cipher::permutations_of;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

const BATCH_SIZE: usize = 2048;

/// Scores every key of every width in `lengths`. Results come back ranked
/// best first. A cancelled run returns whatever batches completed.
pub fn enumerate<CB: ProgressCallback>(
    ctx: &SearchContext<CB>,
    lengths: RangeInclusive<usize>,
) -> Vec<ScoredCandidate> {
    let mut results: Vec<ScoredCandidate> = Vec::new();
    let mut best_score = f64::NEG_INFINITY;

    for len in lengths {
        if len == 0 {
            continue;
        }
        let keys: Vec<_> = permutations_of(len).collect();
        let total = keys.len();
        debug!("Exhaustive: {} keys of length {}", total, len);

        let mut done = 0;
        for batch in keys.chunks(BATCH_SIZE) {
            if ctx.should_stop() {
                debug!("Exhaustive: stopped at length {} after {}/{}", len, done, total);
                results.sort_by(ScoredCandidate::rank_cmp);
                return results;
            }

            let scored: Vec<ScoredCandidate> =
                batch.par_iter().map(|k| ctx.evaluate(k.clone())).collect();

            // One merge per batch
            if let Some(top) = scored.iter().map(|c| c.score).max_by(f64::total_cmp) {
                best_score = best_score.max(top);
            }
            done += scored.len();
            results.extend(scored);

            trace!("Exhaustive: length {} {}/{}", len, done, total);
            ctx.report(SearchProgress {
                strategy: StrategyKind::Exhaustive,
                key_length: len,
                step: done,
                total,
                best_score,
            });
        }
    }

    results.sort_by(ScoredCandidate::rank_cmp);
    results
}
