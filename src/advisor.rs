//! Ranked key suggestions for a ciphertext without running a full search.

use crate::cipher::{self, decode, permutations_of, Key};
use crate::config::AdvisorParams;
use crate::error::{CrResult, CrackError};
use crate::lexicon;
use crate::optimizer::mutation::random_key;
use crate::optimizer::rank_order;
use crate::oracle;
use crate::scorer::engine::{chi_squared, letter_freq_score};
use crate::scorer::tables::ENGLISH_IC;
use crate::scorer::Scorer;
use fastrand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Widths at or below this are served from the lexicographic enumeration.
const PATTERN_MAX_LEN: usize = 5;
const FALLBACK_LENGTHS: [usize; 4] = [3, 4, 5, 6];
const FACTOR_HYPOTHESES: usize = 5;
const MAX_HYPOTHESES: usize = 10;

const FACTOR_CONFIDENCE: f64 = 70.0;
const COMMON_CONFIDENCE: f64 = 60.0;
const IC_CONFIDENCE_CAP: f64 = 95.0;

// Share of English words starting with each letter.
const STARTERS: [(char, f64); 10] = [
    ('T', 0.16),
    ('A', 0.12),
    ('O', 0.08),
    ('S', 0.08),
    ('W', 0.07),
    ('I', 0.07),
    ('H', 0.06),
    ('B', 0.05),
    ('F', 0.04),
    ('M', 0.04),
];
const STARTER_STRIDE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rationale {
    PatternEnumeration,
    ColumnHeuristic,
    RandomProbe,
}

impl fmt::Display for Rationale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternEnumeration => write!(f, "common pattern for this width"),
            Self::ColumnHeuristic => write!(f, "columns ordered by letter statistics"),
            Self::RandomProbe => write!(f, "random probe"),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub key: Key,
    pub key_length: usize,
    pub plaintext: String,
    pub score: f64,
    pub confidence: f64,
    pub rationale: Rationale,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LengthReason {
    Factor { ciphertext_length: usize },
    IndexOfCoincidence { ic: f64 },
    Common,
}

impl fmt::Display for LengthReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factor { ciphertext_length } => {
                write!(f, "factor of ciphertext length {}", ciphertext_length)
            }
            Self::IndexOfCoincidence { ic } => write!(f, "column IC {:.4}", ic),
            Self::Common => write!(f, "commonly used width"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthHypothesis {
    pub key_length: usize,
    pub confidence: f64,
    pub rationale: LengthReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyStatistics {
    pub key: Key,
    pub plaintext: String,
    pub base_score: f64,
    pub dictionary_score: f64,
    pub combined_score: f64,
    pub confidence: f64,
    pub word_count: usize,
    pub longest_word: String,
    pub longest_word_length: usize,
    pub chi_squared: f64,
    pub is_likely_english: bool,
}

pub struct Advisor {
    scorer: Arc<Scorer>,
    params: AdvisorParams,
    seed: Option<u64>,
}

impl Advisor {
    pub fn new(scorer: Arc<Scorer>, params: AdvisorParams, seed: Option<u64>) -> Self {
        Self {
            scorer,
            params,
            seed,
        }
    }

    /// Top `count` keys across the oracle's lengths and the common widths, all
    /// capped at `max_len`. Each width draws from its own RNG stream.
    pub fn recommend(
        &self,
        ciphertext: &str,
        count: usize,
        max_len: usize,
    ) -> CrResult<Vec<Recommendation>> {
        if ciphertext.is_empty() {
            return Err(CrackError::EmptyInput("ciphertext"));
        }

        let analysis = oracle::analyze(ciphertext);
        let lengths: BTreeSet<usize> = analysis
            .suggested_lengths
            .iter()
            .copied()
            .chain(self.params.get_common_lengths()?)
            .filter(|&l| l >= 1 && l <= max_len)
            .collect();
        debug!("Advisor: candidate widths {:?}", lengths);

        let mut recs: Vec<Recommendation> = lengths
            .into_par_iter()
            .flat_map_iter(|len| {
                let mut rng = self.rng_for(len as u64);
                self.analyze_column_patterns(ciphertext, len, &mut rng)
                    .into_iter()
                    .map(|(key, rationale)| self.recommendation(ciphertext, key, rationale))
                    .collect::<Vec<_>>()
            })
            .collect();

        recs.sort_by(|a, b| rank_order((a.score, &a.key), (b.score, &b.key)));
        recs.truncate(count);
        Ok(recs)
    }

    /// Candidate keys for one width, deduplicated, in generation order.
    pub fn analyze_column_patterns(
        &self,
        ciphertext: &str,
        key_length: usize,
        rng: &mut Rng,
    ) -> Vec<(Key, Rationale)> {
        if key_length == 0 {
            return Vec::new();
        }
        if key_length <= PATTERN_MAX_LEN {
            // Widths with more keys than the pool get a uniform sample.
            let mut keys: Vec<Key> = permutations_of(key_length).collect();
            if keys.len() > self.params.pattern_pool_size {
                rng.shuffle(&mut keys);
                keys.truncate(self.params.pattern_pool_size);
            }
            return keys
                .into_iter()
                .map(|k| (k, Rationale::PatternEnumeration))
                .collect();
        }

        let mut pool = vec![(
            self.column_heuristic_key(ciphertext, key_length),
            Rationale::ColumnHeuristic,
        )];
        pool.extend(
            (0..self.params.random_probes).map(|_| (random_key(rng, key_length), Rationale::RandomProbe)),
        );

        let mut seen = HashSet::new();
        pool.retain(|(k, _)| seen.insert(k.clone()));
        pool
    }

    /// Splits the ciphertext into `key_length` contiguous columns and ranks
    /// them by letter fit (70%) and starting-letter fit (30%).
    fn column_heuristic_key(&self, ciphertext: &str, key_length: usize) -> Key {
        let chars: Vec<char> = ciphertext.chars().collect();
        let col_len = chars.len() / key_length;
        let norm = self.scorer.weights.chi_squared_norm;

        let mut scored: Vec<(usize, f64)> = (0..key_length)
            .map(|col| {
                let text: String = chars
                    .iter()
                    .skip(col * col_len)
                    .take(col_len)
                    .collect();
                let total = letter_freq_score(&text, norm) * 0.7 + score_starting_letters(&text) * 0.3;
                (col + 1, total)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        Key::from_ranks_unchecked(scored.into_iter().map(|(col, _)| col).collect())
    }

    fn recommendation(&self, ciphertext: &str, key: Key, rationale: Rationale) -> Recommendation {
        let plaintext = decode(ciphertext, &key);
        let score = self.scorer.fitness(&plaintext);
        Recommendation {
            key_length: key.len(),
            key,
            plaintext,
            score,
            confidence: self.scorer.confidence(score),
            rationale,
        }
    }

    /// Merges factor, IC and common-width hypotheses; the first hypothesis
    /// for a width wins. Ordered by confidence, at most ten.
    pub fn suggest_key_length(&self, ciphertext: &str) -> Vec<LengthHypothesis> {
        let analysis = oracle::analyze(ciphertext);
        let mut hypotheses: Vec<LengthHypothesis> = Vec::new();

        hypotheses.extend(analysis.factors.iter().take(FACTOR_HYPOTHESES).map(|&f| {
            LengthHypothesis {
                key_length: f,
                confidence: FACTOR_CONFIDENCE,
                rationale: LengthReason::Factor {
                    ciphertext_length: analysis.length,
                },
            }
        }));

        for &len in &analysis.suggested_lengths {
            let ic = analysis.ic_scores.get(&len).copied().unwrap_or_default();
            hypotheses.push(LengthHypothesis {
                key_length: len,
                confidence: (50.0 + (ic - ENGLISH_IC).abs() * 100.0)
                    .min(IC_CONFIDENCE_CAP),
                rationale: LengthReason::IndexOfCoincidence { ic },
            });
        }

        hypotheses.extend(FALLBACK_LENGTHS.iter().map(|&len| LengthHypothesis {
            key_length: len,
            confidence: COMMON_CONFIDENCE,
            rationale: LengthReason::Common,
        }));

        let mut seen = HashSet::new();
        hypotheses.retain(|h| seen.insert(h.key_length));
        hypotheses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        hypotheses.truncate(MAX_HYPOTHESES);
        hypotheses
    }

    pub fn analyze_key_statistics(&self, ciphertext: &str, key: &str) -> CrResult<KeyStatistics> {
        let key = cipher::normalize(key)?;
        let plaintext = decode(ciphertext, &key);

        let base_score = self.scorer.score(&plaintext);
        let dictionary_score = lexicon::coverage_score(&plaintext);
        let combined_score = self.scorer.score_with_dictionary(&plaintext, dictionary_score);
        let chi = chi_squared(&plaintext);
        let (longest_word, longest_word_length) = lexicon::find_longest_word(&plaintext);

        Ok(KeyStatistics {
            word_count: lexicon::count_dictionary_words(&plaintext),
            confidence: self.scorer.confidence(combined_score),
            is_likely_english: chi < 200.0 && dictionary_score > 0.3,
            key,
            plaintext,
            base_score,
            dictionary_score,
            combined_score,
            longest_word,
            longest_word_length,
            chi_squared: chi,
        })
    }

    /// Statistics for every parsable key, best combined score first.
    pub fn compare_keys<S: AsRef<str>>(&self, ciphertext: &str, keys: &[S]) -> Vec<KeyStatistics> {
        let mut stats: Vec<KeyStatistics> = keys
            .iter()
            .filter_map(|k| self.analyze_key_statistics(ciphertext, k.as_ref()).ok())
            .collect();
        stats.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
        stats
    }

    fn rng_for(&self, stream: u64) -> Rng {
        match self.seed {
            Some(s) => Rng::with_seed(s.wrapping_add(stream)),
            None => Rng::new(),
        }
    }
}

/// Weighted share of common word-initial letters, sampled every tenth char.
pub fn score_starting_letters(text: &str) -> f64 {
    let sampled: Vec<char> = text
        .chars()
        .step_by(STARTER_STRIDE)
        .flat_map(char::to_uppercase)
        .collect();
    if sampled.is_empty() {
        return 0.0;
    }
    let total: f64 = sampled
        .iter()
        .filter_map(|c| STARTERS.iter().find(|(s, _)| s == c).map(|(_, w)| w))
        .sum();
    total / sampled.len() as f64
}

pub fn explain(rec: &Recommendation) -> String {
    let verdict = if rec.confidence >= 80.0 {
        "is highly likely to be correct"
    } else if rec.confidence >= 60.0 {
        "shows strong potential"
    } else if rec.confidence >= 40.0 {
        "is a reasonable candidate"
    } else {
        "is a possible option but less likely"
    };
    format!(
        "Key '{}' (length {}) {}. Score: {:.2}, Confidence: {:.1}%.",
        rec.key, rec.key_length, verdict, rec.score, rec.confidence
    )
}
