use super::tables::{NgramTable, BIGRAMS, ENGLISH_FREQ, QUADGRAMS, TRIGRAMS};
use super::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::lexicon;

pub(crate) fn upper_chars(text: &str) -> Vec<char> {
    text.to_uppercase().chars().collect()
}

/// Goodness of fit against English letter frequencies. Lower is better;
/// `f64::INFINITY` when the text holds no letters.
pub fn chi_squared(text: &str) -> f64 {
    chi_squared_chars(&upper_chars(text))
}

pub(crate) fn chi_squared_chars(chars: &[char]) -> f64 {
    let mut counts = [0usize; 26];
    let mut alpha = 0usize;
    for &c in chars {
        if c.is_alphabetic() {
            alpha += 1;
            if c.is_ascii_uppercase() {
                counts[(c as u8 - b'A') as usize] += 1;
            }
        }
    }
    if alpha == 0 {
        return f64::INFINITY;
    }

    counts
        .iter()
        .zip(ENGLISH_FREQ.iter())
        .map(|(&observed, &pct)| {
            let expected = pct / 100.0 * alpha as f64;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Maps chi-squared into `[0, 1]`; anything at or above `norm` scores zero.
pub fn letter_freq_score(text: &str, norm: f64) -> f64 {
    letter_freq_from_chi(chi_squared(text), norm)
}

fn letter_freq_from_chi(chi: f64, norm: f64) -> f64 {
    (1.0 - chi / norm).max(0.0)
}

/// Fraction of all-letter windows of width `N` that appear in `table`.
pub fn ngram_score<const N: usize>(text: &str, table: &NgramTable<N>) -> f64 {
    ngram_score_chars(&upper_chars(text), table)
}

pub(crate) fn ngram_score_chars<const N: usize>(chars: &[char], table: &NgramTable<N>) -> f64 {
    if chars.len() < N {
        return 0.0;
    }
    let mut total = 0usize;
    let mut hits = 0usize;
    for window in chars.windows(N) {
        if window.iter().all(|c| c.is_alphabetic()) {
            total += 1;
            if table.contains_chars(window) {
                hits += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// Weighted blend of letter frequency and n-gram hit rates, 0..=100 with the
/// stock weights. Texts shorter than two chars score zero.
pub fn score(text: &str, weights: &ScoringWeights) -> f64 {
    details_base(&upper_chars(text), weights).base_score
}

/// Boosts `score` by dictionary coverage and caps the result.
pub fn score_with_dictionary(text: &str, dict_score: f64, weights: &ScoringWeights) -> f64 {
    combine(score(text, weights), dict_score, weights)
}

fn combine(base: f64, dict_score: f64, weights: &ScoringWeights) -> f64 {
    (base * (1.0 + dict_score * weights.dictionary_bonus)).min(weights.score_cap)
}

fn details_base(chars: &[char], weights: &ScoringWeights) -> ScoreDetails {
    let mut d = ScoreDetails {
        chi_squared: chi_squared_chars(chars),
        ..Default::default()
    };
    if chars.len() < 2 {
        return d;
    }

    d.letter_freq = letter_freq_from_chi(d.chi_squared, weights.chi_squared_norm);
    d.bigram = ngram_score_chars(chars, &BIGRAMS);
    d.trigram = ngram_score_chars(chars, &TRIGRAMS);
    d.quadgram = ngram_score_chars(chars, &QUADGRAMS);
    d.base_score = d.letter_freq * weights.weight_letter_freq
        + d.bigram * weights.weight_bigram
        + d.trigram * weights.weight_trigram
        + d.quadgram * weights.weight_quadgram;
    d
}

/// Full breakdown, including dictionary coverage and the combined fitness.
pub fn score_details(text: &str, weights: &ScoringWeights) -> ScoreDetails {
    let chars = upper_chars(text);
    let mut d = details_base(&chars, weights);
    d.dictionary = lexicon::coverage_score(text);
    d.combined_score = combine(d.base_score, d.dictionary, weights);
    d
}

/// The search objective: `score_with_dictionary` fed by lexicon coverage.
pub fn fitness(text: &str, weights: &ScoringWeights) -> f64 {
    let base = details_base(&upper_chars(text), weights).base_score;
    if base == 0.0 {
        return 0.0;
    }
    combine(base, lexicon::coverage_score(text), weights)
}
