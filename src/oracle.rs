//! Key-length inference from ciphertext structure.

use crate::scorer::tables::ENGLISH_IC;
use serde::Serialize;
use std::collections::BTreeMap;

const MAX_FACTOR: usize = 20;
const MAX_TRIAL_LENGTH: usize = 15;
const SUGGESTION_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CiphertextAnalysis {
    pub length: usize,
    pub factors: Vec<usize>,
    pub ic_scores: BTreeMap<usize, f64>,
    pub suggested_lengths: Vec<usize>,
}

/// Probability that two letters drawn from `text` match. Non-letters are
/// ignored; fewer than two letters gives zero.
pub fn index_of_coincidence(text: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    let mut total = 0usize;
    for c in text.chars().flat_map(char::to_uppercase) {
        if c.is_alphabetic() {
            *counts.entry(c).or_default() += 1;
            total += 1;
        }
    }
    if total < 2 {
        return 0.0;
    }
    let pairs: usize = counts.values().map(|&c| c * (c - 1)).sum();
    pairs as f64 / (total * (total - 1)) as f64
}

/// Divisors of `length` in `[2, min(length, 20))`.
pub fn factors(length: usize) -> Vec<usize> {
    (2..length.min(MAX_FACTOR))
        .filter(|&i| length % i == 0)
        .collect()
}

/// Mean IC over `key_len` round-robin columns (`text[i]` lands in column `i % key_len`).
pub fn average_column_ic(chars: &[char], key_len: usize) -> f64 {
    if key_len == 0 {
        return 0.0;
    }
    let mut columns = vec![String::new(); key_len];
    for (i, &c) in chars.iter().enumerate() {
        columns[i % key_len].push(c);
    }
    columns.iter().map(|col| index_of_coincidence(col)).sum::<f64>() / key_len as f64
}

pub fn analyze(ciphertext: &str) -> CiphertextAnalysis {
    let chars: Vec<char> = ciphertext.chars().collect();
    let length = chars.len();

    let ic_scores: BTreeMap<usize, f64> = (2..(length / 2).min(MAX_TRIAL_LENGTH))
        .map(|len| (len, average_column_ic(&chars, len)))
        .collect();

    // Stable sort over ascending lengths keeps the shorter length on ties.
    let mut ranked: Vec<(usize, f64)> = ic_scores.iter().map(|(&l, &ic)| (l, ic)).collect();
    ranked.sort_by(|a, b| {
        let da = (a.1 - ENGLISH_IC).abs();
        let db = (b.1 - ENGLISH_IC).abs();
        da.total_cmp(&db)
    });

    CiphertextAnalysis {
        length,
        factors: factors(length),
        suggested_lengths: ranked
            .into_iter()
            .take(SUGGESTION_COUNT)
            .map(|(l, _)| l)
            .collect(),
        ic_scores,
    }
}
