use crate::error::{CrResult, CrackError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator used for the canonical form of keys wider than nine columns,
/// where single digits can no longer spell the permutation.
pub const KEY_SEPARATOR: char = '-';

/// A column permutation of `1..=n`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Key(Vec<usize>);

impl Key {
    pub fn new(ranks: Vec<usize>) -> CrResult<Self> {
        if !is_permutation(&ranks) {
            return Err(CrackError::InvalidKey(format!(
                "{:?} is not a permutation of 1..={}",
                ranks,
                ranks.len()
            )));
        }
        Ok(Self(ranks))
    }

    pub fn identity(len: usize) -> Self {
        Self((1..=len).collect())
    }

    /// Caller guarantees `ranks` is a permutation of `1..=len`.
    pub(crate) fn from_ranks_unchecked(ranks: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&ranks));
        Self(ranks)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ranks(&self) -> &[usize] {
        &self.0
    }

    /// Matrix column read at each step: entry `r` is the position holding rank `r + 1`.
    pub fn column_order(&self) -> Vec<usize> {
        let mut order = vec![0; self.0.len()];
        for (pos, &rank) in self.0.iter().enumerate() {
            order[rank - 1] = pos;
        }
        order
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 9 {
            for rank in &self.0 {
                write!(f, "{}", rank)?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.0.iter().join(&KEY_SEPARATOR.to_string()))
        }
    }
}

impl FromStr for Key {
    type Err = CrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<Vec<usize>> for Key {
    type Error = CrackError;

    fn try_from(ranks: Vec<usize>) -> Result<Self, Self::Error> {
        Key::new(ranks)
    }
}

impl From<Key> for Vec<usize> {
    fn from(key: Key) -> Self {
        key.0
    }
}

fn is_permutation(ranks: &[usize]) -> bool {
    let n = ranks.len();
    let mut seen = vec![false; n + 1];
    for &r in ranks {
        if r == 0 || r > n || seen[r] {
            return false;
        }
        seen[r] = true;
    }
    n > 0
}

fn parse_digit_key(key: &str) -> Option<Vec<usize>> {
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let ranks: Vec<usize> = key
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    is_permutation(&ranks).then_some(ranks)
}

fn parse_delimited_key(key: &str) -> Option<Vec<usize>> {
    if !key.contains(KEY_SEPARATOR) {
        return None;
    }
    let ranks: Vec<usize> = key
        .split(KEY_SEPARATOR)
        .map(|part| part.trim().parse::<usize>().ok())
        .collect::<Option<_>>()?;
    is_permutation(&ranks).then_some(ranks)
}

fn is_keyword(key: &str) -> bool {
    !key.is_empty() && key.chars().all(char::is_alphabetic)
}

/// True for a digit permutation of `1..=n`, a separator-delimited permutation,
/// or a purely alphabetic keyword.
pub fn validate(key: &str) -> bool {
    parse_digit_key(key).is_some() || parse_delimited_key(key).is_some() || is_keyword(key)
}

/// Ranks the keyword's characters alphabetically (case-insensitive);
/// equal characters keep their left-to-right order.
pub fn keyword_to_numeric(keyword: &str) -> Key {
    let mut indexed: Vec<(String, usize)> = keyword
        .chars()
        .enumerate()
        .map(|(i, c)| (c.to_uppercase().collect(), i))
        .collect();
    indexed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut ranks = vec![0; indexed.len()];
    for (rank, (_, original_idx)) in indexed.into_iter().enumerate() {
        ranks[original_idx] = rank + 1;
    }
    Key::from_ranks_unchecked(ranks)
}

pub fn normalize(key: &str) -> CrResult<Key> {
    if key.is_empty() {
        return Err(CrackError::EmptyInput("key"));
    }
    if let Some(ranks) = parse_digit_key(key).or_else(|| parse_delimited_key(key)) {
        return Ok(Key::from_ranks_unchecked(ranks));
    }
    if is_keyword(key) {
        return Ok(keyword_to_numeric(key));
    }
    Err(CrackError::InvalidKey(key.to_string()))
}

/// Every key of the given width, in lexicographic order.
pub fn permutations_of(len: usize) -> impl Iterator<Item = Key> {
    (1..=len)
        .permutations(len)
        .filter(|p| !p.is_empty())
        .map(Key::from_ranks_unchecked)
}
