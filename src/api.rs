//! Request-scoped entry points. Nothing here holds state between calls.

use crate::advisor::{Advisor, KeyStatistics, LengthHypothesis, Recommendation};
use crate::cipher::{self, MatrixView};
use crate::config::Config;
use crate::error::{CrResult, CrackError};
use crate::lexicon::{self, WordMatch, MAX_WORD_LEN};
use crate::optimizer::{
    AttackMode, Attacker, ProgressCallback, ScoredCandidate, SearchBudget,
};
use crate::oracle::{self, CiphertextAnalysis};
use crate::scorer::{ScoreDetails, Scorer, TextComparison};
use std::sync::Arc;

/// Result count shown when the caller gives no limit.
pub const DEFAULT_ATTACK_LIMIT: usize = 20;

pub fn encrypt(plaintext: &str, key: &str, keep_spaces: bool) -> CrResult<String> {
    cipher::encrypt(plaintext, key, keep_spaces)
}

pub fn decrypt(ciphertext: &str, key: &str) -> CrResult<String> {
    cipher::decrypt(ciphertext, key)
}

pub fn validate_key(key: &str) -> bool {
    cipher::validate(key)
}

/// Canonical numeric form of a digit key or keyword.
pub fn normalize_key(key: &str) -> CrResult<String> {
    cipher::normalize(key).map(|k| k.to_string())
}

pub fn visualize(plaintext: &str, key: &str) -> CrResult<MatrixView> {
    if plaintext.is_empty() {
        return Err(CrackError::EmptyInput("plaintext"));
    }
    let key = cipher::normalize(key)?;
    Ok(cipher::visualize(plaintext, &key))
}

pub fn score_text_by_dictionary(text: &str) -> f64 {
    lexicon::coverage_score(text)
}

pub fn analyze(ciphertext: &str) -> CiphertextAnalysis {
    oracle::analyze(ciphertext)
}

pub fn segment_text(text: &str) -> String {
    lexicon::segment(text, MAX_WORD_LEN)
}

pub fn find_words(text: &str) -> Vec<WordMatch> {
    lexicon::find_words(text, 2)
}

/// Scorer and tuning shared by the scoring, search and advice calls.
pub struct Session {
    pub config: Config,
    scorer: Arc<Scorer>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        let scorer = Arc::new(Scorer::new(config.weights.clone()));
        Self { config, scorer }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn score_text(&self, text: &str) -> f64 {
        self.scorer.score(text)
    }

    pub fn score_details(&self, text: &str) -> ScoreDetails {
        self.scorer.details(text)
    }

    pub fn compare_texts(&self, text1: &str, text2: &str) -> TextComparison {
        self.scorer.compare(text1, text2)
    }

    pub fn attack(
        &self,
        ciphertext: &str,
        mode: AttackMode,
        max_len: usize,
        limit: Option<usize>,
    ) -> CrResult<Vec<ScoredCandidate>> {
        let mut results = self.attacker().attack(ciphertext, mode, max_len)?;
        results.truncate(limit.unwrap_or(DEFAULT_ATTACK_LIMIT));
        Ok(results)
    }

    pub fn attack_with_progress<CB: ProgressCallback>(
        &self,
        ciphertext: &str,
        mode: AttackMode,
        max_len: usize,
        limit: Option<usize>,
        callback: &CB,
    ) -> CrResult<Vec<ScoredCandidate>> {
        let budget = SearchBudget::from(&self.config.search);
        let mut results = self
            .attacker()
            .attack_with(ciphertext, mode, max_len, budget, callback)?;
        results.truncate(limit.unwrap_or(DEFAULT_ATTACK_LIMIT));
        Ok(results)
    }

    pub fn recommend(
        &self,
        ciphertext: &str,
        count: usize,
        max_len: usize,
    ) -> CrResult<Vec<Recommendation>> {
        self.advisor().recommend(ciphertext, count, max_len)
    }

    pub fn suggest_key_length(&self, ciphertext: &str) -> Vec<LengthHypothesis> {
        self.advisor().suggest_key_length(ciphertext)
    }

    pub fn key_statistics(&self, ciphertext: &str, key: &str) -> CrResult<KeyStatistics> {
        self.advisor().analyze_key_statistics(ciphertext, key)
    }

    pub fn compare_keys(&self, ciphertext: &str, keys: &[String]) -> Vec<KeyStatistics> {
        self.advisor().compare_keys(ciphertext, keys)
    }

    fn attacker(&self) -> Attacker {
        Attacker::new(self.scorer.clone(), self.config.search.clone())
    }

    fn advisor(&self) -> Advisor {
        Advisor::new(
            self.scorer.clone(),
            self.config.advisor.clone(),
            self.config.search.seed,
        )
    }
}

pub fn score_text(text: &str) -> f64 {
    Scorer::default().score(text)
}

pub fn attack(
    ciphertext: &str,
    mode: AttackMode,
    max_len: usize,
    limit: Option<usize>,
) -> CrResult<Vec<ScoredCandidate>> {
    Session::default().attack(ciphertext, mode, max_len, limit)
}

pub fn recommend(ciphertext: &str, count: usize, max_len: usize) -> CrResult<Vec<Recommendation>> {
    Session::default().recommend(ciphertext, count, max_len)
}

pub fn suggest_key_length(ciphertext: &str) -> Vec<LengthHypothesis> {
    Session::default().suggest_key_length(ciphertext)
}

pub fn key_statistics(ciphertext: &str, key: &str) -> CrResult<KeyStatistics> {
    Session::default().key_statistics(ciphertext, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_forms() {
        assert_eq!(normalize_key("SECRET").unwrap(), "521436");
        assert_eq!(normalize_key("312").unwrap(), "312");
        assert!(matches!(normalize_key(""), Err(CrackError::EmptyInput("key"))));
    }

    #[test]
    fn test_attack_limit() {
        let cipher = encrypt("ATTACKATDAWN", "312", false).unwrap();
        let results = attack(&cipher, AttackMode::Exhaustive, 4, None).unwrap();
        assert_eq!(results.len(), DEFAULT_ATTACK_LIMIT);
        let results = attack(&cipher, AttackMode::Exhaustive, 4, Some(3)).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].key.to_string(), "312");
    }

    #[test]
    fn test_visualize_requires_input() {
        assert!(matches!(visualize("", "12"), Err(CrackError::EmptyInput(_))));
        let view = visualize("HELLO", "21").unwrap();
        assert_eq!(view.num_cols, 2);
        assert_eq!(view.num_rows, 3);
    }
}
