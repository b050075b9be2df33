pub mod engine;
pub mod tables;
pub mod types;

pub use self::types::{ScoreDetails, TextComparison};
use crate::config::ScoringWeights;

/// Plaintext fitness model. Pure and total: every input string, including
/// the empty one, yields a finite score.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Language-model score without the dictionary boost.
    pub fn score(&self, text: &str) -> f64 {
        engine::score(text, &self.weights)
    }

    pub fn score_with_dictionary(&self, text: &str, dict_score: f64) -> f64 {
        engine::score_with_dictionary(text, dict_score, &self.weights)
    }

    /// Objective optimized by every search strategy.
    pub fn fitness(&self, text: &str) -> f64 {
        engine::fitness(text, &self.weights)
    }

    pub fn details(&self, text: &str) -> ScoreDetails {
        engine::score_details(text, &self.weights)
    }

    pub fn compare(&self, text1: &str, text2: &str) -> TextComparison {
        TextComparison {
            text1_score: self.score(text1),
            text2_score: self.score(text2),
            text1_chi_squared: engine::chi_squared(text1),
            text2_chi_squared: engine::chi_squared(text2),
        }
    }

    /// Maps a combined score onto 0..=100, rounded to two decimals.
    pub fn confidence(&self, score: f64) -> f64 {
        let pct = (score / self.weights.score_cap * 100.0).clamp(0.0, 100.0);
        (pct * 100.0).round() / 100.0
    }
}
