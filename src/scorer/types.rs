use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, Serialize, PartialEq)]
pub struct ScoreDetails {
    // Raw component rates, each in [0, 1]
    pub letter_freq: f64,
    pub bigram: f64,
    pub trigram: f64,
    pub quadgram: f64,

    // INFINITY when the text has no letters
    pub chi_squared: f64,

    // Dictionary coverage in [0, 1]
    pub dictionary: f64,

    // Top-line Scores
    pub base_score: f64,
    pub combined_score: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TextComparison {
    pub text1_score: f64,
    pub text2_score: f64,
    pub text1_chi_squared: f64,
    pub text2_chi_squared: f64,
}
