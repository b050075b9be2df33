use crate::error::{CrResult, CrackError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub advisor: AdvisorParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    // Smart attack enumerates every length up to here, heuristics above.
    #[arg(long, default_value_t = 7)]
    pub exhaustive_ceiling: usize,
    // Exhaustive mode refuses anything longer (9! = 362,880 keys).
    #[arg(long, default_value_t = 9)]
    pub exhaustive_hard_limit: usize,
    #[arg(long, default_value_t = 1000)]
    pub hill_climb_iterations: usize,
    #[arg(long, default_value_t = 100)]
    pub restart_threshold: usize,
    #[arg(long, default_value_t = 100)]
    pub population_size: usize,
    #[arg(long, default_value_t = 300)]
    pub generations: usize,
    #[arg(long, default_value_t = 0.1)]
    pub mutation_rate: f64,
    #[arg(long, default_value_t = 10)]
    pub smart_keep_exhaustive: usize,

    // 0 = use the global rayon pool
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub max_time_secs: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            exhaustive_ceiling: 7,
            exhaustive_hard_limit: 9,
            hill_climb_iterations: 1000,
            restart_threshold: 100,
            population_size: 100,
            generations: 300,
            mutation_rate: 0.1,
            smart_keep_exhaustive: 10,
            threads: 0,
            seed: None,
            max_time_secs: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === Component weights (sum to 100) ===
    #[arg(long, default_value_t = 30.0)]
    pub weight_letter_freq: f64,
    #[arg(long, default_value_t = 25.0)]
    pub weight_bigram: f64,
    #[arg(long, default_value_t = 25.0)]
    pub weight_trigram: f64,
    #[arg(long, default_value_t = 20.0)]
    pub weight_quadgram: f64,

    // Chi-squared at or above this maps to a zero letter score
    #[arg(long, default_value_t = 500.0)]
    pub chi_squared_norm: f64,

    // === Dictionary ===
    #[arg(long, default_value_t = 0.5)]
    pub dictionary_bonus: f64,
    #[arg(long, default_value_t = 150.0)]
    pub score_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_letter_freq: 30.0,
            weight_bigram: 25.0,
            weight_trigram: 25.0,
            weight_quadgram: 20.0,
            chi_squared_norm: 500.0,
            dictionary_bonus: 0.5,
            score_cap: 150.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorParams {
    #[arg(long, default_value_t = 24)]
    pub pattern_pool_size: usize,
    #[arg(long, default_value_t = 9)]
    pub random_probes: usize,
    #[arg(long, default_value = "3,4,5,6,7")]
    pub common_lengths: String,
}

impl Default for AdvisorParams {
    fn default() -> Self {
        Self {
            pattern_pool_size: 24,
            random_probes: 9,
            common_lengths: "3,4,5,6,7".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CrResult<Self> {
        let content = fs::read_to_string(path)?;
        let cfg = serde_json::from_str(&content)?;
        Ok(cfg)
    }

    /// Copies every flag the user typed explicitly onto `self`, leaving
    /// file-provided values alone for flags that only carry their default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.exhaustive_ceiling);
        update_if_present!(search.exhaustive_hard_limit);
        update_if_present!(search.hill_climb_iterations);
        update_if_present!(search.restart_threshold);
        update_if_present!(search.population_size);
        update_if_present!(search.generations);
        update_if_present!(search.mutation_rate);
        update_if_present!(search.smart_keep_exhaustive);
        update_if_present!(search.threads);
        update_if_present!(search.seed);
        update_if_present!(search.max_time_secs);

        update_if_present!(weights.weight_letter_freq);
        update_if_present!(weights.weight_bigram);
        update_if_present!(weights.weight_trigram);
        update_if_present!(weights.weight_quadgram);
        update_if_present!(weights.chi_squared_norm);
        update_if_present!(weights.dictionary_bonus);
        update_if_present!(weights.score_cap);

        update_if_present!(advisor.pattern_pool_size);
        update_if_present!(advisor.random_probes);
        update_if_present!(advisor.common_lengths);
    }
}

impl SearchParams {
    pub fn max_time(&self) -> Option<Duration> {
        self.max_time_secs.map(Duration::from_secs)
    }
}

impl AdvisorParams {
    pub fn get_common_lengths(&self) -> CrResult<Vec<usize>> {
        self.common_lengths
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<usize>().map_err(|_| {
                    CrackError::Config(format!("Invalid number '{}' in common_lengths", s))
                })
            })
            .collect()
    }
}
