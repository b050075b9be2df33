use crate::reports;
use clap::{ArgMatches, Args};
use colcrack::api::Session;
use colcrack::config::Config;
use colcrack::error::CrResult;
use colcrack::optimizer::{AttackMode, ProgressCallback, SearchProgress};
use itertools::Itertools;
use std::time::Instant;
use strum::IntoEnumIterator;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct AttackArgs {
    #[command(flatten)]
    pub config: Config,

    pub ciphertext: String,

    /// exhaustive (alias brute_force) or smart
    #[arg(short, long, default_value_t = AttackMode::Smart, value_parser = parse_mode)]
    pub mode: AttackMode,

    #[arg(long, default_value_t = 7)]
    pub max_len: usize,

    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

fn parse_mode(s: &str) -> Result<AttackMode, String> {
    s.parse().map_err(|_| {
        format!(
            "unknown attack mode '{}' (expected one of: {})",
            s,
            AttackMode::iter().join(", ")
        )
    })
}

struct LogProgress;

impl ProgressCallback for LogProgress {
    fn on_progress(&self, p: &SearchProgress) -> bool {
        debug!(
            "   {} len {} [{}/{}] best {:.2}",
            p.strategy, p.key_length, p.step, p.total, p.best_score
        );
        true
    }
}

pub fn run(
    args: AttackArgs,
    config_path: Option<&str>,
    matches: &ArgMatches,
    json: bool,
) -> CrResult<()> {
    let config = super::resolve_config(config_path, &args.config, matches)?;
    let session = Session::new(config);

    info!(
        "🗡️  {} attack on {} chars, key lengths up to {}",
        args.mode,
        args.ciphertext.chars().count(),
        args.max_len
    );
    let start = Instant::now();
    let results = session.attack_with_progress(
        &args.ciphertext,
        args.mode,
        args.max_len,
        Some(args.limit),
        &LogProgress,
    )?;
    info!("⏱️  Finished in {:.2?}", start.elapsed());

    if json {
        return super::print_json(&results);
    }
    reports::print_candidates(&results, session.scorer());
    Ok(())
}
