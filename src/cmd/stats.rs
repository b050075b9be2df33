use crate::reports;
use clap::{ArgMatches, Args};
use colcrack::api::Session;
use colcrack::config::Config;
use colcrack::error::{CrResult, CrackError};
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub config: Config,

    pub ciphertext: String,

    /// One or more keys to compare.
    #[arg(short, long, num_args = 1.., required = true)]
    pub keys: Vec<String>,
}

pub fn run(
    args: StatsArgs,
    config_path: Option<&str>,
    matches: &ArgMatches,
    json: bool,
) -> CrResult<()> {
    let config = super::resolve_config(config_path, &args.config, matches)?;
    let session = Session::new(config);

    let stats = session.compare_keys(&args.ciphertext, &args.keys);
    if stats.len() < args.keys.len() {
        warn!(
            "⚠️  Skipped {} invalid key(s)",
            args.keys.len() - stats.len()
        );
    }
    if stats.is_empty() {
        return Err(CrackError::InvalidKey(args.keys.join(", ")));
    }

    if json {
        return super::print_json(&stats);
    }
    reports::print_key_statistics(&stats);
    if let Some(best) = stats.first() {
        reports::print_score_details(&best.key.to_string(), &session.score_details(&best.plaintext));
    }
    Ok(())
}
