use crate::reports;
use clap::{ArgMatches, Args};
use colcrack::api::Session;
use colcrack::config::Config;
use colcrack::error::CrResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub config: Config,

    pub ciphertext: String,

    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    #[arg(long, default_value_t = 10)]
    pub max_len: usize,

    /// Add a one-line explanation per key.
    #[arg(long, default_value_t = false)]
    pub explain: bool,
}

pub fn run(
    args: RecommendArgs,
    config_path: Option<&str>,
    matches: &ArgMatches,
    json: bool,
) -> CrResult<()> {
    let config = super::resolve_config(config_path, &args.config, matches)?;
    let session = Session::new(config);

    info!("🧭 Recommending up to {} keys", args.count);
    let recs = session.recommend(&args.ciphertext, args.count, args.max_len)?;

    if json {
        return super::print_json(&recs);
    }
    reports::print_recommendations(&recs, args.explain);
    Ok(())
}
