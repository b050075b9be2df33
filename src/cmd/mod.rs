pub mod analyze;
pub mod attack;
pub mod cipher;
pub mod recommend;
pub mod segment;
pub mod stats;

use clap::ArgMatches;
use colcrack::config::Config;
use colcrack::error::CrResult;
use tracing::info;

/// File values first, then any flag typed on the command line.
pub fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    matches: &ArgMatches,
) -> CrResult<Config> {
    match path {
        Some(p) => {
            info!("⚙️  Loading config from: {}", p);
            let mut config = Config::load_from_file(p)?;
            config.merge_from_cli(cli_config, matches);
            Ok(config)
        }
        None => Ok(cli_config.clone()),
    }
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CrResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
