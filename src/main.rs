use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Columnar transposition toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config; flags given on the command line still win.
    #[arg(global = true, short, long)]
    config: Option<String>,

    /// Print results as JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encrypt(cmd::cipher::EncryptArgs),
    Decrypt(cmd::cipher::DecryptArgs),
    ValidateKey(cmd::cipher::ValidateKeyArgs),
    Attack(cmd::attack::AttackArgs),
    Analyze(cmd::analyze::AnalyzeArgs),
    Recommend(cmd::recommend::RecommendArgs),
    Segment(cmd::segment::SegmentArgs),
    Stats(cmd::stats::StatsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("🔐 colcrack {}", env!("CARGO_PKG_VERSION"));

    let sub_matches = matches
        .subcommand()
        .map(|(_, m)| m.clone())
        .unwrap_or_default();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Encrypt(args) => cmd::cipher::run_encrypt(args, cli.json),
        Commands::Decrypt(args) => cmd::cipher::run_decrypt(args, cli.json),
        Commands::ValidateKey(args) => cmd::cipher::run_validate(args, cli.json),
        Commands::Attack(args) => cmd::attack::run(args, config_path, &sub_matches, cli.json),
        Commands::Analyze(args) => cmd::analyze::run(args, cli.json),
        Commands::Recommend(args) => {
            cmd::recommend::run(args, config_path, &sub_matches, cli.json)
        }
        Commands::Segment(args) => cmd::segment::run(args, cli.json),
        Commands::Stats(args) => cmd::stats::run(args, config_path, &sub_matches, cli.json),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
