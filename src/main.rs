use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use creator_match::config::Config;
use creator_match::store::Store;
use creator_match::{BrandBrief, MatchError, MatchOptions};

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Aligned columns for reading
    Table,
    /// Tab-separated values for scripting
    Tsv,
    /// JSON array of {creator, score, reasons}
    Json,
}

/// Where the brief comes from: a file or a stored brand
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct BriefSource {
    /// Brief file (.json, otherwise YAML)
    #[arg(short, long)]
    brief: Option<PathBuf>,

    /// Name of a brand in the brands file
    #[arg(long)]
    brand: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank creators for a brief
    Match {
        #[command(flatten)]
        source: BriefSource,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Only show the first N results
        #[arg(short, long)]
        top: Option<usize>,

        /// Skip the diversity pass
        #[arg(long)]
        no_diversify: bool,
    },
    /// Show the per-factor score of one creator for a brief
    Explain {
        /// Creator handle
        handle: String,

        #[command(flatten)]
        source: BriefSource,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "creator-match")]
#[command(about = "Rank creators against brand campaign briefs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/creator-match/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Creators file, overriding the config
    #[arg(long, global = true)]
    creators: Option<PathBuf>,

    /// Brands file, overriding the config
    #[arg(long, global = true)]
    brands: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(code: i32, message: String) -> ! {
    eprintln!("{}", message);
    std::process::exit(code);
}

/// Brands file to load. An explicit --brands path is always used so a bad path
/// is reported; a configured one that does not exist is skipped.
fn brands_path(cli_brands: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    cli_brands.or_else(|| config.brands.clone().filter(|p| p.exists()))
}

fn load_data(cli_creators: Option<PathBuf>, cli_brands: Option<PathBuf>, config: &Config) -> Store {
    let Some(creators_path) = cli_creators.or_else(|| config.creators.clone()) else {
        fail(
            EXIT_CONFIG,
            "No creators file configured. Pass --creators or set `creators:` in the config file."
                .to_string(),
        );
    };
    let brands_path = brands_path(cli_brands, config);

    match creator_match::store::load_store(&creators_path, brands_path.as_deref()) {
        Ok(store) => store,
        Err(e) => fail(EXIT_DATA, format!("Data error: {:#}", e)),
    }
}

fn resolve_brief(source: &BriefSource, store: &Store) -> BrandBrief {
    let brief = match (&source.brief, &source.brand) {
        (Some(path), _) => creator_match::store::load_brief(path)
            .unwrap_or_else(|e| fail(EXIT_DATA, format!("Brief error: {:#}", e))),
        (None, Some(name)) => store
            .brief_for(name)
            .unwrap_or_else(|e| fail(EXIT_DATA, format!("Brief error: {}", e))),
        (None, None) => fail(EXIT_DATA, "Pass --brief or --brand".to_string()),
    };

    if let Err(errors) = creator_match::scoring::validate_brief(&brief) {
        fail(EXIT_DATA, MatchError::InvalidBrief(errors).to_string());
    }
    brief
}

fn init_config(path: Option<PathBuf>, force: bool) {
    let path = match path {
        Some(p) => p,
        None => creator_match::config::get_config_path()
            .unwrap_or_else(|e| fail(EXIT_CONFIG, format!("Config error: {:#}", e))),
    };
    if let Err(e) = creator_match::config::write_default_config(&path, force) {
        fail(EXIT_CONFIG, format!("Config error: {:#}", e));
    }
    println!("Wrote default config to {}", path.display());
}

fn print_matches(matches: &[creator_match::ScoredMatch], format: Format, verbose: bool) {
    let use_colors = creator_match::output::should_use_colors();
    match format {
        Format::Json => match creator_match::output::format_json(matches) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(EXIT_DATA, format!("Output error: {:#}", e)),
        },
        Format::Tsv => println!("{}", creator_match::output::format_tsv(matches)),
        Format::Table if verbose && !matches.is_empty() => {
            for scored in matches {
                println!(
                    "{}",
                    creator_match::output::format_match_detail(scored, use_colors)
                );
                println!();
            }
        }
        Format::Table => println!(
            "{}",
            creator_match::output::format_scored_table(matches, use_colors)
        ),
    }
}

/// Load config, validate weights, and load the creator and brand data
fn prepare(
    cli_config: Option<PathBuf>,
    creators: Option<PathBuf>,
    brands: Option<PathBuf>,
) -> (Config, MatchOptions, Store) {
    let config = match creator_match::config::load_config(cli_config) {
        Ok(c) => c,
        Err(e) => fail(EXIT_CONFIG, format!("Config error: {:#}", e)),
    };

    // Validate weights at startup
    let options = config.match_options();
    if let Err(errors) = creator_match::scoring::validate_weights(&options.weights) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let store = load_data(creators, brands, &config);
    (config, options, store)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let start_time = Instant::now();

    match cli.command {
        Commands::Init { force } => init_config(cli.config, force),
        Commands::Match {
            source,
            format,
            top,
            no_diversify,
        } => {
            let (config, mut options, store) = prepare(cli.config, cli.creators, cli.brands);
            let brief = resolve_brief(&source, &store);
            if no_diversify {
                options.diversify = false;
            }

            let creators = store.creators(config.limit());
            debug!(count = creators.len(), limit = config.limit(), "Creators available for matching");

            let outcome = creator_match::match_creators(&brief, creators, &options);
            let shown = top.unwrap_or(outcome.matches.len()).min(outcome.matches.len());
            print_matches(&outcome.matches[..shown], format, cli.verbose);

            info!(
                total = outcome.matches.len(),
                shown,
                elapsed = ?start_time.elapsed(),
                "Matched creators"
            );
        }
        Commands::Explain { handle, source } => {
            let (_config, options, store) = prepare(cli.config, cli.creators, cli.brands);
            let brief = resolve_brief(&source, &store);
            let Some(creator) = store.creator(&handle) else {
                fail(EXIT_DATA, MatchError::UnknownCreator(handle).to_string());
            };

            let breakdown = creator_match::scoring::explain(&brief, creator, &options.weights);
            let use_colors = creator_match::output::should_use_colors();
            println!(
                "{}",
                creator_match::output::format_breakdown(&creator.handle, &breakdown, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
