use binder_merge::api::SCRYFALL_API_URL;
use binder_merge::config::{Config, DEFAULT_BINDER_DIR, DEFAULT_CACHE_PATH, DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

/// Merge binder CSV exports into a Moxfield collection import
#[derive(Parser, Debug)]
#[command(name = "binder_merge")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the binder CSV exports
    #[arg(long, default_value = DEFAULT_BINDER_DIR)]
    binder_dir: PathBuf,

    /// Scryfall name cache (JSON)
    #[arg(long, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Moxfield CSV that rows are appended to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Scryfall API base URL
    #[arg(long, default_value = SCRYFALL_API_URL)]
    api_url: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            binder_dir: args.binder_dir,
            cache_path: args.cache,
            output_path: args.output,
            api_base_url: args.api_url,
        }
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=binder_merge=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    log::info!("Starting binder_merge");
    log::info!("Binder directory: {}", config.binder_dir.display());

    match binder_merge::run(&config) {
        Ok(summary) => log::info!(
            "Done: {} rows read, {} distinct cards, {} rows written",
            summary.rows_read,
            summary.cards_merged,
            summary.rows_written
        ),
        Err(e) => {
            log::error!("Merge failed: {e}");
            eprintln!("Error: {e}");
            if let Some(source) = std::error::Error::source(&e) {
                eprintln!("Caused by: {source}");
            }
            std::process::exit(1);
        }
    }
}
