//! MongoDB docs scraper CLI
//!
//! Scrapes a single documentation page or every page listed in a seed
//! configuration into `data/raw/`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docs_scraper::{
    error::{AppError, Result},
    models::{Config, LoggingConfig, SeedConfig},
    pipeline,
    services::DocScraper,
    storage::LocalStorage,
    utils::fs::{ensure_dir, save_json},
};

const DEFAULT_URL: &str =
    "https://www.mongodb.com/docs/manual/reference/method/db.collection.insertOne/";

/// Scrape MongoDB docs into structured JSON
#[derive(Parser, Debug)]
#[command(name = "docs-scraper", version, about = "Scrape MongoDB docs into data/raw JSON")]
struct Cli {
    /// Project root; config and data paths are resolved against it
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Settings file (default: {root}/config/settings.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape a single URL
    Single {
        /// MongoDB docs URL to scrape
        #[arg(long, default_value = DEFAULT_URL)]
        url: String,

        /// Output directory (default: paths.raw_data_dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Scrape all seed URLs from a seed configuration
    Seed {
        /// Seed configuration JSON (default: paths.seed_config)
        #[arg(long)]
        seed_config: Option<PathBuf>,

        /// Output directory (default: paths.raw_data_dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Create data directories and a starter seed configuration
    Init,

    /// Validate settings and seed configuration
    Validate,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| cli.root.join("config/settings.toml"));
    let loaded = Config::load(&config_path);
    let level = loaded
        .as_ref()
        .map_or_else(|_| LoggingConfig::default().level, |c| c.logging.level.clone());
    init_logging(cli.verbose, &level);
    let config = Config::or_default(loaded, &config_path);

    config.validate()?;
    log::debug!("Using settings from {}", config_path.display());

    match cli.command {
        Command::Single { url, output_dir } => {
            let output_dir = output_dir.unwrap_or_else(|| config.raw_data_dir(&cli.root));
            let storage = LocalStorage::new(output_dir);
            let scraper = DocScraper::from_config(&config)?;

            let path = pipeline::run_single(&scraper, &storage, &url)?;
            log::info!("Done. Single URL scraped JSON saved at: {}", path.display());
        }

        Command::Seed {
            seed_config,
            output_dir,
        } => {
            let seed_path = seed_config.unwrap_or_else(|| config.seed_path(&cli.root));
            let output_dir = output_dir.unwrap_or_else(|| config.raw_data_dir(&cli.root));
            let storage = LocalStorage::new(output_dir);
            let scraper = DocScraper::from_config(&config)?;

            let outcome = pipeline::run_seed_file(&scraper, &storage, &seed_path)?;
            log::info!("Done. Seed scrape complete.");
            for path in &outcome.saved {
                log::info!("  -> {}", path.display());
            }
            log::info!(
                "Saved {} documents to {}",
                outcome.saved.len(),
                storage.root_dir().display()
            );
        }

        Command::Init => {
            for dir in config.data_dirs(&cli.root) {
                ensure_dir(&dir)?;
            }
            log::info!("Ensured data directories exist");

            let seed_path = config.seed_path(&cli.root);
            if seed_path.exists() {
                log::info!("Exists (skipped): {}", seed_path.display());
            } else {
                save_json(&seed_path, &SeedConfig::starter())?;
                log::info!("Created: {}", seed_path.display());
            }
        }

        Command::Validate => {
            log::info!("✓ Settings OK");

            let seed_path = config.seed_path(&cli.root);
            let seed = SeedConfig::load(&seed_path)?;
            log::info!(
                "✓ Seed config OK: {} domains, {} seed URLs",
                seed.domains.len(),
                seed.seed_count()
            );

            let malformed = seed.malformed_entries();
            for error in &malformed {
                log::warn!("{}", error);
            }
            if !malformed.is_empty() {
                return Err(AppError::validation(format!(
                    "{} seed entries have no URL",
                    malformed.len()
                )));
            }

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
