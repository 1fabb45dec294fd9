//! eol-lookup: end-of-life dates for a list of products
//!
//! Reads `product,version` rows and prints one quoted CSV record per row.

use clap::Parser;
use eol_lookup::{cli, config::LookupConfig, pipeline::exit_codes};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eol-lookup")]
#[command(version)]
#[command(about = "Look up end-of-life dates on endoflife.date", long_about = None)]
#[command(after_help = "OUTPUT:
    One \"label\",\"version\",\"category\",\"eol_date\" line per input row.
    Missing values are printed as \"null\". Failed lookups are reported on
    stderr as ERROR: product,version,reason.

EXIT CODES:
    0  Every row was looked up
    1  At least one lookup failed
    2  Usage error (bad arguments, unreadable input, invalid config)

EXAMPLES:
    eol-lookup products.csv
    eol-lookup -r 1 fleet.csv | eol-report -o fleet.html")]
struct Cli {
    /// Input CSV of product,version rows [default: products.csv]
    file: Option<PathBuf>,

    /// Seconds to wait between products
    #[arg(short, long, value_name = "SECONDS")]
    rate_limit: Option<u64>,

    /// Lifecycle API root URL
    #[arg(long, env = "EOL_LOOKUP_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    let app = match cli::load_app_config(cli.config.as_deref(), |app| {
        if let Some(url) = &cli.api_url {
            app.api.base_url.clone_from(url);
        }
        if let Some(timeout) = cli.timeout {
            app.api.timeout_secs = timeout;
        }
        if let Some(delay) = cli.rate_limit {
            app.lookup.rate_limit_secs = delay;
        }
        if let Some(file) = &cli.file {
            app.lookup.input.clone_from(file);
        }
    }) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::USAGE);
        }
    };

    let config = LookupConfig::from_app(&app);
    let exit_code = match cli::run_lookup(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            cli::exit_code_for(&e)
        }
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
