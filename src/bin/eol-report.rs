//! eol-report: render eol-lookup output as an HTML table

use clap::Parser;
use eol_lookup::{cli, config::ReportConfig, pipeline::exit_codes};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eol-report")]
#[command(version)]
#[command(about = "Render eol-lookup CSV output as an HTML report", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Report written
    1  Template missing or without its placeholder, or rendering failed
    2  Usage error (bad arguments, unreadable input, invalid config)

EXAMPLES:
    eol-lookup products.csv | eol-report > report.html
    eol-report results.csv --template site.html -o report.html")]
struct Cli {
    /// CSV produced by eol-lookup [default: stdin]
    file: Option<PathBuf>,

    /// Write HTML to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// HTML template containing the row placeholder
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Placeholder in the template replaced by table rows
    #[arg(long, value_name = "TEXT")]
    marker: Option<String>,

    /// Title for the built-in template
    #[arg(long)]
    title: Option<String>,

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
        if let Some(template) = &cli.template {
            app.report.template = Some(template.clone());
        }
        if let Some(marker) = &cli.marker {
            app.report.marker.clone_from(marker);
        }
        if let Some(title) = &cli.title {
            app.report.title.clone_from(title);
        }
    }) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::USAGE);
        }
    };

    let config = ReportConfig {
        input: cli.file,
        output: cli.output,
        report: app.report,
    };
    let exit_code = match cli::run_report(&config) {
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
