//! Report command handler.
//!
//! Renders lookup CSV into an HTML table.

use super::UsageError;
use crate::config::{ReportConfig, ReportSettings};
use crate::pipeline::exit_codes;
use crate::reports::{read_rows, HtmlReporter};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;

/// Run the report command, returning the process exit code.
///
/// The template is loaded before any input is read, so an unusable
/// template fails the run at startup.
pub fn run_report(config: &ReportConfig) -> Result<i32> {
    let reporter = build_reporter(&config.report)?;

    let rows = match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                UsageError(format!("cannot read input {}: {e}", path.display()))
            })?;
            read_rows(file)
        }
        None => read_rows(std::io::stdin().lock()),
    }
    .context("Failed to parse lookup CSV")?;
    tracing::debug!("Rendering {} rows", rows.len());

    let html = reporter.render(&rows)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(exit_codes::SUCCESS)
}

fn build_reporter(settings: &ReportSettings) -> Result<HtmlReporter> {
    match &settings.template {
        Some(path) => {
            let template = std::fs::read_to_string(path)
                .with_context(|| format!("Report template {} is unavailable", path.display()))?;
            let reporter = HtmlReporter::with_template(template, settings.marker.as_str())
                .with_context(|| format!("Report template {} is unusable", path.display()))?;
            Ok(reporter)
        }
        None => Ok(HtmlReporter::new(&settings.title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(tmp: &TempDir, template: Option<&str>) -> ReportConfig {
        let input = tmp.path().join("rows.csv");
        std::fs::write(
            &input,
            "\"Debian\",\"13 (Trixie)\",\"os\",\"2028-08-09\"\n\"A, \"\"B\"\"\",\"1\",\"null\",\"null\"\n",
        )
        .unwrap();

        let mut report = ReportSettings::default();
        if let Some(body) = template {
            let path = tmp.path().join("template.html");
            std::fs::write(&path, body).unwrap();
            report.template = Some(path);
        }

        ReportConfig {
            input: Some(input),
            output: Some(tmp.path().join("report.html")),
            report,
        }
    }

    #[test]
    fn test_report_with_custom_template() {
        let tmp = TempDir::new().unwrap();
        let config = config(&tmp, Some("<table>\n<!-- EOL_ROWS --></table>"));

        assert_eq!(run_report(&config).unwrap(), exit_codes::SUCCESS);
        let html = std::fs::read_to_string(tmp.path().join("report.html")).unwrap();
        assert!(html.contains("<td>13 (Trixie)</td>"));
        assert!(html.contains("<td>A, &quot;B&quot;</td>"));
        assert!(!html.contains("EOL_ROWS"));
    }

    #[test]
    fn test_report_with_default_template() {
        let tmp = TempDir::new().unwrap();
        let config = config(&tmp, None);

        run_report(&config).unwrap();
        let html = std::fs::read_to_string(tmp.path().join("report.html")).unwrap();
        assert!(html.contains("<title>End-of-Life Report</title>"));
        assert!(html.contains("<td>Debian</td>"));
    }

    #[test]
    fn test_template_without_marker_fails_before_output() {
        let tmp = TempDir::new().unwrap();
        let config = config(&tmp, Some("<table></table>"));

        let err = run_report(&config).unwrap_err();
        assert_eq!(super::super::exit_code_for(&err), exit_codes::DEPENDENCY_MISSING);
        assert!(!tmp.path().join("report.html").exists());
    }

    #[test]
    fn test_missing_template_is_dependency_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = config(&tmp, None);
        config.report.template = Some(tmp.path().join("missing.html"));

        let err = run_report(&config).unwrap_err();
        assert_eq!(super::super::exit_code_for(&err), exit_codes::DEPENDENCY_MISSING);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let tmp = TempDir::new().unwrap();
        let mut config = config(&tmp, None);
        config.input = Some(tmp.path().join("absent.csv"));

        let err = run_report(&config).unwrap_err();
        assert_eq!(super::super::exit_code_for(&err), exit_codes::USAGE);
    }
}
