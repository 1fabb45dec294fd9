//! HTML report renderer.
//!
//! Substitutes one `<tr>` per output row into a template at a marker
//! comment. A built-in template is used unless a custom one is supplied.

use super::escape::escape_html;
use super::row::OutputRow;
use crate::error::{EolError, Result};
use chrono::NaiveDate;
use std::fmt::Write;

/// Placeholder replaced by the table rows.
pub const DEFAULT_MARKER: &str = "<!-- EOL_ROWS -->";

/// Default report title.
pub const DEFAULT_TITLE: &str = "End-of-Life Report";

/// HTML report renderer
#[derive(Debug, Clone)]
pub struct HtmlReporter {
    template: String,
    marker: String,
}

impl HtmlReporter {
    /// Renderer over the built-in template.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            template: default_template(title),
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Renderer over a custom template.
    ///
    /// Fails when the template does not contain `marker`.
    pub fn with_template(template: String, marker: impl Into<String>) -> Result<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(EolError::report("template marker is empty"));
        }
        if !template.contains(&marker) {
            return Err(EolError::report(format!(
                "template has no `{marker}` placeholder"
            )));
        }
        Ok(Self { template, marker })
    }

    /// Render rows, judging past EOL dates against today (UTC).
    pub fn render(&self, rows: &[OutputRow]) -> Result<String> {
        self.render_at(rows, chrono::Utc::now().date_naive())
    }

    /// Render rows, judging past EOL dates against `today`.
    pub fn render_at(&self, rows: &[OutputRow], today: NaiveDate) -> Result<String> {
        let mut body = String::new();
        for row in rows {
            write_row(&mut body, row, today)?;
        }

        // with_template/new guarantee the marker is present
        let (head, tail) = self
            .template
            .split_once(&self.marker)
            .ok_or_else(|| EolError::report("template marker missing"))?;

        let mut html = String::with_capacity(self.template.len() + body.len());
        html.push_str(head);
        html.push_str(&body);
        html.push_str(tail);
        Ok(html)
    }
}

fn write_row(html: &mut String, row: &OutputRow, today: NaiveDate) -> std::fmt::Result {
    let class = if is_past_eol(&row.eol, today) {
        " class=\"eol-past\""
    } else {
        ""
    };
    writeln!(
        html,
        "<tr{class}><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&row.label),
        escape_html(&row.version),
        escape_html(&row.category),
        escape_html(&row.eol),
    )
}

/// Whether an EOL value denotes a reached end of life.
///
/// `"true"` means reached; a `YYYY-MM-DD` date is reached on or before
/// `today`. Anything else (`"false"`, `"null"`) is not.
#[must_use]
pub fn is_past_eol(eol: &str, today: NaiveDate) -> bool {
    if eol == "true" {
        return true;
    }
    NaiveDate::parse_from_str(eol, "%Y-%m-%d").is_ok_and(|date| date <= today)
}

fn default_template(title: &str) -> String {
    let title = escape_html(title);
    let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
    body {{
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        background-color: #1e1e2e;
        color: #cdd6f4;
        margin: 0;
        padding: 20px;
    }}
    h1 {{ color: #89b4fa; }}
    table {{
        width: 100%;
        border-collapse: collapse;
        background-color: #313244;
    }}
    th, td {{
        padding: 10px 14px;
        text-align: left;
        border-bottom: 1px solid #45475a;
    }}
    th {{ background-color: #45475a; }}
    tr.eol-past td {{ color: #f38ba8; }}
    .footer {{ margin-top: 30px; font-size: 0.9em; color: #a6adc8; }}
</style>
</head>
<body>
<h1>{title}</h1>
<table>
<thead><tr><th>Product</th><th>Version</th><th>Category</th><th>EOL</th></tr></thead>
<tbody>
{DEFAULT_MARKER}
</tbody>
</table>
<div class="footer">Generated {generated} from endoflife.date data</div>
</body>
</html>
"#
    )
}
