//! Renderer module
//!
//! Renders a WordReport to different output formats: html, text, json.
//! HTML is the primary format and follows a fixed document structure.

use crate::core::model::WordReport;
use std::io::Write;
use thiserror::Error;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

/// Error for an unrecognized format name
#[derive(Debug, Clone, Error)]
#[error("unknown format: {0} (expected html, text or json)")]
pub struct ParseFormatError(String);

impl std::str::FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for word reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &WordReport) -> String {
        match self.config.format {
            OutputFormat::Html => self.render_html(report),
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    /// Render to a writer; the document is written in full or the call fails
    pub fn render_to<W: Write>(&self, report: &WordReport, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())
    }

    /// Render as the fixed HTML document.
    ///
    /// Title and heading both use the `<Words Counted in {destination}>`
    /// template; the table carries a `Words | Counts` header row and one row
    /// per sorted key. All closing tags are emitted.
    fn render_html(&self, report: &WordReport) -> String {
        let title = report.title();
        let mut output = String::new();

        output.push_str("<html>\n");
        output.push_str("<head>\n");
        output.push_str(&format!("<title>{}</title>\n", title));
        output.push_str("</head>\n");
        output.push_str("<body>\n");
        output.push_str(&format!("<h2>{}</h2>\n", title));
        output.push_str("<hr />\n");
        output.push_str("<table border=\"1\">\n");
        output.push_str("<tr>\n");
        output.push_str("<th>Words</th>\n");
        output.push_str("<th>Counts</th>\n");
        output.push_str("</tr>\n");

        for row in &report.rows {
            output.push_str("<tr>\n");
            output.push_str(&format!("<td>{}</td>\n", row.word));
            output.push_str(&format!("<td>{}</td>\n", row.count));
            output.push_str("</tr>\n");
        }

        output.push_str("</table>\n");
        output.push_str("</body>\n");
        output.push_str("</html>\n");

        output
    }

    /// Render as a plain-text table
    fn render_text(&self, report: &WordReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("Words Counted in {}\n", report.destination));
        output.push_str("─────────────────────────────────────\n");
        output.push_str(&format!("{:<28} {:>8}\n", "Words", "Counts"));

        for row in &report.rows {
            output.push_str(&format!("{:<28} {:>8}\n", row.word, row.count));
        }

        output.push_str("─────────────────────────────────────\n");
        output.push_str(&format!(
            "{} distinct words\n",
            report.len()
        ));

        output
    }

    /// Render as a JSON array of rows
    fn render_json(&self, report: &WordReport) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&report.rows).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&report.rows).unwrap_or_else(|_| "[]".to_string())
        }
    }
}
