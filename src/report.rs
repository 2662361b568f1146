//! Serializable reports of parsed paths, rendered as text, JSON or YAML.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::path::{Parser, PathSyntaxError, PathValue};

/// How reports are rendered.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per path
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// YAML sequence
    Yaml,
}

/// The outcome of parsing one path string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PathReport {
    pub fn new(input: &str, result: Result<PathValue, PathSyntaxError>) -> Self {
        match result {
            Ok(path) => Self {
                input: input.to_string(),
                canonical: Some(path.format()),
                empty: Some(path.is_empty()),
                path: Some(path),
                error: None,
            },
            Err(e) => Self {
                input: input.to_string(),
                canonical: None,
                empty: None,
                path: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Renders the report as a single line of text.
    pub fn to_line(&self) -> String {
        match (&self.path, &self.error) {
            (Some(path), _) => format!(
                "{} relative={} loops=[{}] segment={} qualifier={} element={} subelement={} empty={}",
                display_or_dash(&path.format()),
                path.is_relative(),
                path.loops().join(", "),
                path.segment_id().unwrap_or("-"),
                path.qualifier().unwrap_or("-"),
                option_or_dash(path.element_index()),
                option_or_dash(path.subelement_index()),
                path.is_empty(),
            ),
            (None, Some(error)) => format!("error: {}", error),
            (None, None) => String::new(),
        }
    }
}

fn display_or_dash(text: &str) -> &str {
    if text.is_empty() {
        "\"\""
    } else {
        text
    }
}

fn option_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Renders a batch of reports in the requested format.
pub fn render(reports: &[PathReport], format: OutputFormat) -> anyhow::Result<String> {
    let out = match format {
        OutputFormat::Text => reports
            .iter()
            .map(PathReport::to_line)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
    };
    Ok(out)
}

/// Outcome of checking a list of paths, one per line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckSummary {
    /// Number of non-blank lines parsed
    pub checked: usize,
    /// Failing lines as (1-based line number, report)
    pub failures: Vec<(usize, PathReport)>,
}

impl CheckSummary {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parses every non-blank line of `reader` and collects the failures.
pub fn check_reader<R: BufRead>(reader: R, parser: &Parser) -> std::io::Result<CheckSummary> {
    let mut summary = CheckSummary::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }
        summary.checked += 1;
        if let Err(e) = parser.parse(text) {
            debug!(line = idx + 1, error = %e, "path failed check");
            summary
                .failures
                .push((idx + 1, PathReport::new(text, Err(e))));
        }
    }
    Ok(summary)
}
