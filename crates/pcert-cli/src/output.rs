//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use pcert_extractor::ExtractionStats;
use pcert_report::Table;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format tables for the console.
    pub fn format_tables(&self, tables: &[Table]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_tables_json(tables),
            OutputFormat::Table => Ok(self.format_tables_pretty(tables)),
            OutputFormat::Quiet => Ok(self.format_tables_quiet(tables)),
        }
    }

    /// Format tables as JSON.
    fn format_tables_json(&self, tables: &[Table]) -> Result<String> {
        let json_tables: Vec<serde_json::Value> = tables
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "headers": t.headers,
                    "rows": t.rows,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_tables)?)
    }

    /// Format tables as rounded console tables, each under its name.
    fn format_tables_pretty(&self, tables: &[Table]) -> String {
        if tables.is_empty() {
            return self.colorize("No tables to show.", "yellow");
        }

        let sections: Vec<String> = tables
            .iter()
            .map(|t| {
                let title = self.colorize(&format!("{} ({} row(s))", t.name, t.len()), "cyan");
                if t.is_empty() {
                    return format!("{}\n{}", title, self.colorize("No rows.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(t.headers.iter().map(String::as_str));
                for row in &t.rows {
                    builder.push_record(row.iter().map(String::as_str));
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                format!("{}\n{}", title, table)
            })
            .collect();

        sections.join("\n\n")
    }

    /// Format tables in quiet mode (name and row count).
    fn format_tables_quiet(&self, tables: &[Table]) -> String {
        let lines: Vec<String> = tables
            .iter()
            .map(|t| format!("{}\t{}", t.name, t.len()))
            .collect();
        lines.join("\n")
    }

    /// Describe structural skips, if any.
    pub fn extraction_stats(&self, stats: &ExtractionStats) -> Option<String> {
        if !stats.has_skips() {
            return None;
        }
        Some(self.warning(&format!(
            "Skipped {} of {} certificate(s) without both blocks, {} project block(s) without a project number, {} malformed detail line(s)",
            stats.segments_skipped,
            stats.segments,
            stats.projects_without_id,
            stats.detail_lines_discarded
        )))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table() -> Table {
        let mut table = Table::new("Kim(통합)", &["과제번호", "참여기간"]);
        table.push_row(vec!["P001".to_string(), "2024-01-01 ~ 2024-01-20".to_string()]);
        table
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_tables(&[create_test_table()]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["name"], "Kim(통합)");
        assert_eq!(parsed[0]["rows"][0][1], "2024-01-01 ~ 2024-01-20");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_tables(&[create_test_table()]).unwrap();
        assert_eq!(output, "Kim(통합)\t1");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_tables(&[create_test_table()]).unwrap();
        assert!(output.contains("Kim(통합) (1 row(s))"));
        assert!(output.contains("참여기간"));
        assert!(output.contains("2024-01-01 ~ 2024-01-20"));
    }

    #[test]
    fn test_empty_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_tables(&[Table::new("과제정보", &["과제번호"])])
            .unwrap();
        assert!(output.contains("No rows."));
    }

    #[test]
    fn test_stats_only_reported_when_something_was_skipped() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert!(formatter.extraction_stats(&ExtractionStats::default()).is_none());

        let stats = ExtractionStats {
            segments: 3,
            segments_skipped: 1,
            ..ExtractionStats::default()
        };
        let message = formatter.extraction_stats(&stats).unwrap();
        assert!(message.contains("Skipped 1 of 3"));
    }

    #[test]
    fn test_info_message() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.info("Read 2 of 3 document(s)"), "ℹ Read 2 of 3 document(s)");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
