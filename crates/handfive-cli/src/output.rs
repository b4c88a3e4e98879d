//! Output formatting for the CLI.

use colored::*;
use handfive_maps::MapSummary;
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format the row counts of the dataset tables.
    pub fn row_counts(&self, counts: &[(&str, usize)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Table", "Rows"]);
        for (file, rows) in counts {
            builder.push_record([file.to_string(), rows.to_string()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::last()).with(Alignment::right()));
        table.to_string()
    }

    /// Format the maps written by a map run.
    pub fn map_summary(&self, summary: &MapSummary) -> String {
        if summary.maps.is_empty() {
            return self.warning("No coded parameters to map.");
        }

        let mut builder = Builder::default();
        builder.push_record(["Parameter", "Values", "Static", "Interactive"]);
        for map in &summary.maps {
            builder.push_record([
                map.parameter.clone(),
                map.total.to_string(),
                file_name(&map.svg),
                file_name(&map.html),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
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
            _ => text.to_string(),
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use handfive_maps::RenderedMap;
    use std::path::PathBuf;

    #[test]
    fn test_row_counts_table() {
        let formatter = Formatter::new(false);
        let output = formatter.row_counts(&[("languages.csv", 12), ("values.csv", 80)]);
        assert!(output.contains("Table"));
        assert!(output.contains("languages.csv"));
        assert!(output.contains("80"));
    }

    #[test]
    fn test_map_summary_table() {
        let formatter = Formatter::new(false);
        let summary = MapSummary {
            maps: vec![RenderedMap {
                parameter: "colex".to_string(),
                svg: PathBuf::from("maps/colex.svg"),
                html: PathBuf::from("maps/colex.html"),
                total: 7,
            }],
            index: PathBuf::from("maps/README.md"),
        };
        let output = formatter.map_summary(&summary);
        assert!(output.contains("colex.svg"));
        assert!(output.contains("colex.html"));
        assert!(!output.contains("maps/"));
    }

    #[test]
    fn test_empty_map_summary() {
        let formatter = Formatter::new(false);
        let summary = MapSummary {
            maps: vec![],
            index: PathBuf::from("maps/README.md"),
        };
        assert!(formatter.map_summary(&summary).contains("No coded parameters"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
