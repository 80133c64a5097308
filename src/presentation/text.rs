// src/presentation/text.rs
use std::fmt;

use chrono::{DateTime, Local};
use project_stats_domain::{FileStamp, RelativeAge, ScanResult};

use super::group_thousands;

/// Console report, kept line by line so that the printed and the exported
/// text are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    lines: Vec<String>,
}

impl TextReport {
    /// Renders `result`; file ages are measured against `now`.
    pub fn render(result: &ScanResult, now: &DateTime<Local>) -> Self {
        let mut lines = vec![
            String::new(),
            format!("Scanning: {}", result.root.display()),
            String::new(),
            format!("Total files: {}", group_thousands(result.total_files.value())),
            format!("Total lines of code: {}", group_thousands(result.total_lines.value())),
            String::new(),
            "Language breakdown:".to_string(),
        ];

        for lang in &result.languages {
            lines.push(format!(
                "  - {} ({}): {} lines ({} files)",
                lang.name,
                lang.ext,
                group_thousands(lang.lines.value()),
                lang.files
            ));
        }
        if result.languages.is_empty() {
            lines.push("  No code files found.".to_string());
        }

        if !result.is_empty() {
            lines.push(String::new());
            lines.push(format!("Top {} largest files:", result.largest_files.len()));
            for (i, file) in result.largest_files.iter().enumerate() {
                lines.push(format!("  {}. {} \u{2013} {} lines", i + 1, file.path, group_thousands(file.lines.value())));
            }
        }

        if result.has_anomalies() {
            lines.push(String::new());
            lines.push("File Anomalies:".to_string());
            lines.push(format!("  Empty files: {}", result.empty_files));
            lines.push(format!("  Very small files (<5 lines): {}", result.small_files));
        }

        if result.newest_file.is_some() || result.oldest_file.is_some() {
            lines.push(String::new());
            lines.push("Time Insights:".to_string());
            if let Some(newest) = &result.newest_file {
                lines.push(format!("  Newest file: {}", describe(newest, now)));
            }
            if let Some(oldest) = &result.oldest_file {
                lines.push(format!("  Oldest file: {}", describe(oldest, now)));
            }
        }

        lines.push(String::new());
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text written by `--export`: the lines joined by `\n`.
    pub fn to_export_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Console form: one `\n` after every line.
impl fmt::Display for TextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn describe(stamp: &FileStamp, now: &DateTime<Local>) -> String {
    format!("{} ({})", stamp.path, RelativeAge::between(stamp.modified.timestamp(), now))
}
