//! Conversion report types

use super::patterns::MarkerKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type of structural warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A hint or tabs block is still open at end of input, or reopened while open
    UnclosedBlock,
    /// A closing directive with no matching open block
    UnmatchedClose,
    /// A tab opened outside any tabs block
    OrphanTab,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::UnclosedBlock => write!(f, "unclosed_block"),
            WarningKind::UnmatchedClose => write!(f, "unmatched_close"),
            WarningKind::OrphanTab => write!(f, "orphan_tab"),
        }
    }
}

/// A warning raised while converting. Never changes the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionWarning {
    /// Line number (1-indexed)
    pub line: usize,
    pub kind: WarningKind,
    pub marker: MarkerKind,
    /// Human-readable message
    pub message: String,
}

impl std::fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Statistics about one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Total lines in input
    pub total_lines: usize,
    /// Marker lines rewritten or consumed
    pub converted_lines: usize,
    /// Lines block-quoted inside a hint
    pub quoted_lines: usize,
    /// Count of each marker kind recognized
    pub feature_counts: HashMap<MarkerKind, usize>,
}

impl ConversionStatistics {
    /// Record one recognized marker line
    pub fn increment_feature(&mut self, kind: MarkerKind) {
        self.converted_lines += 1;
        *self.feature_counts.entry(kind).or_insert(0) += 1;
    }

    pub fn feature_count(&self, kind: MarkerKind) -> usize {
        self.feature_counts.get(&kind).copied().unwrap_or(0)
    }
}

/// Report for a single file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Input file path
    pub input_file: String,
    /// Path the original content was copied to, if any
    pub backup_file: Option<String>,
    /// Timestamp of conversion
    pub timestamp: String,
    /// Duration in milliseconds
    pub duration_ms: u64,
    pub statistics: ConversionStatistics,
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionReport {
    /// Create a new empty report
    pub fn new(input: &str) -> Self {
        Self {
            input_file: input.to_string(),
            backup_file: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            statistics: ConversionStatistics::default(),
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: ConversionWarning) {
        log::warn!("{}: {}", self.input_file, warning);
        self.warnings.push(warning);
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Convert to human-readable text format
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("GitBook Conversion Report\n");
        output.push_str("=========================\n");
        output.push_str(&format!("Input:  {}\n", self.input_file));
        if let Some(backup) = &self.backup_file {
            output.push_str(&format!("Backup: {}\n", backup));
        }
        output.push_str(&format!("Date:   {}\n", self.timestamp));
        output.push_str(&format!("Time:   {}ms\n\n", self.duration_ms));

        output.push_str("Statistics\n");
        output.push_str("----------\n");
        output.push_str(&format!(
            "Total lines:     {}\n",
            self.statistics.total_lines
        ));
        output.push_str(&format!(
            "Marker lines:    {}\n",
            self.statistics.converted_lines
        ));
        output.push_str(&format!(
            "Quoted lines:    {}\n",
            self.statistics.quoted_lines
        ));
        output.push_str(&format!("Warnings:        {}\n\n", self.warnings.len()));

        if !self.statistics.feature_counts.is_empty() {
            output.push_str("Conversions\n");
            output.push_str("-----------\n");
            let mut features: Vec<_> = self.statistics.feature_counts.iter().collect();
            features.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));
            for (kind, count) in features {
                output.push_str(&format!("✓ {}: {}\n", kind, count));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("Warnings\n");
            output.push_str("--------\n");
            for warning in &self.warnings {
                output.push_str(&format!("⚠ {}\n", warning));
            }
        }

        output
    }
}

/// Summary of a whole tree walk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub root: String,
    pub dry_run: bool,
    /// Files selected by extension
    pub files_scanned: usize,
    /// Files that contained a trigger and were converted
    pub files_converted: usize,
    /// Files left untouched
    pub files_skipped: usize,
    pub total_warnings: usize,
    pub duration_ms: u64,
    pub files: Vec<ConversionReport>,
}

impl BatchReport {
    pub fn new(root: &str, dry_run: bool) -> Self {
        Self {
            root: root.to_string(),
            dry_run,
            files_scanned: 0,
            files_converted: 0,
            files_skipped: 0,
            total_warnings: 0,
            duration_ms: 0,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, report: ConversionReport) {
        self.files_converted += 1;
        self.total_warnings += report.warnings.len();
        self.files.push(report);
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("Batch Conversion Report\n");
        output.push_str("=======================\n");
        output.push_str(&format!("Root directory:   {}\n", self.root));
        output.push_str(&format!("Duration:         {}ms\n\n", self.duration_ms));

        output.push_str("Summary\n");
        output.push_str("-------\n");
        output.push_str(&format!("Files scanned:    {}\n", self.files_scanned));
        output.push_str(&format!("Converted:        {}\n", self.files_converted));
        output.push_str(&format!("Skipped:          {}\n", self.files_skipped));
        output.push_str(&format!("Total warnings:   {}\n\n", self.total_warnings));

        output.push_str("Files\n");
        output.push_str("-----\n");
        for file in &self.files {
            let status_icon = if file.warnings.is_empty() { "✓" } else { "⚠" };
            output.push_str(&format!(
                "{} {} ({} marker lines, {} warnings, {}ms)\n",
                status_icon,
                file.input_file,
                file.statistics.converted_lines,
                file.warnings.len(),
                file.duration_ms
            ));
        }

        if self.dry_run {
            output.push_str("\n(Dry run - no files were written)\n");
        }

        output
    }
}
