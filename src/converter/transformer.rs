//! GitBook to Docusaurus line transformer
//!
//! Walks the input once, top to bottom, keeping a small amount of block
//! state, and rewrites each recognized directive into its Docusaurus form.
//! Anything that is not a directive passes through untouched unless it sits
//! inside an open hint, in which case it is block-quoted.

use super::patterns::{self, MarkerKind};
use super::report::{ConversionReport, ConversionWarning, WarningKind};
use std::time::Instant;

/// Emitted in place of `{% tabs %}`
pub const TABS_PREAMBLE: &str =
    "import Tabs from '@theme/Tabs';\nimport TabItem from '@theme/TabItem';\n\n<Tabs>";
pub const TABS_CLOSE: &str = "</Tabs>";
pub const TAB_ITEM_CLOSE: &str = "</TabItem>";
pub const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed/";

/// Block state for one conversion. Built fresh for every file.
///
/// The tab flags never change what is emitted; they only feed the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformState {
    pub inside_hint: bool,
    /// Capitalized hint style, meaningful only while `inside_hint`
    pub hint_kind: String,
    pub inside_tabs: bool,
    pub inside_tab: bool,
}

/// Output of converting one document
#[derive(Debug)]
pub struct ConversionResult {
    /// Converted Docusaurus content
    pub content: String,
    pub report: ConversionReport,
}

/// Stateful, single-pass transformer over the lines of one document
pub struct LineTransformer<'r> {
    state: TransformState,
    output: Vec<String>,
    report: &'r mut ConversionReport,
    hint_opened_at: usize,
    tabs_opened_at: usize,
}

impl<'r> LineTransformer<'r> {
    pub fn new(report: &'r mut ConversionReport) -> Self {
        Self {
            state: TransformState::default(),
            output: Vec::new(),
            report,
            hint_opened_at: 0,
            tabs_opened_at: 0,
        }
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Feed one input line; `row` is 1-indexed and only used for warnings.
    pub fn push_line(&mut self, line: &str, row: usize) {
        self.report.statistics.total_lines += 1;
        let stripped = line.trim();

        if let Some(style) = patterns::hint_start(stripped) {
            if self.state.inside_hint {
                self.warn(
                    self.hint_opened_at,
                    WarningKind::UnclosedBlock,
                    MarkerKind::HintStart,
                    format!("hint is reopened at line {} before being closed", row),
                );
            }
            self.state.inside_hint = true;
            self.state.hint_kind = capitalize(style);
            self.hint_opened_at = row;
            self.output.push(format!("> 💡 **{}**", self.state.hint_kind));
            self.record(MarkerKind::HintStart, row);
            return;
        }
        if patterns::is_hint_end(stripped) {
            if !self.state.inside_hint {
                self.warn(
                    row,
                    WarningKind::UnmatchedClose,
                    MarkerKind::HintEnd,
                    "endhint without an open hint".to_string(),
                );
            }
            self.state.inside_hint = false;
            self.state.hint_kind.clear();
            self.record(MarkerKind::HintEnd, row);
            return;
        }
        if self.state.inside_hint {
            self.output.push(format!("> {}", line));
            self.report.statistics.quoted_lines += 1;
            return;
        }

        if patterns::is_tabs_start(stripped) {
            if self.state.inside_tabs {
                self.warn(
                    self.tabs_opened_at,
                    WarningKind::UnclosedBlock,
                    MarkerKind::TabsStart,
                    format!("tabs are reopened at line {} before being closed", row),
                );
            }
            self.state.inside_tabs = true;
            self.tabs_opened_at = row;
            self.output.push(TABS_PREAMBLE.to_string());
            self.record(MarkerKind::TabsStart, row);
        } else if patterns::is_tabs_end(stripped) {
            if !self.state.inside_tabs {
                self.warn(
                    row,
                    WarningKind::UnmatchedClose,
                    MarkerKind::TabsEnd,
                    "endtabs without an open tabs block".to_string(),
                );
            }
            self.state.inside_tabs = false;
            self.output.push(TABS_CLOSE.to_string());
            self.record(MarkerKind::TabsEnd, row);
        } else if let Some(title) = patterns::tab_start(stripped) {
            if !self.state.inside_tabs {
                self.warn(
                    row,
                    WarningKind::OrphanTab,
                    MarkerKind::TabStart,
                    format!("tab \"{}\" is outside a tabs block", title),
                );
            }
            self.state.inside_tab = true;
            self.output.push(format!(
                r#"<TabItem value="{}" label="{}">"#,
                title.to_lowercase(),
                title
            ));
            self.record(MarkerKind::TabStart, row);
        } else if patterns::is_tab_end(stripped) {
            if !self.state.inside_tab {
                self.warn(
                    row,
                    WarningKind::UnmatchedClose,
                    MarkerKind::TabEnd,
                    "endtab without an open tab".to_string(),
                );
            }
            self.state.inside_tab = false;
            self.output.push(TAB_ITEM_CLOSE.to_string());
            self.record(MarkerKind::TabEnd, row);
        } else if let Some(video_id) = patterns::video_embed(stripped) {
            self.output.push(youtube_iframe(video_id));
            self.record(MarkerKind::VideoEmbed, row);
        } else {
            self.output.push(line.to_string());
        }
    }

    /// Report blocks left open and join the output lines.
    pub fn finish(self) -> String {
        if self.state.inside_hint {
            self.report.add_warning(ConversionWarning {
                line: self.hint_opened_at,
                kind: WarningKind::UnclosedBlock,
                marker: MarkerKind::HintStart,
                message: "hint is never closed; the rest of the file is quoted".to_string(),
            });
        }
        if self.state.inside_tabs {
            self.report.add_warning(ConversionWarning {
                line: self.tabs_opened_at,
                kind: WarningKind::UnclosedBlock,
                marker: MarkerKind::TabsStart,
                message: "tabs block is never closed".to_string(),
            });
        }
        self.output.join("\n")
    }

    fn record(&mut self, kind: MarkerKind, row: usize) {
        log::debug!("line {}: {}", row, kind);
        self.report.statistics.increment_feature(kind);
    }

    fn warn(&mut self, line: usize, kind: WarningKind, marker: MarkerKind, message: String) {
        self.report.add_warning(ConversionWarning {
            line,
            kind,
            marker,
            message,
        });
    }
}

/// Convert `content`, filling in a report named after `input_name`.
pub fn transform(content: &str, input_name: &str) -> ConversionResult {
    let start_time = Instant::now();
    let mut report = ConversionReport::new(input_name);

    let mut transformer = LineTransformer::new(&mut report);
    for (index, line) in content.lines().enumerate() {
        transformer.push_line(line, index + 1);
    }
    let content = transformer.finish();

    report.duration_ms = start_time.elapsed().as_millis() as u64;
    ConversionResult { content, report }
}

/// Convert GitBook directives in `content` to Docusaurus syntax.
pub fn convert_gitbook_to_docusaurus(content: &str) -> String {
    transform(content, "<memory>").content
}

pub fn youtube_iframe(video_id: &str) -> String {
    format!(
        r#"<iframe width="100%" height="400" src="{}{}" frameborder="0" allowfullscreen></iframe>"#,
        YOUTUBE_EMBED_URL, video_id
    )
}

/// Upper-case the first character and lower-case the rest.
///
/// Uses the upper-case mapping for the first character, not the titlecase
/// one, so digraphs such as `ǆ` become `Ǆ` rather than `ǅ`.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
