//! Single-line recognizers for the GitBook directive vocabulary.
//!
//! Every matcher is handed an already trimmed line and is anchored at its
//! start. A line either opens, closes or embeds one marker, or it is not a
//! marker at all.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Substrings that mark a file as worth converting.
pub const TRIGGER_SUBSTRINGS: [&str; 3] = ["{% hint", "{% tabs", "{{< youtube"];

static HINT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\{%\s*hint\s+style="(.*?)"\s*%\}"#).unwrap());
static HINT_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{%\s*endhint\s*%\}").unwrap());
static TABS_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{%\s*tabs\s*%\}").unwrap());
static TABS_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{%\s*endtabs\s*%\}").unwrap());
static TAB_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\{%\s*tab\s+title="(.*?)"\s*%\}"#).unwrap());
static TAB_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{%\s*endtab\s*%\}").unwrap());
static YOUTUBE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{\{<\s*youtube\s+(.*?)\s*>\}\}").unwrap());

/// Kind of a recognized marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    HintStart,
    HintEnd,
    TabsStart,
    TabsEnd,
    TabStart,
    TabEnd,
    VideoEmbed,
}

impl MarkerKind {
    /// Every kind, in the order the transformer consults them
    pub const ALL: [MarkerKind; 7] = [
        MarkerKind::HintStart,
        MarkerKind::HintEnd,
        MarkerKind::TabsStart,
        MarkerKind::TabsEnd,
        MarkerKind::TabStart,
        MarkerKind::TabEnd,
        MarkerKind::VideoEmbed,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            MarkerKind::HintStart => &*HINT_START,
            MarkerKind::HintEnd => &*HINT_END,
            MarkerKind::TabsStart => &*TABS_START,
            MarkerKind::TabsEnd => &*TABS_END,
            MarkerKind::TabStart => &*TAB_START,
            MarkerKind::TabEnd => &*TAB_END,
            MarkerKind::VideoEmbed => &*YOUTUBE,
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerKind::HintStart => write!(f, "hint-start"),
            MarkerKind::HintEnd => write!(f, "hint-end"),
            MarkerKind::TabsStart => write!(f, "tabs-start"),
            MarkerKind::TabsEnd => write!(f, "tabs-end"),
            MarkerKind::TabStart => write!(f, "tab-start"),
            MarkerKind::TabEnd => write!(f, "tab-end"),
            MarkerKind::VideoEmbed => write!(f, "video-embed"),
        }
    }
}

/// A successful match, with the captured parameter if the kind has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch<'a> {
    pub kind: MarkerKind,
    pub param: Option<&'a str>,
}

/// Test `line` against a single marker kind.
pub fn match_marker(kind: MarkerKind, line: &str) -> Option<MarkerMatch<'_>> {
    let captures = kind.regex().captures(line)?;
    Some(MarkerMatch {
        kind,
        param: captures.get(1).map(|m| m.as_str()),
    })
}

pub fn hint_start(line: &str) -> Option<&str> {
    match_marker(MarkerKind::HintStart, line)?.param
}

pub fn is_hint_end(line: &str) -> bool {
    HINT_END.is_match(line)
}

pub fn is_tabs_start(line: &str) -> bool {
    TABS_START.is_match(line)
}

pub fn is_tabs_end(line: &str) -> bool {
    TABS_END.is_match(line)
}

pub fn tab_start(line: &str) -> Option<&str> {
    match_marker(MarkerKind::TabStart, line)?.param
}

pub fn is_tab_end(line: &str) -> bool {
    TAB_END.is_match(line)
}

/// Video identifier of a `{{< youtube ID >}}` embed, trimmed
pub fn video_embed(line: &str) -> Option<&str> {
    match_marker(MarkerKind::VideoEmbed, line)?
        .param
        .map(str::trim)
}

/// Cheap substring pre-filter; does not guarantee any line will match.
pub fn contains_trigger(content: &str) -> bool {
    TRIGGER_SUBSTRINGS
        .iter()
        .any(|trigger| content.contains(trigger))
}
