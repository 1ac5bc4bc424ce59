//! API section detection over README lines.
//!
//! A small state machine walks the document once:
//!
//! ```text
//!            start header                     killer header
//! Outside ─────────────────► InSection{root} ───────────────► Outside
//!    ▲                                                           │
//!    └─────────── (same line may start the next section) ◄───────┘
//! ```
//!
//! Headers are Markdown `#` lines (level = number of `#`) or pseudo-headers
//! (any line ending in `:`), which get [`PSEUDO_LEVEL`] so they can never end
//! a real section. A section opened by a pseudo-header gets
//! [`PSEUDO_ROOT_LEVEL`] as its root, so any real header with a weak signal
//! closes it.

/// Level assigned to pseudo-headers.
pub const PSEUDO_LEVEL: usize = 10_000;

/// Root level of a section opened by a pseudo-header.
pub const PSEUDO_ROOT_LEVEL: usize = 999;

/// Domain keywords counted by the signal heuristic.
pub const API_KEYWORDS: &[&str] = &[
    "api", "endpoint", "route", "request", "response", "http", "rest", "status", "error", "get",
    "post", "put", "delete", "patch",
];

/// Header texts that always open an API section.
pub const API_ROOT_HEADERS: &[&str] = &["api", "endpoints", "routes", "rest api", "http api"];

/// Header classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Not a header (level 0).
    Plain,
    /// Markdown `#` header with its level.
    Markdown(usize),
    /// A line ending in `:`.
    Pseudo,
}

impl HeaderKind {
    #[must_use]
    pub fn classify(line: &str) -> Self {
        let stripped = line.trim_start();
        if stripped.starts_with('#') {
            let level = stripped.len() - stripped.trim_start_matches('#').len();
            return Self::Markdown(level);
        }
        if line.trim().ends_with(':') {
            return Self::Pseudo;
        }
        Self::Plain
    }

    #[must_use]
    pub const fn level(self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Markdown(level) => level,
            Self::Pseudo => PSEUDO_LEVEL,
        }
    }
}

/// Number of API keywords occurring anywhere in the line (case-insensitive substring).
#[must_use]
pub fn api_signal(line: &str) -> usize {
    let lower = line.to_lowercase();
    API_KEYWORDS.iter().filter(|kw| lower.contains(*kw)).count()
}

/// Normalized header text: lower-cased, `#`/space and `:` stripped from both ends.
fn header_text(line: &str) -> String {
    line.to_lowercase()
        .trim_matches(|c| c == '#' || c == ' ')
        .trim_matches(':')
        .to_string()
}

fn is_api_header(text: &str, signal_threshold: usize) -> bool {
    API_ROOT_HEADERS.contains(&text)
        || text.contains("api")
        || api_signal(text) >= signal_threshold
}

/// One detected API section. Line numbers are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSection {
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
}

impl ApiSection {
    /// `lines {start}-{end}`, the evidence location of model-extracted items.
    #[must_use]
    pub fn location(&self) -> String {
        format!("lines {}-{}", self.start_line, self.end_line)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InSection { start_line: usize, root_level: usize },
}

/// Split a README into its API sections.
///
/// A header opens a section when its text is an API root phrase, mentions
/// `api`, or carries at least `signal_threshold` keywords. An open section is
/// closed by the first header whose level is at most the root level and whose
/// signal is below the threshold; that header is not part of the closed
/// section but may open the next one. A section still open at the end of the
/// document is flushed.
#[must_use]
pub fn find_api_sections(content: &str, signal_threshold: usize) -> Vec<ApiSection> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut sections = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut state = State::Outside;

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let kind = HeaderKind::classify(line);
        let level = kind.level();
        let signal = api_signal(line);

        if let State::InSection {
            start_line,
            root_level,
        } = state
        {
            if level > 0 && level <= root_level && signal < signal_threshold {
                sections.push(ApiSection {
                    start_line,
                    end_line: line_no - 1,
                    text: buffer.join("\n"),
                });
                buffer.clear();
                state = State::Outside;
            }
        }

        if state == State::Outside
            && level > 0
            && is_api_header(&header_text(line), signal_threshold)
        {
            let root_level = if kind == HeaderKind::Pseudo {
                PSEUDO_ROOT_LEVEL
            } else {
                level
            };
            state = State::InSection {
                start_line: line_no,
                root_level,
            };
        }

        if matches!(state, State::InSection { .. }) {
            buffer.push(line);
        }
    }

    if let State::InSection { start_line, .. } = state {
        if !buffer.is_empty() {
            sections.push(ApiSection {
                start_line,
                end_line: lines.len(),
                text: buffer.join("\n"),
            });
        }
    }

    sections
}
