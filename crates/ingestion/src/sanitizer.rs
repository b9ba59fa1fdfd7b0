//! Dialect sanitizer for MySQL dumps.
//!
//! Applies four text rewrites, in order:
//! 1. `--` line comments are dropped (the newline is kept)
//! 2. `/* ... */` block comments are dropped, non-greedy, across lines
//! 3. `SET ...;` statements are dropped, case-insensitive, when they start a
//!    statement (script start or after `;`)
//! 4. `AUTO_INCREMENT` becomes SQLite's `AUTOINCREMENT`
//!
//! Comment markers inside string literals are not recognised and will be
//! stripped like any other comment.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static LINE_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*").expect("valid regex"));

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

/// A run of `SET` statements that begins a statement: at the start of the
/// script or after a `;`, ignoring whitespace. The leading terminator is
/// captured so it survives. A `SET` on a continuation line of `UPDATE` is
/// not preceded by `;` and is left alone.
static SET_STATEMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\A|;)(?:\s*SET\b[^;\n]*;)+").expect("valid regex")
});

static AUTO_INCREMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bAUTO_INCREMENT\b").expect("valid regex"));

const SQLITE_AUTO_INCREMENT: &str = "AUTOINCREMENT";

/// Counts of what a sanitizer pass removed or rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    pub line_comments: usize,
    pub block_comments: usize,
    pub set_statements: usize,
    pub auto_increments: usize,
}

impl SanitizeReport {
    /// True when the pass left the input untouched.
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Sanitize a raw dump for SQLite. Never fails; malformed input passes
/// through with whatever rewrites applied.
pub fn sanitize(raw: &str) -> String {
    sanitize_with_report(raw).0
}

/// Sanitize a raw dump and report what was changed.
pub fn sanitize_with_report(raw: &str) -> (String, SanitizeReport) {
    let mut report = SanitizeReport::default();
    let text = strip_comments(raw, &mut report);

    report.set_statements = count_set_statements(&text);
    let text = SET_STATEMENT_REGEX.replace_all(&text, "$1");

    report.auto_increments = AUTO_INCREMENT_REGEX.find_iter(&text).count();
    let text = AUTO_INCREMENT_REGEX.replace_all(&text, SQLITE_AUTO_INCREMENT);

    debug!(
        line_comments = report.line_comments,
        block_comments = report.block_comments,
        set_statements = report.set_statements,
        auto_increments = report.auto_increments,
        "Sanitized script"
    );

    (text.into_owned(), report)
}

/// Remove comments until none are left. Dropping a block comment can join
/// the halves of a new marker, as in `-/**/-` or `//**/*`.
fn strip_comments(raw: &str, report: &mut SanitizeReport) -> String {
    let mut text = raw.to_string();
    loop {
        let line_comments = LINE_COMMENT_REGEX.find_iter(&text).count();
        if line_comments > 0 {
            text = LINE_COMMENT_REGEX.replace_all(&text, "").into_owned();
        }

        let block_comments = BLOCK_COMMENT_REGEX.find_iter(&text).count();
        if block_comments > 0 {
            text = BLOCK_COMMENT_REGEX.replace_all(&text, "").into_owned();
        }

        if line_comments == 0 && block_comments == 0 {
            return text;
        }
        report.line_comments += line_comments;
        report.block_comments += block_comments;
    }
}

/// One match of the SET regex may swallow several adjacent statements.
fn count_set_statements(text: &str) -> usize {
    SET_STATEMENT_REGEX
        .find_iter(text)
        .map(|m| m.as_str().matches(';').count() - usize::from(m.as_str().starts_with(';')))
        .sum()
}
