//! Line classifier for LOC counting.
//!
//! Each line is trimmed and checked against a fixed list of prefix rules, in
//! this order:
//!
//! 1. empty line: blank
//! 2. `//`: comment
//! 3. `#`: comment, except in `.cpp` files where it is a preprocessor
//!    directive and falls through
//! 4. `"""`: comment
//! 5. block comments, tracked with a two-state machine
//!
//! The checks are plain prefix and substring tests. There is no lexing, so
//! string literals that contain comment markers are misread, and nested block
//! comments are not supported.
//!
//! A line that closes a block comment (or opens and closes one) counts as
//! code only when the `*/` starts at least three characters before the end of
//! the trimmed line. That is a positional check, not a search for trailing
//! code: `*/ ` trimmed to `*/` never counts, but `*/ ;` does, and so does
//! `/* a */ b`.
//!
//! Any line that opens a block comment and also contains `*/` closes it
//! again, whether or not the line counts. `/* note */` is a comment line and
//! the next line is back in normal code.

use serde::{Deserialize, Serialize};

use crate::stats::LocStats;

/// Extension for which `#` lines are code rather than comments.
pub const PREPROCESSOR_EXTENSION: &str = ".cpp";

const LINE_COMMENT: &str = "//";
const HASH_COMMENT: char = '#';
const TRIPLE_QUOTE: &str = "\"\"\"";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// How a single physical line was classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Whitespace only
    Blank,
    /// Non-blank but not counted as code
    Comment,
    /// Counted as code
    Code,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
enum ScanState {
    #[default]
    Normal,
    InBlockComment,
}

/// Single-pass classifier for the lines of one file.
///
/// Feed lines in file order with [`Classifier::classify`]. The only state
/// carried between lines is whether a block comment is open.
#[derive(Debug, Clone)]
pub struct Classifier {
    hash_is_comment: bool,
    state: ScanState,
    line_no: usize,
}

impl Classifier {
    /// Create a classifier for a file with the given extension (dot
    /// included, e.g. `".js"`, or `""`).
    pub fn new(extension: &str) -> Self {
        Self {
            hash_is_comment: extension != PREPROCESSOR_EXTENSION,
            state: ScanState::Normal,
            line_no: 0,
        }
    }

    /// Whether a block comment opened on an earlier line is still open.
    pub fn is_in_block_comment(&self) -> bool {
        self.state == ScanState::InBlockComment
    }

    /// Classify the next line of the file.
    pub fn classify(&mut self, line: &str) -> LineKind {
        self.line_no += 1;
        let trimmed = trim(line);
        let kind = self.classify_trimmed(trimmed);
        log::trace!("{}: {:?}: {}", self.line_no, kind, trimmed);
        kind
    }

    fn classify_trimmed(&mut self, trimmed: &str) -> LineKind {
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        if trimmed.starts_with(LINE_COMMENT) {
            return LineKind::Comment;
        }
        if self.hash_is_comment && trimmed.starts_with(HASH_COMMENT) {
            return LineKind::Comment;
        }
        if trimmed.starts_with(TRIPLE_QUOTE) {
            return LineKind::Comment;
        }

        if self.state == ScanState::Normal && !trimmed.starts_with(BLOCK_OPEN) {
            return LineKind::Code;
        }

        // Opening a block comment or already inside one.
        if !trimmed.contains(BLOCK_CLOSE) {
            self.state = ScanState::InBlockComment;
            return LineKind::Comment;
        }
        self.state = ScanState::Normal;
        if closes_before_tail(trimmed) {
            LineKind::Code
        } else {
            LineKind::Comment
        }
    }
}

/// Strip leading and trailing whitespace, counting the ASCII information
/// separators (`\x1c`..=`\x1f`) as whitespace too.
fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// True when `trimmed` contains `*/` and its first occurrence starts at
/// index `len - 3` or earlier, i.e. at least one character follows it.
fn closes_before_tail(trimmed: &str) -> bool {
    // Byte and character positions agree here: the tail after the closer is
    // empty in both or in neither.
    trimmed
        .find(BLOCK_CLOSE)
        .is_some_and(|idx| idx + 3 <= trimmed.len())
}

/// Classify a whole file's lines and return the per-kind counts.
///
/// `file_count` of the result is 1.
pub fn classify_lines<I, S>(lines: I, extension: &str) -> LocStats
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = Classifier::new(extension);
    let mut stats = LocStats {
        file_count: 1,
        ..LocStats::default()
    };

    for line in lines {
        match classifier.classify(line.as_ref()) {
            LineKind::Blank => stats.blank += 1,
            LineKind::Comment => stats.comment += 1,
            LineKind::Code => stats.code += 1,
        }
    }

    stats
}

/// Number of lines in `lines` that count as code.
pub fn count_code_lines<I, S>(lines: I, extension: &str) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classify_lines(lines, extension).code
}
