//! Line classification for a single hunk body.
//!
//! A hunk body is split into raw lines and each raw line is matched against an
//! ordered rule table ([`RawLine::parse`]). The running old/new line numbers
//! are threaded through the lines as an immutable [`LineCursor`], so
//! [`classify`] is a plain fold with no captured mutable state.

use crate::model::ClassifiedLine;

/// A raw hunk line, tagged by its leading marker.
///
/// Text slices borrow from the body with the marker already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLine<'a> {
    /// `@@ ... @@` header, kept verbatim.
    Header(&'a str),
    /// `+` line (but not a `+++` file header).
    Addition(&'a str),
    /// `-` line (but not a `---` file header).
    Deletion(&'a str),
    /// ` ` line, or an empty line standing for a blank context line.
    Context(&'a str),
    /// Anything else, e.g. `\ No newline at end of file`.
    Ignored,
}

impl<'a> RawLine<'a> {
    /// Classify one raw line. Rules are checked in order; the first match wins.
    pub fn parse(raw: &'a str) -> Self {
        if raw.starts_with("@@") {
            return RawLine::Header(raw);
        }
        if raw.starts_with("+++") || raw.starts_with("---") {
            return RawLine::Ignored;
        }
        if let Some(text) = raw.strip_prefix('+') {
            return RawLine::Addition(text);
        }
        if let Some(text) = raw.strip_prefix('-') {
            return RawLine::Deletion(text);
        }
        if raw.is_empty() {
            return RawLine::Context("");
        }
        if let Some(text) = raw.strip_prefix(' ') {
            return RawLine::Context(text);
        }
        RawLine::Ignored
    }
}

/// Running old/new line numbers while walking a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor {
    /// Next line number on the old side.
    pub old: u32,
    /// Next line number on the new side.
    pub new: u32,
}

impl LineCursor {
    /// Seed a cursor from a hunk's start offsets.
    pub fn new(old_start: u32, new_start: u32) -> Self {
        Self {
            old: old_start,
            new: new_start,
        }
    }

    /// Classify one raw line, returning the line (if it is kept) and the
    /// cursor for the next line.
    pub fn step(self, raw: &str) -> (Option<ClassifiedLine>, LineCursor) {
        match RawLine::parse(raw) {
            RawLine::Header(text) => (Some(ClassifiedLine::header(text)), self),
            RawLine::Addition(text) => (
                Some(ClassifiedLine::addition(text, self.new)),
                LineCursor {
                    new: self.new.saturating_add(1),
                    ..self
                },
            ),
            RawLine::Deletion(text) => (
                Some(ClassifiedLine::deletion(text, self.old)),
                LineCursor {
                    old: self.old.saturating_add(1),
                    ..self
                },
            ),
            RawLine::Context(text) => (
                Some(ClassifiedLine::context(text, self.old, self.new)),
                LineCursor {
                    old: self.old.saturating_add(1),
                    new: self.new.saturating_add(1),
                },
            ),
            RawLine::Ignored => {
                log::trace!("Dropping unaddressable diff line: {:?}", raw);
                (None, self)
            }
        }
    }
}

/// Classify a hunk body into typed, line-numbered lines.
///
/// Counters are seeded once from `old_start`/`new_start` and never reset, not
/// even by additional `@@` lines. The function is total: any input string
/// yields a (possibly empty) sequence.
///
/// # Example
/// ```
/// use gitlore_diff::{classify, LineKind};
///
/// let lines = classify("@@ -5,1 +5,0 @@\n-removed", 5, 5);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1].kind, LineKind::Deletion);
/// assert_eq!(lines[1].old_line_number, Some(5));
/// ```
pub fn classify(body: &str, old_start: u32, new_start: u32) -> Vec<ClassifiedLine> {
    let (lines, _) = body.lines().fold(
        (Vec::new(), LineCursor::new(old_start, new_start)),
        |(mut lines, cursor), raw| {
            let (line, next) = cursor.step(raw);
            lines.extend(line);
            (lines, next)
        },
    );
    lines
}
