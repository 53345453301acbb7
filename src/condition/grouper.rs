//! Requirement text grouping
//!
//! Splits a requirement string into its top-level segments (course codes and
//! bracketed sub-expressions) and detects the connective joining them.

use crate::course::trailing_course_code;
use smallvec::SmallVec;

/// Logical connective joining the segments of one grouping level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    /// No "and"/"or" keyword seen
    Undetermined,
    And,
    Or,
    /// Both keywords seen at different junctions of the same level
    Mixed,
}

impl Connective {
    /// Classify connective text; "or" is checked before "and"
    pub fn classify(text: &str) -> Option<Connective> {
        let lower = text.to_lowercase();
        if lower.contains("or") {
            Some(Connective::Or)
        } else if lower.contains("and") {
            Some(Connective::And)
        } else {
            None
        }
    }

    /// Fold the keywords of `text` into the connective found so far
    fn observe(self, text: &str) -> Connective {
        match (self, Connective::classify(text)) {
            (current, None) => current,
            (Connective::Undetermined, Some(found)) => found,
            (Connective::Mixed, _) => Connective::Mixed,
            (current, Some(found)) if current == found => current,
            _ => Connective::Mixed,
        }
    }
}

/// Top-level segments of a requirement and their connective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<'a> {
    pub segments: SmallVec<[&'a str; 4]>,
    pub connective: Connective,
}

impl Grouping<'_> {
    /// True when grouping could not split the text
    #[inline]
    pub fn is_indivisible(&self) -> bool {
        self.segments.len() <= 1
    }
}

/// Split `text` into top-level segments
///
/// Outside brackets, a course code is cut off as soon as the buffer ends in
/// one and the text before it is read for connective keywords. A bracketed
/// region becomes one segment without its enclosing brackets.
pub fn group(text: &str) -> Grouping<'_> {
    let mut segments: SmallVec<[&str; 4]> = SmallVec::new();
    let mut connective = Connective::Undetermined;
    let mut depth = 0usize;
    // Start of the current buffer
    let mut start = 0usize;

    for (idx, ch) in text.char_indices() {
        let end = idx + ch.len_utf8();
        match ch {
            '(' if depth == 0 => {
                let pending = &text[start..idx];
                if !pending.trim().is_empty() {
                    segments.push(pending);
                    connective = connective.observe(pending);
                }
                depth = 1;
                start = end;
            }
            '(' => depth += 1,
            ')' if depth == 1 => {
                let inner = &text[start..idx];
                if !inner.trim().is_empty() {
                    segments.push(inner);
                }
                depth = 0;
                start = end;
            }
            ')' if depth > 1 => depth -= 1,
            _ if depth == 0 => {
                let buffer = &text[start..end];
                if let Some(offset) = trailing_course_code(buffer) {
                    connective = connective.observe(&buffer[..offset]);
                    segments.push(&buffer[offset..]);
                    start = end;
                }
            }
            _ => {}
        }
    }

    let rest = &text[start..];
    if !rest.trim().is_empty() {
        segments.push(rest);
        connective = connective.observe(rest);
    }

    Grouping {
        segments,
        connective,
    }
}
