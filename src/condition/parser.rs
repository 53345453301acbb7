//! Requirement text parser

use crate::condition::ast::Condition;
use crate::condition::grouper::{group, Connective};
use crate::config::ParseOptions;
use crate::course::{is_bare_number, is_course_code, normalize_number};
use crate::error::ParseFailure;

/// Parse a requirement string into a condition tree, using default options
pub fn parse(text: &str) -> Result<Condition, ParseFailure> {
    parse_with(text, &ParseOptions::default())
}

/// Deepest bracket nesting accepted before a requirement is rejected
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse a requirement string into a condition tree
///
/// Segments that cannot be parsed are dropped from their group. Quantity
/// phrases such as "12 credits in COMP" and groups mixing "and" with "or"
/// at one level are reported as failures rather than guessed. Text nested
/// deeper than [`MAX_NESTING_DEPTH`] fails as a whole.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Condition, ParseFailure> {
    parse_nested(text, options, 0)
}

fn parse_nested(text: &str, options: &ParseOptions, depth: usize) -> Result<Condition, ParseFailure> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Condition::TrivialTrue);
    }

    if is_bare_number(text) {
        return normalize_number(text, &options.default_subject)
            .map(Condition::AtomicCourse)
            .ok_or_else(|| ParseFailure::InvalidCourseCode(text.to_string()));
    }

    if is_course_code(text) {
        return Ok(Condition::course(text));
    }

    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseFailure::TooDeep(text.to_string()));
    }

    let grouping = group(text);
    if grouping.is_indivisible() {
        return Err(ParseFailure::Indivisible(text.to_string()));
    }
    if grouping.connective == Connective::Mixed {
        return Err(ParseFailure::MixedConnectives(text.to_string()));
    }

    let mut children: Vec<Condition> = Vec::with_capacity(grouping.segments.len());
    for segment in &grouping.segments {
        match parse_nested(segment, options, depth + 1) {
            Ok(child) => children.push(child),
            // Too deep anywhere means too deep for the whole requirement
            Err(ParseFailure::TooDeep(_)) => {
                return Err(ParseFailure::TooDeep(text.to_string()))
            }
            Err(_) => {}
        }
    }

    if children.is_empty() {
        return Err(ParseFailure::NoParsableSegments(text.to_string()));
    }

    match grouping.connective {
        Connective::And => Ok(Condition::Conjunction(children)),
        Connective::Or => Ok(Condition::Disjunction(children)),
        Connective::Undetermined if children.len() == 1 => Ok(children.remove(0)),
        _ => Err(ParseFailure::MissingConnective(text.to_string())),
    }
}
