//! Course code shape checks and normalization

use once_cell::sync::Lazy;
use regex::Regex;

/// Credits earned for every completed course
pub const CREDITS_PER_COURSE: u32 = 6;

/// Subject prepended to bare course numbers like "1511"
pub const DEFAULT_SUBJECT: &str = "COMP";

/// Whole-string course code: 4 letters then 4 digits
static COURSE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{4}[0-9]{4}$").expect("valid course code pattern"));

/// Length in bytes of every course code
const COURSE_CODE_LEN: usize = 8;

/// Check whether `text` is exactly one course code
#[inline]
pub fn is_course_code(text: &str) -> bool {
    COURSE_CODE.is_match(text)
}

/// Byte offset where a course code ending `text` starts, if there is one
///
/// Only the last 8 bytes are examined.
#[inline]
pub fn trailing_course_code(text: &str) -> Option<usize> {
    let start = text.len().checked_sub(COURSE_CODE_LEN)?;
    // Codes are ASCII, so a tail cut inside a multi-byte char cannot be one
    if !text.is_char_boundary(start) {
        return None;
    }
    is_course_code(&text[start..]).then_some(start)
}

/// Check whether `text` is a bare course number (digits only)
#[inline]
pub fn is_bare_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Prefix a bare number with `subject`, keeping the result only if it is a
/// well-formed course code
pub fn normalize_number(number: &str, subject: &str) -> Option<String> {
    let code = format!("{}{}", subject, number);
    is_course_code(&code).then_some(code)
}
