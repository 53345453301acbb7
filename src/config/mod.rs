//! Configuration module for parsing options and requirement data
//!
//! This module handles deserialization of requirement files and the options
//! that control how requirement text is parsed.

mod requirements;

pub use requirements::*;

use crate::course::DEFAULT_SUBJECT;
use serde::Deserialize;

/// Options that control requirement parsing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Subject code prepended to bare course numbers
    pub default_subject: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl ParseOptions {
    /// Options with a different default subject
    pub fn with_default_subject(subject: impl Into<String>) -> Self {
        Self {
            default_subject: subject.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_subject() {
        assert_eq!(ParseOptions::default().default_subject, "COMP");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParseOptions::default());

        let options: ParseOptions =
            serde_json::from_str(r#"{"default_subject": "MATH"}"#).unwrap();
        assert_eq!(options, ParseOptions::with_default_subject("MATH"));
    }
}
