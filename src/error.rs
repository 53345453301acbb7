//! Error types for the course unlock core

use thiserror::Error;

/// Why a requirement text could not be turned into a condition tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// Grouping produced no split; quantity phrases end up here
    #[error("cannot split requirement further: {0:?}")]
    Indivisible(String),

    /// "and" and "or" join segments at the same level without brackets
    #[error("mixed and/or without brackets: {0:?}")]
    MixedConnectives(String),

    #[error("no connective joins the segments of: {0:?}")]
    MissingConnective(String),

    #[error("no segment could be parsed in: {0:?}")]
    NoParsableSegments(String),

    #[error("not a valid course code: {0:?}")]
    InvalidCourseCode(String),

    /// Brackets nest deeper than the parser accepts
    #[error("requirement nested too deeply: {0:?}")]
    TooDeep(String),
}

/// Main error type for the course unlock core
#[derive(Error, Debug)]
pub enum UnlockError {
    #[error("Unparseable requirement for {course}: {reason}")]
    UnparseableRequirement { course: String, reason: ParseFailure },

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Invalid credit requirement: {0} is not a multiple of 6")]
    InvalidCredits(u32),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for UnlockError {
    fn from(err: serde_json::Error) -> Self {
        UnlockError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<UnlockError> for pyo3::PyErr {
    fn from(err: UnlockError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyOSError, PyValueError};

        match err {
            UnlockError::UnknownCourse(code) => {
                PyKeyError::new_err(format!("Unknown course: {}", code))
            }
            UnlockError::Io(e) => PyOSError::new_err(format!("I/O error: {}", e)),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Result type alias for the course unlock core
pub type Result<T> = std::result::Result<T, UnlockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_message_names_course() {
        let err = UnlockError::UnparseableRequirement {
            course: "COMP3900".to_string(),
            reason: ParseFailure::Indivisible("102 units of credit".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("COMP3900"));
        assert!(msg.contains("102 units of credit"));
    }

    #[test]
    fn test_json_error_converts() {
        let err: UnlockError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, UnlockError::DeserializationError(_)));
    }
}
