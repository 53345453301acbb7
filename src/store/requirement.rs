//! Stored requirement of a single course

use crate::condition::{CompletedCourses, Condition};
use crate::error::{ParseFailure, Result, UnlockError};

/// Parsed requirement, or the reason it could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Parsed(Condition),
    Unparseable(ParseFailure),
}

impl Requirement {
    pub fn from_outcome(outcome: std::result::Result<Condition, ParseFailure>) -> Self {
        match outcome {
            Ok(condition) => Requirement::Parsed(condition),
            Err(reason) => Requirement::Unparseable(reason),
        }
    }

    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Requirement::Parsed(condition) => Some(condition),
            Requirement::Unparseable(_) => None,
        }
    }

    #[inline]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Requirement::Parsed(_))
    }
}

/// Requirement entry kept for one course
#[derive(Debug, Clone)]
pub struct CourseRequirement {
    course: String,
    text: String,
    requirement: Requirement,
}

impl CourseRequirement {
    pub fn new(course: impl Into<String>, text: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            course: course.into(),
            text: text.into(),
            requirement,
        }
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    /// Requirement text as loaded
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Evaluate against completed courses; unparseable requirements are an error
    pub fn is_met_by(&self, completed: &CompletedCourses<'_>) -> Result<bool> {
        match &self.requirement {
            Requirement::Parsed(condition) => Ok(condition.satisfied(completed)),
            Requirement::Unparseable(reason) => Err(UnlockError::UnparseableRequirement {
                course: self.course.clone(),
                reason: reason.clone(),
            }),
        }
    }
}
