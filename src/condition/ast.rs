//! Condition tree for course requirements

use crate::course::CREDITS_PER_COURSE;
use crate::error::{Result, UnlockError};
use std::fmt;

/// Condition tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// A single course, like "COMP1511"
    AtomicCourse(String),
    /// A number of credits, optionally restricted to a prefix or course list
    CreditQuantity(CreditRequirement),
    /// All children must hold
    Conjunction(Vec<Condition>),
    /// At least one child must hold
    Disjunction(Vec<Condition>),
    /// Empty requirement
    TrivialTrue,
}

/// Credit quantity requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditRequirement {
    required: u32,
    prefix: Option<String>,
    courses: Vec<String>,
}

impl CreditRequirement {
    /// Build a credit requirement; `required` must be a multiple of 6
    pub fn new(required: u32, prefix: Option<String>, courses: Vec<String>) -> Result<Self> {
        if required % CREDITS_PER_COURSE != 0 {
            return Err(UnlockError::InvalidCredits(required));
        }
        Ok(Self {
            required,
            prefix,
            courses,
        })
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }
}

impl Condition {
    pub fn course(code: impl Into<String>) -> Self {
        Condition::AtomicCourse(code.into())
    }

    pub fn credits(required: u32, prefix: Option<String>, courses: Vec<String>) -> Result<Self> {
        CreditRequirement::new(required, prefix, courses).map(Condition::CreditQuantity)
    }

    /// Nesting depth; leaves have depth 1
    pub fn depth(&self) -> usize {
        match self {
            Condition::Conjunction(children) | Condition::Disjunction(children) => {
                1 + children.iter().map(Condition::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AtomicCourse(code) => f.write_str(code),
            Condition::CreditQuantity(req) => write!(
                f,
                "{} credits in {}/[{}]",
                req.required,
                req.prefix.as_deref().unwrap_or("*"),
                req.courses.join(", ")
            ),
            Condition::Conjunction(children) => write_joined(f, children, " & "),
            Condition::Disjunction(children) => write_joined(f, children, " | "),
            Condition::TrivialTrue => f.write_str("T"),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Condition], sep: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", child)?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_requirement_must_be_multiple_of_six() {
        assert!(CreditRequirement::new(12, None, vec![]).is_ok());
        assert!(CreditRequirement::new(0, None, vec![]).is_ok());
        assert!(matches!(
            CreditRequirement::new(10, None, vec![]),
            Err(UnlockError::InvalidCredits(10))
        ));
    }

    #[test]
    fn test_display() {
        let cond = Condition::Conjunction(vec![
            Condition::course("COMP1511"),
            Condition::Disjunction(vec![
                Condition::course("COMP1521"),
                Condition::course("COMP2521"),
            ]),
        ]);
        assert_eq!(cond.to_string(), "(COMP1511 & (COMP1521 | COMP2521))");
        assert_eq!(Condition::TrivialTrue.to_string(), "T");

        let credits = Condition::credits(12, Some("COMP".to_string()), vec![]).unwrap();
        assert_eq!(credits.to_string(), "12 credits in COMP/[]");
    }

    #[test]
    fn test_depth() {
        assert_eq!(Condition::TrivialTrue.depth(), 1);
        assert_eq!(Condition::Conjunction(vec![]).depth(), 1);
        let two_level = Condition::Disjunction(vec![
            Condition::course("COMP1511"),
            Condition::course("COMP1521"),
        ]);
        assert_eq!(two_level.depth(), 2);
        let nested = Condition::Conjunction(vec![
            Condition::course("COMP1511"),
            Condition::Disjunction(vec![Condition::course("COMP1521")]),
        ]);
        assert_eq!(nested.depth(), 3);
    }
}
