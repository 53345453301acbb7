//! Condition evaluator

use crate::condition::ast::{Condition, CreditRequirement};
use crate::course::CREDITS_PER_COURSE;
use ahash::AHashSet;

/// Set of courses a student has completed
#[derive(Debug, Clone, Default)]
pub struct CompletedCourses<'a> {
    courses: AHashSet<&'a str>,
}

impl<'a> CompletedCourses<'a> {
    pub fn new<I, S>(courses: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        Self {
            courses: courses.into_iter().map(<S as AsRef<str>>::as_ref).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, course: &str) -> bool {
        self.courses.contains(course)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.courses.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Condition {
    /// Evaluate this condition against a completed-course set
    pub fn satisfied(&self, completed: &CompletedCourses<'_>) -> bool {
        check(self, completed)
    }
}

/// Evaluate a condition tree against a completed-course set
pub fn check(condition: &Condition, completed: &CompletedCourses<'_>) -> bool {
    match condition {
        Condition::AtomicCourse(code) => completed.contains(code),
        Condition::CreditQuantity(req) => check_credits(req, completed),
        Condition::Conjunction(children) => children.iter().all(|c| check(c, completed)),
        Condition::Disjunction(children) => children.iter().any(|c| check(c, completed)),
        Condition::TrivialTrue => true,
    }
}

/// Credits earned towards `req` from the completed set
pub fn earned_credits(req: &CreditRequirement, completed: &CompletedCourses<'_>) -> u32 {
    let courses = req.courses();
    let counted = completed
        .iter()
        .filter(|course| {
            // No prefix counts every completed course
            (!courses.is_empty() && courses.iter().any(|c| c == *course))
                || req.prefix().is_none_or(|prefix| course.starts_with(prefix))
        })
        .count() as u32;
    counted * CREDITS_PER_COURSE
}

fn check_credits(req: &CreditRequirement, completed: &CompletedCourses<'_>) -> bool {
    earned_credits(req, completed) >= req.required()
}
