//! Unlock queries against a loaded requirement store

use crate::condition::CompletedCourses;
use crate::error::Result;
use crate::store::RequirementStore;

/// Check whether `target` can be taken given the completed courses
///
/// # Errors
/// `UnknownCourse` if `target` is not in the store, and
/// `UnparseableRequirement` if its requirement text could not be parsed.
pub fn is_unlocked<S: AsRef<str>>(
    store: &RequirementStore,
    completed: &[S],
    target: &str,
) -> Result<bool> {
    let entry = store.requirement(target)?;
    let completed = CompletedCourses::new(completed);
    entry.is_met_by(&completed)
}

/// Courses in the store that are unlocked and not yet completed, sorted
///
/// Courses with unparseable requirements are skipped.
pub fn unlocked_courses<'s, S: AsRef<str>>(
    store: &'s RequirementStore,
    completed: &[S],
) -> Vec<&'s str> {
    let done = CompletedCourses::new(completed);
    let mut unlocked: Vec<&str> = store
        .courses()
        .filter(|course| !done.contains(course))
        .filter(|course| {
            store
                .get(course)
                .and_then(|entry| entry.requirement().condition())
                .is_some_and(|condition| condition.satisfied(&done))
        })
        .collect();
    unlocked.sort_unstable();
    unlocked
}
