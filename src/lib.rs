//! Course Unlock Core - prerequisite parsing and unlock checks
//!
//! This crate turns free-form prerequisite text such as
//! "COMP1511 and (COMP1521 or COMP2521)" into condition trees and answers
//! whether a course is unlocked by a list of completed courses. Python
//! bindings are available with the `python` feature.
//!
//! ```
//! use course_unlock_core::RequirementStore;
//!
//! let store = RequirementStore::load([
//!     ("COMP1521", "COMP1511"),
//!     ("COMP2521", "COMP1511 and (COMP1521 or DPST1092)"),
//! ]);
//! assert!(store.is_unlocked(&["COMP1511", "DPST1092"], "COMP2521").unwrap());
//! assert!(!store.is_unlocked(&["COMP1511"], "COMP2521").unwrap());
//! ```

pub mod condition;
pub mod config;
pub mod course;
pub mod error;
pub mod query;
pub mod store;

#[cfg(feature = "python")]
mod python;

pub use condition::{parse, parse_with, CompletedCourses, Condition, CreditRequirement};
pub use config::ParseOptions;
pub use error::{ParseFailure, Result, UnlockError};
pub use query::{is_unlocked, unlocked_courses};
pub use store::{CourseRequirement, Requirement, RequirementStore};
