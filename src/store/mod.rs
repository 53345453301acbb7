//! Requirement store module
//!
//! Holds the parsed requirement of every course, built once from
//! (course, requirement text) pairs and read-only afterwards.

mod loader;
mod requirement;


pub use loader::*;
pub use requirement::*;
