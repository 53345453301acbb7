//! Requirement parsing and evaluation module
//!
//! This module turns requirement text like "COMP1511 and (COMP1521 or COMP2521)"
//! into a condition tree and evaluates it against completed courses.

mod ast;
pub mod cache;
mod evaluator;
pub mod grouper;
pub mod parser;


pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use grouper::*;
pub use parser::*;
