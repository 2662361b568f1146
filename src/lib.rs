//! Parser and canonical formatter for X12 document paths.
//!
//! See [`path`] for the path syntax.

pub mod config;
pub mod path;
pub mod report;

pub use path::{parse, PathSyntaxError, PathValue};
