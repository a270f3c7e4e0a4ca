// crates/gitignore/src/lib.rs
//! Gitignore rule compilation and priority matching.
//!
//! A [`Pattern`] is one rule line together with the directory it was declared
//! in. A [`Matcher`] holds patterns in ascending priority and answers whether
//! a path is excluded: the highest-priority pattern that applies wins.
//! Rule files are collected from any [`Dir`] implementation with
//! [`read_patterns`].
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]
#![warn(missing_docs)]

pub mod glob;
pub mod matcher;
pub mod pattern;
pub mod source;

pub use glob::Glob;
pub use matcher::Matcher;
pub use pattern::{MatchResult, Pattern, parse_lines};
pub use source::{DEFAULT_FILE_NAME, DEFAULT_SKIP_DIR, Dir, LoadOptions, MemDir, read_patterns};
