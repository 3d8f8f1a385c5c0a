//! Rule tables: cue words, attribute patterns and the category taxonomy.
//!
//! The engine (`src/engine/**`) decides *how* rules are applied; this module
//! only says *what* is matched.

pub mod attributes;
pub mod language;
pub mod taxonomy;
