//! Index line parsing and rewriting.
//!
//! This module handles:
//! - Matching a formatted mutt index line against the expected shape
//! - Blanking redundant sender dates and alternate list names

pub mod pattern;
pub mod rewriter;

pub use pattern::{IndexPattern, ParsedFields, Variant};
pub use rewriter::{LineRewriter, Rewrite};
