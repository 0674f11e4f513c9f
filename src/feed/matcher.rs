//! AI headline filter and rewrite.
//!
//! Matching is case-sensitive and word-bounded: "AI", "A.I", "Artificial Intelligence"
//! or "artificial intelligence". Every match in the chosen headline is replaced with
//! the literal string "Al". Word boundaries are ASCII-only, so an accented letter
//! next to "AI" does not block the match.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

pub const AI_PATTERN: &str = r"(?-u:\b)(AI|A\.I|Artificial Intelligence|artificial intelligence)(?-u:\b)";
pub const REPLACEMENT: &str = "Al";

#[derive(Debug, Clone)]
pub struct HeadlineMatcher {
    pattern: Regex,
}

impl HeadlineMatcher {
    pub fn new() -> Result<Self> {
        Self::with_pattern(AI_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid headline pattern: {}", pattern))?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }

    /// Replace every match with [`REPLACEMENT`], taken literally (no `$` expansion).
    pub fn rewrite(&self, title: &str) -> String {
        self.pattern.replace_all(title, NoExpand(REPLACEMENT)).into_owned()
    }
}
