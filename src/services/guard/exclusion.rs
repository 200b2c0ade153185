//! Paths the guard never sees.

use super::rules::{PathMatcher, PatternError};

pub const DEFAULT_EXCLUDED_PATHS: &str = "/api*,/_next/static*,/_next/image*,/favicon.ico";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionFilter {
    matchers: Vec<PathMatcher>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(vec![
            PathMatcher::prefix("/api"),
            PathMatcher::prefix("/_next/static"),
            PathMatcher::prefix("/_next/image"),
            PathMatcher::exact("/favicon.ico"),
        ])
    }
}

impl ExclusionFilter {
    pub fn new(matchers: Vec<PathMatcher>) -> Self {
        Self { matchers }
    }

    /// Comma-separated patterns; see [`PathMatcher::parse`]. Blank entries are
    /// skipped, so an empty string excludes nothing.
    pub fn parse(patterns: &str) -> Result<Self, PatternError> {
        let matchers = patterns
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(PathMatcher::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(matchers))
    }

    pub fn excludes(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
