/*
 * Responsibility
 * - ルートガード: (path, token) から pass-through / redirect を決める純粋関数
 * - 除外フィルタに一致したパスはそもそも評価しない
 * - axum には依存しない (middleware::guard が HTTP との橋渡し)
 */
pub mod exclusion;
pub mod policy;
pub mod rules;

pub use exclusion::ExclusionFilter;
pub use policy::{Outcome, decide};
pub use rules::RuleSet;

use crate::domain::Identity;

/// Exclusion filter plus rule set. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    exclusion: ExclusionFilter,
    rules: RuleSet,
}

impl RouteGuard {
    pub fn new(exclusion: ExclusionFilter, rules: RuleSet) -> Self {
        Self { exclusion, rules }
    }

    /// Excluded paths must not be passed to [`RouteGuard::decide`].
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusion.excludes(path)
    }

    pub fn decide(&self, path: &str, identity: Option<&Identity>) -> Outcome {
        decide(&self.rules, path, identity)
    }
}
