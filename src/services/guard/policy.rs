//! Route authorization decision.

use crate::domain::Identity;

use super::rules::RuleSet;

pub const SIGN_IN_PATH: &str = "/auth/signin";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PassThrough,
    RedirectToDashboard,
    RedirectToSignIn,
}

impl Outcome {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::PassThrough => None,
            Self::RedirectToDashboard => Some(DASHBOARD_PATH),
            Self::RedirectToSignIn => Some(SIGN_IN_PATH),
        }
    }
}

/// Decide what happens to a request for `path`.
///
/// Order matters:
/// 0. public (non auth-page) path → pass through
/// 1. protected path without a token → sign-in
/// 2. auth page with a token → dashboard
/// 3. admin-only path without an admin token → sign-in
/// 4. pass through
pub fn decide(rules: &RuleSet, path: &str, identity: Option<&Identity>) -> Outcome {
    let class = rules.classify(path);

    if class.public && !class.auth_page {
        return Outcome::PassThrough;
    }

    if class.protected && identity.is_none() {
        return Outcome::RedirectToSignIn;
    }

    if class.auth_page && identity.is_some() {
        return Outcome::RedirectToDashboard;
    }

    if class.admin_only && !identity.is_some_and(Identity::is_admin) {
        return Outcome::RedirectToSignIn;
    }

    Outcome::PassThrough
}
