//! Authenticated identity carried by a request.
//!
//! The guard only ever looks at `role`. Everything else is passed through to
//! handlers untouched.

use serde_json::{Map, Value};

use super::clinical::HealthcareRole;

/// Role claim value that unlocks `/admin`.
pub const ADMIN_ROLE: &str = "admin";

/// Verified identity token.
///
/// Produced by a `TokenVerifier` once per request; the guard never creates or
/// mutates one.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub subject: String,
    pub role: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Claims this service does not interpret.
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
            name: None,
            email: None,
            extra: Map::new(),
        }
    }

    /// Exact, case-sensitive comparison against [`ADMIN_ROLE`].
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn healthcare_role(&self) -> HealthcareRole {
        HealthcareRole::from_claim(&self.role)
    }
}
