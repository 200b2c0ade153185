/*
 * Responsibility
 * - ページ系ハンドラのレスポンス DTO
 */
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::HealthcareRole;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub subject: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub healthcare_role: HealthcareRole,
    /// Claims the identity provider added beyond the ones above.
    pub claims: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct AdminOverviewResponse {
    pub requested_by: String,
    pub sections: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AdminUsersResponse {
    pub requested_by: String,
    pub assignable_roles: Vec<HealthcareRole>,
}

#[derive(Debug, Serialize)]
pub struct AuthPageResponse {
    pub page: &'static str,
}
