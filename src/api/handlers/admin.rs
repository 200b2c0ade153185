/*
 * Responsibility
 * - /admin 配下 (role == "admin" のみ到達する)
 * - handler 側でも role == "admin" を確認する (違えば 401)
 */
use axum::Json;

use crate::{
    api::{
        dto::pages::{AdminOverviewResponse, AdminUsersResponse},
        extractors::CurrentIdentity,
    },
    domain::{HealthcareRole, Identity},
    error::AppError,
};

fn require_admin(identity: &Identity) -> Result<(), AppError> {
    if identity.is_admin() {
        Ok(())
    } else {
        tracing::warn!(
            subject = %identity.subject,
            role = %identity.role,
            "non-admin reached admin handler"
        );
        Err(AppError::Unauthorized)
    }
}

pub async fn overview(
    CurrentIdentity(identity): CurrentIdentity,
) -> Result<Json<AdminOverviewResponse>, AppError> {
    require_admin(&identity)?;

    Ok(Json(AdminOverviewResponse {
        requested_by: identity.subject,
        sections: vec!["users"],
    }))
}

pub async fn users(
    CurrentIdentity(identity): CurrentIdentity,
) -> Result<Json<AdminUsersResponse>, AppError> {
    require_admin(&identity)?;

    Ok(Json(AdminUsersResponse {
        requested_by: identity.subject,
        assignable_roles: HealthcareRole::ALL.to_vec(),
    }))
}
