/*
 * Responsibility
 * - GET /dashboard (トークン必須)
 * - 認証済みユーザーの概要を返す
 */
use axum::Json;

use crate::api::{dto::pages::DashboardResponse, extractors::CurrentIdentity};

pub async fn dashboard(CurrentIdentity(identity): CurrentIdentity) -> Json<DashboardResponse> {
    let healthcare_role = identity.healthcare_role();

    Json(DashboardResponse {
        subject: identity.subject,
        name: identity.name,
        email: identity.email,
        role: identity.role,
        healthcare_role,
        claims: identity.extra,
    })
}
