use axum::Json;

use crate::api::{dto::pages::HomeResponse, extractors::CurrentIdentity};

/// GET / (protected)
pub async fn home(CurrentIdentity(identity): CurrentIdentity) -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Bienvenido al sistema de laboratorio clínico",
        role: identity.role,
    })
}
