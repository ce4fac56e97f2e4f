use axum::Json;

use crate::jwt::AuthUser;
use crate::models::profile::ProfileResponse;

/// Profile and raw claims of the caller
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "Identity",
    responses(
        (status = 200, description = "Current principal", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = []))
)]
pub async fn me(auth: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&auth.principal))
}
