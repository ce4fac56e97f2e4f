use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::authz::GameType;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Health check", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Every supported game type, in enumeration order
#[utoipa::path(
    get,
    path = "/api/game-types",
    tag = "Health",
    responses((status = 200, description = "Supported game types", body = Vec<GameType>))
)]
pub async fn game_types() -> Json<Vec<GameType>> {
    Json(GameType::all())
}
