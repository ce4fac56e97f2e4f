use axum::extract::Query;
use axum::Json;

use crate::authz::ScopeMode;
use crate::errors::AppResult;
use crate::jwt::AuthUser;
use crate::models::scope::{ScopeQuery, ScopeResponse};

/// Resolve the caller's scopes against an ad-hoc list of claim types
#[utoipa::path(
    get,
    path = "/api/scopes",
    tag = "Scopes",
    params(ScopeQuery),
    responses(
        (status = 200, description = "Resolved scope", body = ScopeResponse),
        (status = 400, description = "Unknown mode"),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = []))
)]
pub async fn resolve_scopes(auth: AuthUser, Query(query): Query<ScopeQuery>) -> AppResult<Json<ScopeResponse>> {
    let mode = match query.mode.as_deref() {
        Some(mode) => mode.parse::<ScopeMode>()?,
        None => ScopeMode::default(),
    };
    let required = query.required_claim_types();

    let scope = mode.resolve(&auth.principal, &required);

    tracing::info!(
        subject = %auth.principal.subject,
        mode = %mode,
        required = ?required,
        game_types = scope.game_types.len(),
        item_ids = scope.item_ids.len(),
        "resolved ad-hoc scope"
    );

    Ok(Json(ScopeResponse::new(mode, required, scope)))
}
