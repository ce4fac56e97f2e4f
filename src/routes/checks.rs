use axum::extract::{Path, State};
use axum::Json;

use crate::app::AppState;
use crate::authz::AccessCheck;
use crate::errors::{AppError, AppResult};
use crate::jwt::AuthUser;
use crate::models::scope::{CheckResponse, CheckSummary};

/// List the named authorization checks
#[utoipa::path(
    get,
    path = "/api/checks",
    tag = "Scopes",
    responses(
        (status = 200, description = "Named checks", body = Vec<CheckSummary>),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_checks(_auth: AuthUser) -> Json<Vec<CheckSummary>> {
    Json(AccessCheck::ALL.into_iter().map(CheckSummary::from).collect())
}

/// Resolve a named check for the caller, applying the enforcement mode
#[utoipa::path(
    get,
    path = "/api/checks/{check}",
    tag = "Scopes",
    params(
        ("check" = String, Path, description = "Check slug, e.g. server-admin"),
    ),
    responses(
        (status = 200, description = "Resolved check", body = CheckResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "No claim grants this check (strict mode)"),
        (status = 404, description = "Unknown check"),
    ),
    security(("bearerAuth" = []))
)]
pub async fn run_check(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(check): Path<String>,
) -> AppResult<Json<CheckResponse>> {
    let check = AccessCheck::from_slug(&check)
        .ok_or_else(|| AppError::not_found(format!("check '{check}' not found")))?;

    let scope = check.resolve(&auth.principal);
    let scope = state.authz_mode.enforce(&auth.principal, check, scope)?;

    Ok(Json(CheckResponse::new(check, scope)))
}
