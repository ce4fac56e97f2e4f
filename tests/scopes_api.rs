use anyhow::{Context, Result};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;
use uuid::Uuid;

use portal_authz::authz::{claim_types, AuthzMode, GameType};
use portal_authz::jwt::{JwtConfig, TokenIdentity};
use portal_authz::{create_app, AppState};

const SECRET: &str = "scopes-secret";

fn app() -> Router {
    create_app(AppState::new(JwtConfig::new(SECRET, 1), AuthzMode::Off))
}

fn token(identity: TokenIdentity) -> Result<String> {
    Ok(JwtConfig::new(SECRET, 1).encode(&identity)?)
}

async fn get_json(app: &Router, uri: &str, token: &str) -> Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())?;
    let resp: Response = app.clone().oneshot(req).await?;
    let status = resp.status();
    let body_bytes = body::to_bytes(resp.into_body(), 10_485_760).await?;
    let v: Value = serde_json::from_slice(&body_bytes).context("response was not JSON")?;
    Ok((status, v))
}

fn game_types(v: &Value) -> Result<Vec<GameType>> {
    Ok(serde_json::from_value(v.get("game_types").cloned().context("missing game_types")?)?)
}

fn item_ids(v: &Value) -> Result<Vec<Uuid>> {
    Ok(serde_json::from_value(v.get("item_ids").cloned().context("missing item_ids")?)?)
}

#[tokio::test]
async fn restricted_scope_is_exact() -> Result<()> {
    let app = app();
    let token = token(TokenIdentity::new("1").with_claim(claim_types::HEAD_ADMIN, "CallOfDuty2"))?;

    let (status, v) = get_json(&app, "/api/scopes?required=HeadAdmin", &token).await?;
    assert_eq!(status, StatusCode::OK, "body: {}", v);
    assert_eq!(v.get("mode").and_then(Value::as_str), Some("restricted"));
    assert_eq!(game_types(&v)?, vec![GameType::CallOfDuty2]);
    assert!(item_ids(&v)?.is_empty());

    Ok(())
}

#[tokio::test]
async fn viewing_scope_broadens_to_all_games() -> Result<()> {
    let app = app();
    let token = token(TokenIdentity::new("1").with_claim(claim_types::GAME_ADMIN, "CallOfDuty4"))?;

    let (status, v) = get_json(&app, "/api/scopes?required=GameAdmin&mode=viewing", &token).await?;
    assert_eq!(status, StatusCode::OK, "body: {}", v);
    assert_eq!(game_types(&v)?, GameType::all());
    assert!(item_ids(&v)?.is_empty());

    Ok(())
}

#[tokio::test]
async fn viewing_scope_keeps_server_ids() -> Result<()> {
    let app = app();
    let server_id = Uuid::new_v4();
    let token = token(TokenIdentity::new("1").with_claim(claim_types::BAN_FILE_MONITOR, server_id.to_string()))?;

    let (_, v) = get_json(&app, "/api/scopes?required=BanFileMonitor&mode=viewing", &token).await?;
    assert_eq!(game_types(&v)?.len(), GameType::ALL.len());
    assert_eq!(item_ids(&v)?, vec![server_id]);

    let (_, v) = get_json(&app, "/api/scopes?required=BanFileMonitor", &token).await?;
    assert!(game_types(&v)?.is_empty());
    assert_eq!(item_ids(&v)?, vec![server_id]);

    Ok(())
}

#[tokio::test]
async fn mismatched_claim_type_yields_nothing() -> Result<()> {
    let app = app();
    let token = token(TokenIdentity::new("1").with_claim(claim_types::MODERATOR, "CallOfDuty4"))?;

    for mode in ["restricted", "viewing"] {
        let uri = format!("/api/scopes?required=HeadAdmin&mode={}", mode);
        let (status, v) = get_json(&app, &uri, &token).await?;
        assert_eq!(status, StatusCode::OK);
        assert!(game_types(&v)?.is_empty(), "{} mode leaked game types: {}", mode, v);
        assert!(item_ids(&v)?.is_empty());
    }

    Ok(())
}

#[tokio::test]
async fn senior_admin_sees_everything_without_being_required() -> Result<()> {
    let app = app();
    let token = token(TokenIdentity::new("1").with_claim(claim_types::SENIOR_ADMIN, "true"))?;

    for uri in ["/api/scopes?required=Moderator", "/api/scopes", "/api/scopes?mode=viewing"] {
        let (status, v) = get_json(&app, uri, &token).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(game_types(&v)?, GameType::all(), "uri {}", uri);
        assert!(item_ids(&v)?.is_empty());
    }

    Ok(())
}

#[tokio::test]
async fn unknown_mode_is_bad_request() -> Result<()> {
    let app = app();
    let token = token(TokenIdentity::new("1"))?;

    let (status, v) = get_json(&app, "/api/scopes?required=HeadAdmin&mode=everything", &token).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v.get("error").and_then(Value::as_str), Some("bad_request"));

    Ok(())
}
