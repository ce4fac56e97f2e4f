use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::authz::AuthzMode;
use crate::errors::AppError;
use crate::jwt::JwtConfig;
use crate::routes::{checks, health, me, scopes};

#[derive(Clone)]
pub struct AppState {
    pub jwt: Arc<JwtConfig>,
    pub authz_mode: AuthzMode,
}

impl AppState {
    pub fn new(jwt: JwtConfig, authz_mode: AuthzMode) -> Self {
        Self {
            jwt: Arc::new(jwt),
            authz_mode,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(JwtConfig::from_env()?, AuthzMode::from_env()))
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/game-types", get(health::game_types))
        .route("/me", get(me::me))
        .route("/scopes", get(scopes::resolve_scopes))
        .route("/checks", get(checks::list_checks))
        .route("/checks/:check", get(checks::run_check));

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
