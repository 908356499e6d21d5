//! System endpoints: health check, route introspection, reverse lookup.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::api::dto::{HealthResponse, ResolvedRoute, RouteInfo};
use crate::app_state::AppState;
use crate::error::RouteError;
use crate::routing::{ApiRouter, RouteOptions, reverse};

/// `GET /health` — Service health status.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: (now - state.started_at).num_seconds(),
        }),
    )
}

/// `GET /routes` — Every mounted route in registration order.
pub async fn list_routes_handler(State(state): State<AppState>) -> Json<Vec<RouteInfo>> {
    Json(state.routes.to_vec())
}

/// `GET /routes/{name}` — Resolves a route name; query parameters fill
/// the captures.
///
/// # Errors
///
/// Returns [`RouteError::NoMatch`] (404) when the name is unknown or the
/// parameters do not match its captures.
pub async fn resolve_route_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ResolvedRoute>, RouteError> {
    let params: Vec<(&str, &str)> = params
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    let path = reverse::url_path_for(
        state
            .routes
            .iter()
            .map(|route| (route.name.as_deref(), route.path.as_str())),
        &name,
        &params,
    )?;
    Ok(Json(ResolvedRoute { name, path }))
}

/// `GET /ping` — Liveness probe kept out of the OpenAPI document.
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// Registers the system endpoints.
pub fn register(api: &mut ApiRouter<AppState>) {
    api.register_http("/health", ["GET"], health_handler, RouteOptions::named("health"));
    api.register_http("/routes", ["GET"], list_routes_handler, RouteOptions::named("list_routes"));
    api.register_http(
        "/routes/{name}",
        ["GET"],
        resolve_route_handler,
        RouteOptions::named("resolve_route"),
    );
    api.register_http("/ping", ["GET", "HEAD"], ping_handler, RouteOptions::named("ping").hidden());
}
