//! Demo API layer: handlers, DTOs, OpenAPI, and router composition.
//!
//! Every endpoint is registered through an [`ApiRouter`] under the
//! configured prefix, then mounted in one step.

pub mod docs;
pub mod dto;
pub mod handlers;

use std::sync::Arc;

use axum::Router;

use crate::app_state::AppState;
use crate::error::MountError;
use crate::routing::ApiRouter;
use crate::ws;
use dto::RouteInfo;

/// Registers every demo endpoint under `prefix`.
#[must_use]
pub fn registrar(prefix: &str) -> ApiRouter<AppState> {
    let mut api = ApiRouter::new(prefix);
    handlers::system::register(&mut api);
    api.register_ws("/ws", ws::echo::echo_socket, Some("echo"));
    api.register_ws_with_state("/ws/routes", ws::routes::routes_socket, Some("routes_feed"));
    api
}

/// Builds the complete application router, state included.
///
/// # Errors
///
/// Returns [`MountError`] if the registered routes cannot be mounted.
pub fn build_router(prefix: &str, openapi_enabled: bool) -> Result<Router, MountError> {
    let api = registrar(prefix);
    let routes: Arc<[RouteInfo]> = api.list_routes().iter().map(RouteInfo::from).collect();

    let mut router = api.to_router()?;
    if openapi_enabled {
        router = router.merge(docs::docs_router(docs::openapi(api.openapi_paths())));
    }
    tracing::info!(prefix = %api.prefix(), routes = routes.len(), "routes mounted");

    Ok(router.with_state(AppState::new(routes)))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::api::dto::{HealthResponse, ResolvedRoute};

    async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = router.clone().oneshot(request).await;
        let status = response.status();
        let Ok(body) = to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body should be readable");
        };
        (status, body.to_vec())
    }

    fn app() -> Router {
        let Ok(router) = build_router("/api/v1/", true) else {
            panic!("demo routes should mount");
        };
        router
    }

    #[test]
    fn registrar_order_is_stable() {
        let api = registrar("api");
        let paths: Vec<&str> = api.list_routes().iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            [
                "/api/health",
                "/api/routes",
                "/api/routes/{name}",
                "/api/ping",
                "/api/ws",
                "/api/ws/routes"
            ]
        );
    }

    #[tokio::test]
    async fn health_is_served_under_prefix() {
        let router = app();
        let (status, body) = get(&router, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        let Ok(health) = serde_json::from_slice::<HealthResponse>(&body) else {
            panic!("health body should parse");
        };
        assert_eq!(health.status, "healthy");
        assert!(health.uptime_secs >= 0);
    }

    #[tokio::test]
    async fn routes_listing_matches_registration() {
        let router = app();
        let (status, body) = get(&router, "/api/v1/routes").await;
        assert_eq!(status, StatusCode::OK);
        let Ok(routes) = serde_json::from_slice::<Vec<RouteInfo>>(&body) else {
            panic!("routes body should parse");
        };
        assert_eq!(routes.len(), 6);
        assert!(routes.iter().any(|r| r.name.as_deref() == Some("echo")));
    }

    #[tokio::test]
    async fn resolve_route_fills_captures() {
        let router = app();
        let (status, body) = get(&router, "/api/v1/routes/resolve_route?name=health").await;
        assert_eq!(status, StatusCode::OK);
        let Ok(resolved) = serde_json::from_slice::<ResolvedRoute>(&body) else {
            panic!("resolved body should parse");
        };
        assert_eq!(resolved.path, "/api/v1/routes/health");
    }

    #[tokio::test]
    async fn resolve_unknown_route_is_not_found() {
        let router = app();
        let (status, _) = get(&router, "/api/v1/routes/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn hidden_route_is_served_but_not_documented() {
        let router = app();
        let (status, body) = get(&router, "/api/v1/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"pong");

        let (status, body) = get(&router, docs::OPENAPI_JSON_PATH).await;
        assert_eq!(status, StatusCode::OK);
        let Ok(doc) = serde_json::from_slice::<serde_json::Value>(&body) else {
            panic!("openapi body should parse");
        };
        let Some(paths) = doc.get("paths").and_then(|p| p.as_object()) else {
            panic!("openapi document should have paths");
        };
        assert!(paths.contains_key("/api/v1/health"));
        assert!(paths.contains_key("/api/v1/routes/{name}"));
        assert!(!paths.contains_key("/api/v1/ping"));
        assert!(!paths.contains_key("/api/v1/ws"));
    }

    #[test]
    fn unparsable_prefix_is_a_mount_error() {
        assert!(matches!(
            build_router("{tenant}.x", false),
            Err(MountError::InvalidPath { .. })
        ));
    }

    #[tokio::test]
    async fn openapi_can_be_disabled() {
        let Ok(router) = build_router("", false) else {
            panic!("demo routes should mount");
        };
        let (status, _) = get(&router, docs::OPENAPI_JSON_PATH).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = get(&router, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }
}
