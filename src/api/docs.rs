//! OpenAPI document assembly and serving.
//!
//! Component schemas come from the derive below; the paths come from the
//! registrar, so only routes registered with `include_in_schema` appear.

use axum::Router;
use utoipa::OpenApi;
use utoipa::openapi::Paths;

use crate::api::dto::{HealthResponse, ResolvedRoute, RouteInfo, RouteKind};
use crate::app_state::AppState;
use crate::error::{ErrorBody, ErrorResponse};

/// Path the OpenAPI JSON is served at.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Static part of the OpenAPI document.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "api-router",
        description = "Prefixed HTTP and WebSocket routes mounted on axum"
    ),
    components(schemas(
        HealthResponse,
        RouteInfo,
        RouteKind,
        ResolvedRoute,
        ErrorResponse,
        ErrorBody
    ))
)]
pub struct ApiDoc;

/// Full document: derived components plus the registrar's paths.
#[must_use]
pub fn openapi(paths: Paths) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.paths = paths;
    doc
}

/// Serves `doc` at [`OPENAPI_JSON_PATH`], with Swagger UI at `/swagger-ui`.
#[cfg(feature = "swagger-ui")]
pub fn docs_router(doc: utoipa::openapi::OpenApi) -> Router<AppState> {
    Router::new().merge(utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, doc))
}

/// Serves `doc` at [`OPENAPI_JSON_PATH`].
#[cfg(not(feature = "swagger-ui"))]
pub fn docs_router(doc: utoipa::openapi::OpenApi) -> Router<AppState> {
    Router::new().route(
        OPENAPI_JSON_PATH,
        axum::routing::get(move || {
            let doc = doc.clone();
            async move { axum::Json(doc) }
        }),
    )
}
