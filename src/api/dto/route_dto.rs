//! Route introspection DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routing::RouteDescriptor;

/// Transport a route is served over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Plain HTTP.
    Http,
    /// WebSocket upgrade.
    WebSocket,
}

/// Public view of one mounted route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteInfo {
    /// Normalized full path.
    pub path: String,
    /// HTTP or WebSocket.
    pub kind: RouteKind,
    /// Registered method names; empty for WebSocket routes.
    pub methods: Vec<String>,
    /// Route name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the route is part of the OpenAPI document.
    pub include_in_schema: bool,
}

impl<S> From<&RouteDescriptor<S>> for RouteInfo {
    fn from(route: &RouteDescriptor<S>) -> Self {
        match route {
            RouteDescriptor::Http(http) => Self {
                path: http.path().to_string(),
                kind: RouteKind::Http,
                methods: http.methods().to_vec(),
                name: http.name().map(str::to_owned),
                include_in_schema: http.include_in_schema(),
            },
            RouteDescriptor::WebSocket(ws) => Self {
                path: ws.path().to_string(),
                kind: RouteKind::WebSocket,
                methods: Vec::new(),
                name: ws.name().map(str::to_owned),
                include_in_schema: false,
            },
        }
    }
}

/// Result of resolving a route name to a concrete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedRoute {
    /// Requested route name.
    pub name: String,
    /// Concrete path with captures substituted.
    pub path: String,
}
