//! OpenAPI export of registered HTTP routes.

use utoipa::openapi::Paths;
use utoipa::openapi::path::{HttpMethod, OperationBuilder};

use super::route::RouteDescriptor;

/// Builds OpenAPI paths for every HTTP route with `include_in_schema` set.
///
/// The route name becomes the `operationId`. WebSocket routes are never
/// exported; methods OpenAPI has no slot for are skipped.
#[must_use]
pub fn openapi_paths<S>(routes: &[RouteDescriptor<S>]) -> Paths {
    let mut paths = Paths::new();
    for route in routes {
        let RouteDescriptor::Http(http) = route else {
            continue;
        };
        if !http.include_in_schema() {
            continue;
        }

        let mut seen: Vec<String> = Vec::with_capacity(http.methods().len());
        let mut methods = Vec::with_capacity(http.methods().len());
        for raw in http.methods() {
            let upper = raw.to_ascii_uppercase();
            if seen.contains(&upper) {
                continue;
            }
            match http_method(&upper) {
                Some(method) => methods.push(method),
                None => {
                    tracing::warn!(path = http.path(), method = %raw, "method not representable in OpenAPI");
                }
            }
            seen.push(upper);
        }
        if methods.is_empty() {
            continue;
        }

        let operation = OperationBuilder::new().operation_id(http.name()).build();
        paths.add_path_operation(http.path(), methods, operation);
    }
    paths
}

fn http_method(upper: &str) -> Option<HttpMethod> {
    match upper {
        "GET" => Some(HttpMethod::Get),
        "POST" => Some(HttpMethod::Post),
        "PUT" => Some(HttpMethod::Put),
        "DELETE" => Some(HttpMethod::Delete),
        "OPTIONS" => Some(HttpMethod::Options),
        "HEAD" => Some(HttpMethod::Head),
        "PATCH" => Some(HttpMethod::Patch),
        "TRACE" => Some(HttpMethod::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::ws::WebSocket;

    use super::*;
    use crate::routing::{ApiRouter, RouteOptions};

    async fn ok() -> &'static str {
        "ok"
    }

    async fn ignore(_socket: WebSocket) {}

    #[test]
    fn visible_routes_are_exported_with_operation_id() {
        let mut api: ApiRouter = ApiRouter::new("api");
        api.register_http("/users", ["get", "POST"], ok, RouteOptions::named("users"));

        let paths = openapi_paths(api.list_routes());
        let get = paths.get_path_operation("/api/users", HttpMethod::Get);
        let post = paths.get_path_operation("/api/users", HttpMethod::Post);
        assert_eq!(get.and_then(|op| op.operation_id.as_deref()), Some("users"));
        assert!(post.is_some());
        assert!(paths.get_path_operation("/api/users", HttpMethod::Put).is_none());
    }

    #[test]
    fn hidden_and_websocket_routes_are_omitted() {
        let mut api: ApiRouter = ApiRouter::new("");
        api.register_http("/internal", ["GET"], ok, RouteOptions::named("internal").hidden());
        api.register_ws("/ws", ignore, Some("ws"));

        let paths = openapi_paths(api.list_routes());
        assert!(paths.paths.is_empty());
    }

    #[test]
    fn unrepresentable_methods_are_skipped() {
        let mut api: ApiRouter = ApiRouter::new("");
        api.register_http("/tunnel", ["CONNECT"], ok, RouteOptions::default());
        api.register_http("/mixed", ["CONNECT", "GET"], ok, RouteOptions::default());

        let paths = openapi_paths(api.list_routes());
        assert!(!paths.paths.contains_key("/tunnel"));
        assert!(paths.get_path_operation("/mixed", HttpMethod::Get).is_some());
    }

    #[test]
    fn routes_sharing_a_path_merge_into_one_item() {
        let mut api: ApiRouter = ApiRouter::new("");
        api.register_http("/items", ["GET"], ok, RouteOptions::named("list_items"));
        api.register_http("/items", ["POST"], ok, RouteOptions::named("create_item"));

        let paths = openapi_paths(api.list_routes());
        assert_eq!(paths.paths.len(), 1);
        let post = paths.get_path_operation("/items", HttpMethod::Post);
        assert_eq!(post.and_then(|op| op.operation_id.as_deref()), Some("create_item"));
    }
}
