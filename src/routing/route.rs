//! Route descriptors accumulated by [`super::ApiRouter`].
//!
//! A [`RouteDescriptor`] is created once at registration time and never
//! modified. HTTP descriptors keep their method list exactly as the caller
//! passed it; turning it into an axum [`MethodFilter`] is deferred to
//! [`super::mount`], which is where invalid methods are reported.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{WebSocket, WebSocketUpgrade};
use axum::handler::Handler;
use axum::routing::{MethodFilter, MethodRouter, get, on};

/// Builds the axum endpoint for an HTTP handler once its methods are known.
type HttpEndpoint<S> = Arc<dyn Fn(MethodFilter) -> MethodRouter<S> + Send + Sync>;

/// Optional metadata for an HTTP route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOptions {
    /// Name used for reverse lookup and as the OpenAPI `operationId`.
    pub name: Option<String>,
    /// Whether the route appears in the exported OpenAPI paths.
    pub include_in_schema: bool,
}

impl RouteOptions {
    /// Options for a named route that is visible in the schema.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            include_in_schema: true,
        }
    }

    /// Hides the route from the exported schema.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.include_in_schema = false;
        self
    }
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            name: None,
            include_in_schema: true,
        }
    }
}

/// An HTTP endpoint bound to a normalized path.
pub struct HttpRoute<S = ()> {
    path: String,
    methods: Vec<String>,
    name: Option<String>,
    include_in_schema: bool,
    endpoint: HttpEndpoint<S>,
}

impl<S> HttpRoute<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new<H, T>(
        path: String,
        methods: Vec<String>,
        options: RouteOptions,
        handler: H,
    ) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self {
            path,
            methods,
            name: options.name,
            include_in_schema: options.include_in_schema,
            endpoint: Arc::new(move |filter| on(filter, handler.clone())),
        }
    }

    /// Builds a fresh axum endpoint answering `filter`.
    pub(crate) fn method_router(&self, filter: MethodFilter) -> MethodRouter<S> {
        (self.endpoint)(filter)
    }
}

impl<S> HttpRoute<S> {
    /// Normalized full path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Method names exactly as registered.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Optional route name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the route is exported in the OpenAPI paths.
    #[must_use]
    pub const fn include_in_schema(&self) -> bool {
        self.include_in_schema
    }
}

impl<S> Clone for HttpRoute<S> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            methods: self.methods.clone(),
            name: self.name.clone(),
            include_in_schema: self.include_in_schema,
            endpoint: Arc::clone(&self.endpoint),
        }
    }
}

impl<S> fmt::Debug for HttpRoute<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpRoute")
            .field("path", &self.path)
            .field("methods", &self.methods)
            .field("name", &self.name)
            .field("include_in_schema", &self.include_in_schema)
            .finish_non_exhaustive()
    }
}

/// A WebSocket endpoint bound to a normalized path.
///
/// Mounted as a `GET` route that performs the upgrade and hands the
/// socket to the registered handler.
pub struct WebSocketRoute<S = ()> {
    path: String,
    name: Option<String>,
    endpoint: MethodRouter<S>,
}

impl<S> WebSocketRoute<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new<F, Fut>(path: String, name: Option<String>, handler: F) -> Self
    where
        F: Fn(WebSocket) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let endpoint = get(move |upgrade: WebSocketUpgrade| {
            let handler = handler.clone();
            async move { upgrade.on_upgrade(handler) }
        });
        Self {
            path,
            name,
            endpoint,
        }
    }

    /// Like [`WebSocketRoute::new`], but the handler also receives the
    /// host router's state.
    pub(crate) fn with_state<F, Fut>(path: String, name: Option<String>, handler: F) -> Self
    where
        F: Fn(WebSocket, S) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let endpoint = get(move |State(state): State<S>, upgrade: WebSocketUpgrade| {
            let handler = handler.clone();
            async move { upgrade.on_upgrade(move |socket| handler(socket, state)) }
        });
        Self {
            path,
            name,
            endpoint,
        }
    }

    pub(crate) fn method_router(&self) -> MethodRouter<S> {
        self.endpoint.clone()
    }
}

impl<S> WebSocketRoute<S> {
    /// Normalized full path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Optional route name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<S> Clone for WebSocketRoute<S> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            name: self.name.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<S> fmt::Debug for WebSocketRoute<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebSocketRoute")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One registered endpoint, ready to be mounted.
pub enum RouteDescriptor<S = ()> {
    /// Plain HTTP route.
    Http(HttpRoute<S>),
    /// WebSocket route.
    WebSocket(WebSocketRoute<S>),
}

impl<S> RouteDescriptor<S> {
    /// Normalized full path.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Http(route) => route.path(),
            Self::WebSocket(route) => route.path(),
        }
    }

    /// Optional route name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Http(route) => route.name(),
            Self::WebSocket(route) => route.name(),
        }
    }

    /// Returns `true` for WebSocket routes.
    #[must_use]
    pub const fn is_websocket(&self) -> bool {
        matches!(self, Self::WebSocket(_))
    }
}

impl<S> fmt::Debug for RouteDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(route) => f.debug_tuple("Http").field(route).finish(),
            Self::WebSocket(route) => f.debug_tuple("WebSocket").field(route).finish(),
        }
    }
}

impl<S> Clone for RouteDescriptor<S> {
    fn clone(&self) -> Self {
        match self {
            Self::Http(route) => Self::Http(route.clone()),
            Self::WebSocket(route) => Self::WebSocket(route.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn ok() -> &'static str {
        "ok"
    }

    async fn ignore(_socket: WebSocket) {}

    #[test]
    fn default_options_are_visible_and_unnamed() {
        let options = RouteOptions::default();
        assert!(options.name.is_none());
        assert!(options.include_in_schema);
    }

    #[test]
    fn hidden_keeps_name() {
        let options = RouteOptions::named("ping").hidden();
        assert_eq!(options.name.as_deref(), Some("ping"));
        assert!(!options.include_in_schema);
    }

    #[test]
    fn http_route_keeps_methods_verbatim() {
        let route: HttpRoute = HttpRoute::new(
            "/a".to_string(),
            vec!["get".to_string(), "BREW".to_string()],
            RouteOptions::default(),
            ok,
        );
        assert_eq!(route.methods(), ["get", "BREW"]);
        assert_eq!(route.path(), "/a");
    }

    #[test]
    fn descriptor_accessors_cover_both_variants() {
        let http: RouteDescriptor = RouteDescriptor::Http(HttpRoute::new(
            "/a".to_string(),
            vec!["GET".to_string()],
            RouteOptions::named("a"),
            ok,
        ));
        let ws: RouteDescriptor =
            RouteDescriptor::WebSocket(WebSocketRoute::new("/ws".to_string(), None, ignore));

        assert_eq!(http.path(), "/a");
        assert_eq!(http.name(), Some("a"));
        assert!(!http.is_websocket());
        assert_eq!(ws.path(), "/ws");
        assert_eq!(ws.name(), None);
        assert!(ws.is_websocket());
    }

    #[test]
    fn debug_omits_handler() {
        let route: HttpRoute = HttpRoute::new(
            "/a".to_string(),
            vec!["GET".to_string()],
            RouteOptions::default(),
            ok,
        );
        let rendered = format!("{route:?}");
        assert!(rendered.contains("\"/a\""));
        assert!(rendered.contains(".."));
    }
}
