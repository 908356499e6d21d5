//! The prefixed route registrar.
//!
//! [`ApiRouter`] collects HTTP and WebSocket endpoints for one logical
//! sub-application under a shared [`Prefix`]. It is used during startup
//! only: routes are appended, never removed or reordered, and handed to
//! the host [`axum::Router`] via [`ApiRouter::to_router`] or
//! [`super::mount`].

use std::fmt;
use std::future::Future;

use axum::Router;
use axum::extract::ws::WebSocket;
use axum::handler::Handler;
use utoipa::openapi::Paths;

use super::path::{Prefix, normalize_path};
use super::route::{HttpRoute, RouteDescriptor, RouteOptions, WebSocketRoute};
use super::{mount, openapi_paths, reverse};
use crate::error::{MountError, RouteError};

/// Ordered collection of route descriptors sharing a path prefix.
///
/// `S` is the state type of the host router the routes end up in.
pub struct ApiRouter<S = ()> {
    prefix: Prefix,
    routes: Vec<RouteDescriptor<S>>,
}

impl<S> ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty registrar. `prefix` is canonicalized immediately.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Prefix::new(prefix),
            routes: Vec::new(),
        }
    }

    /// Returns the canonical prefix.
    #[must_use]
    pub const fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// Joins the prefix and `path` into the full route path.
    #[must_use]
    pub fn normalize_path(&self, path: &str) -> String {
        normalize_path(&self.prefix, path)
    }

    /// Registers an HTTP handler on `path` for `methods` and returns the
    /// handler unchanged.
    ///
    /// Methods are stored verbatim; an empty or bogus list is accepted
    /// here and reported when the routes are mounted.
    pub fn register_http<H, T, I, M>(
        &mut self,
        path: &str,
        methods: I,
        handler: H,
        options: RouteOptions,
    ) -> H
    where
        H: Handler<T, S>,
        T: 'static,
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        let full_path = self.normalize_path(path);
        let methods: Vec<String> = methods.into_iter().map(Into::into).collect();
        tracing::trace!(path = %full_path, ?methods, name = ?options.name, "registered http route");
        self.routes.push(RouteDescriptor::Http(HttpRoute::new(
            full_path,
            methods,
            options,
            handler.clone(),
        )));
        handler
    }

    /// Registers a WebSocket handler on `path` and returns it unchanged.
    ///
    /// The handler receives the upgraded socket.
    pub fn register_ws<F, Fut>(&mut self, path: &str, handler: F, name: Option<&str>) -> F
    where
        F: Fn(WebSocket) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let full_path = self.normalize_path(path);
        tracing::trace!(path = %full_path, ?name, "registered websocket route");
        self.routes.push(RouteDescriptor::WebSocket(WebSocketRoute::new(
            full_path,
            name.map(str::to_owned),
            handler.clone(),
        )));
        handler
    }

    /// Registers a WebSocket handler that also receives the host state,
    /// and returns it unchanged.
    pub fn register_ws_with_state<F, Fut>(
        &mut self,
        path: &str,
        handler: F,
        name: Option<&str>,
    ) -> F
    where
        F: Fn(WebSocket, S) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let full_path = self.normalize_path(path);
        tracing::trace!(path = %full_path, ?name, "registered stateful websocket route");
        self.routes.push(RouteDescriptor::WebSocket(WebSocketRoute::with_state(
            full_path,
            name.map(str::to_owned),
            handler.clone(),
        )));
        handler
    }

    /// Builds a router containing every registered route.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the descriptors cannot be mounted; see
    /// [`super::mount`].
    pub fn to_router(&self) -> Result<Router<S>, MountError> {
        mount(Router::new(), &self.routes)
    }
}

impl<S> ApiRouter<S> {
    /// Returns the descriptors in registration order.
    #[must_use]
    pub fn list_routes(&self) -> &[RouteDescriptor<S>] {
        &self.routes
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolves a route name to a concrete path.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoMatch`] if no route with that name takes
    /// exactly the supplied captures.
    pub fn url_path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        reverse::url_path_for(
            self.routes.iter().map(|route| (route.name(), route.path())),
            name,
            params,
        )
    }

    /// OpenAPI paths for the schema-visible HTTP routes.
    #[must_use]
    pub fn openapi_paths(&self) -> Paths {
        openapi_paths(&self.routes)
    }
}

impl<S> Default for ApiRouter<S> {
    /// A registrar mounting at the root.
    fn default() -> Self {
        Self {
            prefix: Prefix::default(),
            routes: Vec::new(),
        }
    }
}

impl<S> fmt::Debug for ApiRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRouter")
            .field("prefix", &self.prefix)
            .field("routes", &self.routes)
            .finish()
    }
}
