//! # api-router
//!
//! Prefixed HTTP and WebSocket route registration on top of `axum`.
//!
//! An [`ApiRouter`](routing::ApiRouter) collects endpoints for one logical
//! sub-application under a shared path prefix. Paths are normalized at
//! registration time; dispatch is left entirely to axum once the
//! descriptors are mounted.
//!
//! ## Architecture
//!
//! ```text
//! Host application (startup)
//!     │
//!     ├── ApiRouter (routing/)       register_http / register_ws
//!     │       │
//!     │       ├── list_routes()      ordered RouteDescriptors
//!     │       ├── mount()            → axum::Router, typed MountError
//!     │       ├── url_path_for()     name → concrete path
//!     │       └── openapi_paths()    schema-visible routes → utoipa
//!     │
//!     └── Demo server (api/, ws/)    health, route listing, echo socket
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use api_router::routing::{ApiRouter, RouteOptions};
//!
//! async fn list_users() -> &'static str {
//!     "[]"
//! }
//!
//! let mut api: ApiRouter = ApiRouter::new("api");
//! api.register_http("/users/", ["GET"], list_users, RouteOptions::named("users"));
//! assert_eq!(api.normalize_path("/users/"), "/api/users");
//! assert!(api.to_router().is_ok());
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod routing;
pub mod ws;
