//! Route registration: prefixed descriptors and their consumers.
//!
//! [`ApiRouter`] accumulates [`RouteDescriptor`]s; [`mount`] turns them
//! into an axum router, [`url_path_for`] resolves names back to paths and
//! [`openapi_paths`] exports the schema-visible ones.

pub mod mount;
pub mod path;
pub mod registrar;
pub mod reverse;
pub mod route;
pub mod schema;

pub use mount::mount;
pub use path::{Prefix, normalize_path};
pub use registrar::ApiRouter;
pub use reverse::url_path_for;
pub use route::{HttpRoute, RouteDescriptor, RouteOptions, WebSocketRoute};
pub use schema::openapi_paths;
