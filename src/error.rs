//! Error types for configuration, mounting and reverse route lookup.
//!
//! Registration itself never fails. Misconfiguration is reported when the
//! accumulated descriptors are mounted into an [`axum::Router`]
//! ([`MountError`]) or when a route name is resolved back into a concrete
//! path ([`RouteError`]).

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "no route named `user` matches the given parameters"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Invalid startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is set but is not a socket address.
    #[error("invalid LISTEN_ADDR `{value}`: {source}")]
    InvalidListenAddr {
        /// Raw variable value.
        value: String,
        /// Parser error.
        source: AddrParseError,
    },
}

/// Descriptor set that cannot be mounted into a host router.
///
/// Each variant names the offending route path so the caller can find the
/// registration that caused it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// An HTTP route was registered with an empty method list.
    #[error("route {path} declares no HTTP methods")]
    NoMethods {
        /// Normalized route path.
        path: String,
    },

    /// A method name is not a valid HTTP token or cannot be routed by axum.
    #[error("route {path}: unsupported method `{method}`")]
    UnsupportedMethod {
        /// Normalized route path.
        path: String,
        /// Method name as it was registered.
        method: String,
    },

    /// The path cannot be parsed by the router.
    #[error("invalid route path {path}: {reason}")]
    InvalidPath {
        /// Normalized route path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The same method is bound twice on one path.
    #[error("method {method} registered more than once on {path}")]
    MethodConflict {
        /// Normalized route path.
        path: String,
        /// Upper-cased method name.
        method: String,
    },

    /// Two paths bind differently named captures at the same position.
    #[error("captures in {path} conflict with {existing}")]
    CaptureConflict {
        /// Path being mounted.
        path: String,
        /// Previously mounted path it collides with.
        existing: String,
    },
}

/// Reverse lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No route carries the name with exactly the supplied captures.
    #[error("no route named `{name}` matches the given parameters")]
    NoMatch {
        /// Requested route name.
        name: String,
    },
}

impl RouteError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::NoMatch { .. } => 2001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NoMatch { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_error_names_the_path() {
        let err = MountError::MethodConflict {
            path: "/api/users".to_string(),
            method: "GET".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "method GET registered more than once on /api/users"
        );
    }

    #[test]
    fn route_error_maps_to_not_found() {
        let err = RouteError::NoMatch {
            name: "user".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
