//! Mounting accumulated descriptors into an [`axum::Router`].
//!
//! axum panics on conflicting or malformed routes. [`mount`] checks the
//! whole descriptor set first and reports the first problem as a
//! [`MountError`], so either every route is mounted or none is.
//!
//! Conflicts with routes already present in the router passed to
//! [`mount`] are not detected.

use axum::Router;
use axum::http::Method;
use axum::routing::{MethodFilter, MethodRouter};

use super::route::{HttpRoute, RouteDescriptor};
use crate::error::MountError;

/// Mounts `routes` into `router` in registration order.
///
/// HTTP method names are upper-cased before parsing. WebSocket routes
/// occupy `GET` on their path.
///
/// # Errors
///
/// Returns [`MountError`] for an empty or unsupported method list, a path
/// the router cannot parse, the same method bound twice on one path, or
/// two paths whose captures collide.
pub fn mount<S>(router: Router<S>, routes: &[RouteDescriptor<S>]) -> Result<Router<S>, MountError>
where
    S: Clone + Send + Sync + 'static,
{
    // Paths in first-registration order with the methods bound so far.
    let mut claimed: Vec<(&str, Vec<Method>)> = Vec::new();
    let mut pending: Vec<(&str, Vec<Method>, MethodRouter<S>)> = Vec::with_capacity(routes.len());

    for route in routes {
        let path = route.path();
        validate_path(path)?;
        if !claimed.iter().any(|(other, _)| *other == path)
            && let Some((existing, _)) = claimed
                .iter()
                .find(|(other, _)| captures_collide(path, other))
        {
            return Err(MountError::CaptureConflict {
                path: path.to_string(),
                existing: (*existing).to_string(),
            });
        }

        let (methods, method_router) = match route {
            RouteDescriptor::Http(http) => {
                let methods = parse_methods(http)?;
                let filter = method_filter(http.path(), &methods)?;
                (methods, http.method_router(filter))
            }
            RouteDescriptor::WebSocket(ws) => (vec![Method::GET], ws.method_router()),
        };

        match claimed.iter_mut().find(|(other, _)| *other == path) {
            Some((_, taken)) => {
                for method in &methods {
                    if taken.contains(method) {
                        return Err(MountError::MethodConflict {
                            path: path.to_string(),
                            method: method.to_string(),
                        });
                    }
                    taken.push(method.clone());
                }
            }
            None => claimed.push((path, methods.clone())),
        }
        pending.push((path, methods, method_router));
    }

    Ok(pending
        .into_iter()
        .fold(router, |router, (path, methods, method_router)| {
            tracing::debug!(path, ?methods, "mounting route");
            router.route(path, method_router)
        }))
}

/// Upper-cases and parses the registered method names, dropping repeats.
fn parse_methods<S>(route: &HttpRoute<S>) -> Result<Vec<Method>, MountError> {
    if route.methods().is_empty() {
        return Err(MountError::NoMethods {
            path: route.path().to_string(),
        });
    }
    let mut methods = Vec::with_capacity(route.methods().len());
    for raw in route.methods() {
        let method = Method::from_bytes(raw.to_ascii_uppercase().as_bytes()).map_err(|_| {
            MountError::UnsupportedMethod {
                path: route.path().to_string(),
                method: raw.clone(),
            }
        })?;
        if !methods.contains(&method) {
            methods.push(method);
        }
    }
    Ok(methods)
}

fn method_filter(path: &str, methods: &[Method]) -> Result<MethodFilter, MountError> {
    let mut filters = methods.iter().map(|method| {
        MethodFilter::try_from(method.clone()).map_err(|_| MountError::UnsupportedMethod {
            path: path.to_string(),
            method: method.to_string(),
        })
    });
    let Some(first) = filters.next() else {
        return Err(MountError::NoMethods {
            path: path.to_string(),
        });
    };
    filters.try_fold(first?, |acc, next| Ok(acc.or(next?)))
}

/// Rejects paths axum 0.8 would panic on.
///
/// A segment is either literal text (`{{` and `}}` escape braces) or a
/// single capture filling the whole segment. Mixed segments such as
/// `{id}.json` or `x{id}` are refused so capture conflicts can be
/// checked segment by segment.
fn validate_path(path: &str) -> Result<(), MountError> {
    let invalid = |reason| MountError::InvalidPath {
        path: path.to_string(),
        reason,
    };
    if !path.starts_with('/') {
        return Err(invalid("path must start with `/`"));
    }
    let mut names: Vec<&str> = Vec::new();
    let mut segments = path.split('/').peekable();
    while let Some(segment) = segments.next() {
        let is_last = segments.peek().is_none();
        if segment.starts_with(':') || segment.starts_with('*') {
            return Err(invalid("use `{capture}` or `{*wildcard}` instead of `:` or `*`"));
        }
        if segment.contains("{{") || segment.contains("}}") {
            let unescaped = segment.replace("{{", "").replace("}}", "");
            if unescaped.contains(['{', '}']) {
                return Err(invalid("escaped braces cannot share a segment with a capture"));
            }
            continue;
        }
        if !segment.contains(['{', '}']) {
            continue;
        }
        let Some(inner) = segment
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            return Err(invalid("a capture must fill the whole segment"));
        };
        let (name, catch_all) = match inner.strip_prefix('*') {
            Some(name) => (name, true),
            None => (inner, false),
        };
        if name.is_empty() {
            return Err(invalid("empty capture name"));
        }
        if name.contains(['{', '}', '*']) {
            return Err(invalid("only one capture is allowed per segment"));
        }
        if catch_all && !is_last {
            return Err(invalid("catch-all capture must be the last segment"));
        }
        if names.contains(&name) {
            return Err(invalid("capture name used twice"));
        }
        names.push(name);
    }
    Ok(())
}

fn is_capture(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}') && !segment.starts_with("{{")
}

/// Two distinct paths collide when, after a common literal prefix, both
/// place a capture at the same position under different names.
fn captures_collide(a: &str, b: &str) -> bool {
    for (left, right) in a.split('/').zip(b.split('/')) {
        if left == right {
            continue;
        }
        return is_capture(left) && is_capture(right);
    }
    false
}
