//! Reverse lookup: route name + capture values → concrete path.
//!
//! Captures use axum 0.8 syntax: `{id}` for a single segment and
//! `{*rest}` for a catch-all. `{{` and `}}` are literal braces.

use crate::error::RouteError;

/// Returns the capture names of `path` in order of appearance.
///
/// Catch-all captures are returned without their `*`.
#[must_use]
pub fn capture_names(path: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = path;
    while let Some((_, after_open)) = rest.split_once('{') {
        if let Some(escaped) = after_open.strip_prefix('{') {
            rest = escaped;
            continue;
        }
        let Some((token, after_close)) = after_open.split_once('}') else {
            break;
        };
        names.push(token.trim_start_matches('*'));
        rest = after_close;
    }
    names
}

/// Resolves the first route called `name` whose capture set equals the
/// keys of `params`, substituting each capture with its value.
///
/// `routes` yields `(name, path)` pairs in registration order.
///
/// # Errors
///
/// Returns [`RouteError::NoMatch`] when no route carries the name, or
/// every route that does expects a different set of captures.
pub fn url_path_for<'a, I>(
    routes: I,
    name: &str,
    params: &[(&str, &str)],
) -> Result<String, RouteError>
where
    I: IntoIterator<Item = (Option<&'a str>, &'a str)>,
{
    let mut given: Vec<&str> = params.iter().map(|(key, _)| *key).collect();
    given.sort_unstable();
    given.dedup();

    routes
        .into_iter()
        .filter(|(route_name, _)| *route_name == Some(name))
        .find(|(_, path)| {
            let mut expected = capture_names(path);
            expected.sort_unstable();
            expected.dedup();
            expected == given
        })
        .map(|(_, path)| fill_captures(path, params))
        .ok_or_else(|| RouteError::NoMatch {
            name: name.to_string(),
        })
}

fn fill_captures(path: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some((literal, after_open)) = rest.split_once('{') {
        out.push_str(&literal.replace("}}", "}"));
        if let Some(escaped) = after_open.strip_prefix('{') {
            out.push('{');
            rest = escaped;
            continue;
        }
        let Some((token, after_close)) = after_open.split_once('}') else {
            out.push('{');
            rest = after_open;
            break;
        };
        let key = token.trim_start_matches('*');
        let value = params
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map_or("", |(_, value)| *value);
        out.push_str(value);
        rest = after_close;
    }
    out.push_str(&rest.replace("}}", "}"));
    out
}
