//! Path canonicalization for prefixed routes.
//!
//! [`Prefix`] is canonicalized once at construction time: it is either
//! empty or starts with `/` (one is added if missing) and carries no
//! trailing slash. [`normalize_path`] joins a
//! prefix and a route path into the string handed to the host router.

use std::fmt;

/// Canonical path prefix shared by every route of one registrar.
///
/// An empty prefix mounts routes at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Canonicalizes `raw`: prepends `/` when missing and strips trailing
    /// slashes. Inputs made only of slashes become the empty prefix.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Self(String::new());
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_owned())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// Returns the canonical prefix string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when routes are mounted at the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Prefix {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Joins `prefix` and `path` into a canonical route path.
///
/// The result always starts with `/`, and never ends with `/` unless it is
/// exactly `/`.
#[must_use]
pub fn normalize_path(prefix: &Prefix, path: &str) -> String {
    let mut full = String::with_capacity(prefix.as_str().len() + path.len() + 1);
    full.push_str(prefix.as_str());
    full.push_str(path);

    if !full.starts_with('/') {
        full.insert(0, '/');
    }
    if full != "/" && full.ends_with('/') {
        full.pop();
    }
    full
}
