//! Trailing-slash redirects.

use axum::response::{IntoResponse, Redirect, Response};

/// Adds a trailing `/` to `path`, or strips exactly one if present.
///
/// The root path `/` is returned unchanged.
pub fn toggle_trailing_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some("") => "/".to_string(),
        Some(stripped) => stripped.to_string(),
        None => format!("{path}/"),
    }
}

/// Permanent redirect (308) from `path` to its trailing-slash counterpart.
///
/// A non-empty `query` is carried over unchanged.
pub fn redirect_trailing_slash(path: &str, query: Option<&str>) -> Response {
    let mut target = toggle_trailing_slash(path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    tracing::debug!(from = %path, to = %target, "Trailing slash redirect");
    Redirect::permanent(&target).into_response()
}
