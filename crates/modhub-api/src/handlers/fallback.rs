//! Fallback for unmatched routes.

use axum::http::Uri;
use axum::response::{IntoResponse, Response};

use modhub_core::error::AppError;

use crate::error::ApiError;
use crate::redirect::redirect_trailing_slash;

/// Redirects `/api/...` paths with a trailing `/` to their canonical form.
/// Anything else is `404 Not Found`.
pub async fn fallback(uri: Uri) -> Response {
    let path = uri.path();
    if path.starts_with("/api/") && path.ends_with('/') {
        return redirect_trailing_slash(path, uri.query());
    }
    ApiError(AppError::not_found(format!("no route for '{path}'"))).into_response()
}
