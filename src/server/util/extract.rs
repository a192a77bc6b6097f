use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON body extractor that reports malformed bodies as `AppError::BadRequest`.
///
/// Missing fields and syntax errors produce 400 with an `{"error": ...}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path extractor that reports unparsable segments, e.g. `/api/patients/abc`, as 400
/// with an `{"error": ...}` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor with the same error body as [`AppJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
