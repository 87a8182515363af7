//! Extractors that report malformed input as [`AppError::BadRequest`].
//!
//! Axum's stock `Json` answers some body errors with 415 or 422; clients of
//! this API expect every malformed request to come back as a 400 with the
//! usual `{ "error", "code" }` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
