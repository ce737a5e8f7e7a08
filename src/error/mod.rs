//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by handlers and
//! repositories. It implements `IntoResponse` so endpoints can bubble
//! failures with `?`; every error body has the shape
//! `{"message": <string>}`.
//!
//! Database errors are classified by inspecting the underlying SQL error:
//! a foreign-key violation means a referenced parent row is missing (404),
//! while a uniqueness violation is a data-integrity problem in the request
//! (400). Anything unclassified falls through to a generic 500 with the
//! detail logged server-side only.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::MessageDto};

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM. Classified into 400/404/500
    /// at response time.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced entity does not exist. Results in 404 Not Found.
    #[error("Not Found")]
    NotFound,

    /// Malformed or unrecognized input. Results in 400 Bad Request.
    #[error("Bad Request")]
    BadRequest,

    /// Internal error with a message for server-side logging. The client
    /// always receives a generic 500 body.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => message_response(StatusCode::NOT_FOUND, "Not Found"),
            Self::BadRequest => message_response(StatusCode::BAD_REQUEST, "Bad Request"),
            Self::DbErr(err) => db_error_response(err),
            Self::ConfigErr(err) => {
                tracing::error!("configuration error: {}", err);
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            Self::InternalError(msg) => {
                tracing::error!("internal error: {}", msg);
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

/// Maps a SeaORM error onto the HTTP taxonomy.
///
/// Foreign-key violations surface as 404 (the referenced parent is
/// missing), uniqueness violations as 400. Everything else is logged and
/// answered with a generic 500.
fn db_error_response(err: sea_orm::DbErr) -> Response {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            message_response(StatusCode::NOT_FOUND, "Not Found")
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            message_response(StatusCode::BAD_REQUEST, "Bad Request")
        }
        _ => {
            tracing::error!("database error: {}", err);
            message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(MessageDto {
            message: message.to_string(),
        }),
    )
        .into_response()
}
