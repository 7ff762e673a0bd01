//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure raised by a handler, service or repository ends up as an
//! [`AppError`]. Its [`IntoResponse`] implementation is the single place where
//! failures are turned into a status code and a `{ "msg": ... }` body.
//!
//! | Variant                   | Status | Body                                 |
//! |---------------------------|--------|--------------------------------------|
//! | [`AppError::NotFound`]    | 404    | resource-specific message            |
//! | [`AppError::BadInput`]    | 400    | `Bad Request`                        |
//! | [`AppError::RouteNotFound`] | 404  | `not found!`                         |
//! | [`AppError::Internal`]    | 500    | `Internal Server Error`              |
//!
//! Internal details are logged, never returned to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// SQLSTATE raised when a value cannot be parsed into the column type.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// SQLSTATE raised when a numeric value does not fit the column type.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

pub const BAD_REQUEST_MSG: &str = "Bad Request";
pub const ROUTE_NOT_FOUND_MSG: &str = "not found!";
pub const INTERNAL_ERROR_MSG: &str = "Internal Server Error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A requested resource does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// The request carried a malformed identifier or a value the store refused to parse.
    #[error("bad input: {message}")]
    BadInput { message: String },

    /// No route matched the request path.
    #[error("route not found")]
    RouteNotFound,

    /// Anything else: database outages, unreadable catalog, etc.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::BadInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let msg = match self {
            AppError::NotFound { message } => message,
            AppError::BadInput { message } => {
                tracing::debug!(%message, "Rejected malformed input");
                BAD_REQUEST_MSG.to_string()
            }
            AppError::RouteNotFound => ROUTE_NOT_FOUND_MSG.to_string(),
            AppError::Internal { message } => {
                tracing::error!(%message, "Request failed");
                INTERNAL_ERROR_MSG.to_string()
            }
        };

        (status, Json(ErrorBody { msg })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Classifies a database error.
///
/// Data-format rejections from the store (a non-numeric value bound to an
/// integer column, an out-of-range number) become [`AppError::BadInput`].
/// Everything else is [`AppError::Internal`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && matches!(
            db.code().as_deref(),
            Some(INVALID_TEXT_REPRESENTATION | NUMERIC_VALUE_OUT_OF_RANGE)
        )
    {
        return AppError::bad_input(db.message());
    }

    AppError::internal(format!("Database error: {e}"))
}
