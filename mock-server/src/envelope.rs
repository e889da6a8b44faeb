//! The `{code, message, data}` envelope every endpoint answers with.
//!
//! Business failures still travel as HTTP 200; only the envelope `code`
//! changes. Malformed requests are left to axum's own rejections.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUCCESS: i64 = 200;
pub const BAD_REQUEST: i64 = 400;
pub const NOT_FOUND: i64 = 404;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub message: String,
    pub data: T,
}

/// A failed operation, rendered as an envelope with `data: null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub code: i64,
    pub message: String,
}

impl Failure {
    pub fn not_found(what: &str, id: u64) -> Self {
        Self {
            code: NOT_FOUND,
            message: format!("{what} {id} not found"),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code, message = %self.message, "request failed");
        Json(Envelope {
            code: self.code,
            message: self.message,
            data: Value::Null,
        })
        .into_response()
    }
}

pub type Reply<T> = Result<Json<Envelope<T>>, Failure>;

pub fn ok<T>(data: T) -> Reply<T> {
    Ok(Json(Envelope {
        code: SUCCESS,
        message: "success".to_string(),
        data,
    }))
}
