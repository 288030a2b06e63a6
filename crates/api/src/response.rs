//! Response envelope types for API handlers.
//!
//! Successful writes answer `{ "status": "success", "message", "data" }` and
//! failures answer `{ "status": "fail", "message", "error" }`. Use these
//! structs instead of ad-hoc `serde_json::json!` bodies.

use serde::Serialize;

/// `{ "status": "success", ... }` envelope wrapping any serializable payload.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub status: &'static str,
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            status: "success",
            message,
            data,
        }
    }
}

/// `{ "status": "fail", ... }` envelope. Built by `AppError::into_response`.
#[derive(Debug, Serialize)]
pub struct FailResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub error: String,
}
