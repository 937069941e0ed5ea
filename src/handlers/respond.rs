//! Shared error-to-response mapping for the admin handlers.
//!
//! The failure taxonomy is small: upstream/network failures become 502,
//! input validation failures become 400 before any upstream call, and
//! business-rule rejections become 409 before any upstream write.

use axum::{Json, http::StatusCode};

use crate::models::common::ErrorResponse;

pub(crate) type ApiRejection = (StatusCode, Json<ErrorResponse>);

pub(crate) fn upstream_error(error: Box<dyn std::error::Error + Send + Sync>) -> ApiRejection {
    tracing::error!("Store backend request failed: {}", error);
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "Không thể tải dữ liệu từ máy chủ. Vui lòng thử lại.".to_string(),
        }),
    )
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiRejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub(crate) fn not_found(message: impl Into<String>) -> ApiRejection {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub(crate) fn conflict(message: impl Into<String>) -> ApiRejection {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}
