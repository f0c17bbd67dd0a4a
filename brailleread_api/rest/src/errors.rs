use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiResponse;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub fn success(message: &'static str) -> Response {
    Json(ApiResponse {
        success: true,
        message,
    })
    .into_response()
}

pub fn failure(code: StatusCode, message: &'static str) -> Response {
    (
        code,
        Json(ApiResponse {
            success: false,
            message,
        }),
    )
        .into_response()
}
