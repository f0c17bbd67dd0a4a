use axum::{routing, Json, Router};
use serde::Serialize;

pub fn router() -> Router<()> {
    Router::new().route("/api/test", routing::get(status))
}

#[derive(Serialize)]
struct StatusResponse {
    message: &'static str,
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Email server is running!",
    })
}
