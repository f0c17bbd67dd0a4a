use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
    routing, Json, Router,
};
use brailleread_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use tracing::{debug, error};

use crate::{
    errors::{failure, success},
    models::contact::ApiContactSubmission,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/send-email", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let submission = match parse_submission(&headers, &body) {
        Ok(submission) => submission,
        Err(rejection) => {
            debug!("rejected contact form submission: {rejection}");
            return failure(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    match service.send_message(submission.into()).await {
        Ok(()) => success("Email sent successfully!"),
        Err(ContactSendMessageError::IncompleteSubmission) => {
            failure(StatusCode::BAD_REQUEST, "All fields are required")
        }
        Err(err) => {
            error!("failed to send contact message: {err:#}");
            failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send email. Please try again later.",
            )
        }
    }
}

/// Bodies without a json content type and empty bodies are read as an empty
/// submission.
fn parse_submission(
    headers: &HeaderMap,
    body: &Bytes,
) -> Result<ApiContactSubmission, JsonRejection> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ApiContactSubmission::default());
    }

    Json::from_bytes(body).map(|Json(submission)| submission)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
