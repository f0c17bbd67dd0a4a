use serde::Serialize;

pub mod contact;

/// Body of every response of the contact api.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
}
