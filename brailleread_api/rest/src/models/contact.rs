use brailleread_models::contact::ContactSubmission;
use serde::Deserialize;

/// A contact form submission as sent by the landing page. Missing and `null`
/// fields are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactSubmission {
    /// Full name of the user
    pub name: Option<String>,
    /// Email address of the user
    pub email: Option<String>,
    /// Content of the message
    pub message: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
        }
    }
}
