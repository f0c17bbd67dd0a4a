use serde::{Deserialize, Serialize};

/// A message submitted through the contact form on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Returns `true` iff `name`, `email` and `message` are all non-empty.
    ///
    /// The email address is not checked for a valid format.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

/// Client side state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub submission: ContactSubmission,
    pub status: Option<ContactFormStatus>,
}

impl ContactForm {
    pub fn new(submission: ContactSubmission) -> Self {
        Self {
            submission,
            status: None,
        }
    }

    /// Updates the status shown to the user. A successful submission clears
    /// the form fields.
    pub fn set_status(&mut self, status: ContactFormStatus) {
        if status == ContactFormStatus::Sent {
            self.submission = ContactSubmission::default();
        }
        self.status = Some(status);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormStatus {
    /// At least one field was left empty, nothing has been sent.
    Incomplete,
    Sending,
    Sent,
    /// The server rejected the submission with the given message.
    Failed(String),
    /// The server could not be reached or returned garbage.
    NetworkError,
}

impl std::fmt::Display for ContactFormStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete => f.write_str("Please fill in all fields"),
            Self::Sending => f.write_str("Sending..."),
            Self::Sent => f.write_str("✓ Message sent successfully!"),
            Self::Failed(message) => write!(f, "✗ {message}"),
            Self::NetworkError => f.write_str("✗ Failed to send message. Please try again."),
        }
    }
}
