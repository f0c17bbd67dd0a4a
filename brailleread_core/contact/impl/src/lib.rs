use std::{sync::Arc, time::Duration};

use brailleread_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use brailleread_email_contracts::{Email, EmailBody, EmailService};
use brailleread_models::{
    contact::ContactSubmission,
    email_address::{EmailAddress, EmailAddressWithName},
};
use brailleread_shared_contracts::time::TimeService;
use brailleread_templates_contracts::{
    ContactMessageHtmlTemplate, ContactMessagePlainTemplate, ContactMessageTemplate,
    TemplateService,
};
use tracing::warn;

/// Display name of the sender of contact form notifications.
pub const CONTACT_SENDER_NAME: &str = "BrailleRead Contact Form";

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Time, Template, Email> {
    time: Time,
    template: Template,
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Inbox receiving contact form notifications
    pub recipient: Arc<EmailAddressWithName>,
    pub send_timeout: Duration,
}

impl<Time, Template, EmailS> ContactFeatureServiceImpl<Time, Template, EmailS> {
    pub fn new(time: Time, template: Template, email: EmailS, config: ContactFeatureConfig) -> Self {
        Self {
            time,
            template,
            email,
            config,
        }
    }
}

impl<Time, Template, EmailS> ContactFeatureService
    for ContactFeatureServiceImpl<Time, Template, EmailS>
where
    Time: TimeService,
    Template: TemplateService,
    EmailS: EmailService,
{
    #[tracing::instrument(skip_all)]
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendMessageError> {
        if !submission.is_complete() {
            return Err(ContactSendMessageError::IncompleteSubmission);
        }

        let email = self.make_email(submission)?;

        match tokio::time::timeout(self.config.send_timeout, self.email.send(email)).await {
            Ok(Ok(true)) => Ok(()),
            Ok(Ok(false)) => Err(ContactSendMessageError::Send),
            Ok(Err(err)) => Err(err.into()),
            Err(_) => Err(ContactSendMessageError::Timeout),
        }
    }
}

impl<Time, Template, EmailS> ContactFeatureServiceImpl<Time, Template, EmailS>
where
    Time: TimeService,
    Template: TemplateService,
    EmailS: EmailService,
{
    fn make_email(&self, submission: ContactSubmission) -> anyhow::Result<Email> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        let reply_to = match email.parse::<EmailAddress>() {
            Ok(address) => Some(address.with_name(name.clone())),
            Err(err) => {
                warn!(%email, "submitted email address cannot be used as reply-to: {err}");
                None
            }
        };

        let subject = format!("New Contact from {name} - BrailleRead");

        let data = ContactMessageTemplate {
            name,
            email,
            message,
            sent_at: self.time.now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        };

        let html = self.template.render(&ContactMessageHtmlTemplate(data.clone()))?;
        let text = self.template.render(&ContactMessagePlainTemplate(data))?;

        Ok(Email {
            sender_name: Some(CONTACT_SENDER_NAME.into()),
            recipient: (*self.config.recipient).clone(),
            reply_to,
            subject,
            body: EmailBody::Alternative { html, text },
        })
    }
}

#[cfg(test)]
mod tests {
    use brailleread_email_contracts::MockEmailService;
    use brailleread_shared_contracts::time::MockTimeService;
    use brailleread_templates_contracts::MockTemplateService;
    use brailleread_utils::assert_matches;
    use chrono::DateTime;

    use super::*;

    type Sut = ContactFeatureServiceImpl<MockTimeService, MockTemplateService, MockEmailService>;

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            recipient: Arc::new("inbox@brailleread.example".parse().unwrap()),
            send_timeout: Duration::from_secs(10),
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        }
    }

    fn template_data(submission: &ContactSubmission) -> ContactMessageTemplate {
        ContactMessageTemplate {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            sent_at: "2024-07-01 12:00:00 UTC".into(),
        }
    }

    fn expected_email(reply_to: Option<&str>) -> Email {
        Email {
            sender_name: Some("BrailleRead Contact Form".into()),
            recipient: "inbox@brailleread.example".parse().unwrap(),
            reply_to: reply_to.map(|x| x.parse().unwrap()),
            subject: "New Contact from Ada - BrailleRead".into(),
            body: EmailBody::Alternative {
                html: "<p>html</p>".into(),
                text: "text".into(),
            },
        }
    }

    fn make_sut(submission: &ContactSubmission, email: MockEmailService) -> Sut {
        let time = MockTimeService::new()
            .with_now(DateTime::from_timestamp(1719835200, 0).unwrap());

        let template = MockTemplateService::new()
            .with_render(
                ContactMessageHtmlTemplate(template_data(submission)),
                "<p>html</p>".into(),
            )
            .with_render(
                ContactMessagePlainTemplate(template_data(submission)),
                "text".into(),
            );

        ContactFeatureServiceImpl::new(time, template, email, config())
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email =
            MockEmailService::new().with_send(expected_email(Some("Ada <ada@example.com>")), true);
        let sut = make_sut(&submission(), email);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn incomplete_submission() {
        for submission in [
            ContactSubmission {
                name: "".into(),
                ..submission()
            },
            ContactSubmission {
                email: "".into(),
                ..submission()
            },
            ContactSubmission {
                message: "".into(),
                ..submission()
            },
            ContactSubmission::default(),
        ] {
            // Arrange
            let sut = ContactFeatureServiceImpl::new(
                MockTimeService::new(),
                MockTemplateService::new(),
                MockEmailService::new(),
                config(),
            );

            // Act
            let result = sut.send_message(submission).await;

            // Assert
            assert_matches!(result, Err(ContactSendMessageError::IncompleteSubmission));
        }
    }

    #[tokio::test]
    async fn invalid_email_address_skips_reply_to() {
        // Arrange
        let submission = ContactSubmission {
            email: "not an email".into(),
            ..submission()
        };
        let email = MockEmailService::new().with_send(expected_email(None), true);
        let sut = make_sut(&submission, email);

        // Act
        let result = sut.send_message(submission).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn line_breaks_in_name_are_removed_from_reply_to() {
        for name in ["Ada\nLovelace", "Ada\rLovelace"] {
            // Arrange
            let submission = ContactSubmission {
                name: name.into(),
                ..submission()
            };
            let expected = Email {
                reply_to: Some(
                    "ada@example.com"
                        .parse::<EmailAddress>()
                        .unwrap()
                        .with_name("Ada Lovelace"),
                ),
                subject: format!("New Contact from {name} - BrailleRead"),
                ..expected_email(None)
            };
            let email = MockEmailService::new().with_send(expected, true);
            let sut = make_sut(&submission, email);

            // Act
            let result = sut.send_message(submission).await;

            // Assert
            result.unwrap();
        }
    }

    #[tokio::test]
    async fn rejected_by_smtp_server() {
        // Arrange
        let email =
            MockEmailService::new().with_send(expected_email(Some("Ada <ada@example.com>")), false);
        let sut = make_sut(&submission(), email);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Send));
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let email = MockEmailService::new().with_send_error(
            expected_email(Some("Ada <ada@example.com>")),
            "535 authentication failed",
        );
        let sut = make_sut(&submission(), email);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSendMessageError::Other(err)) if err.to_string() == "535 authentication failed"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() {
        // Arrange
        let mut email = MockEmailService::new();
        email
            .expect_send()
            .once()
            .return_once(|_| Box::pin(std::future::pending::<anyhow::Result<bool>>()));
        let sut = make_sut(&submission(), email);

        // Act
        let result = sut.send_message(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Timeout));
    }

    #[tokio::test]
    async fn repeated_submissions_are_sent_twice() {
        // Arrange
        let mut time = MockTimeService::new();
        time.expect_now()
            .times(2)
            .return_const(DateTime::from_timestamp(1719835200, 0).unwrap());

        let mut template = MockTemplateService::new();
        template
            .expect_render::<ContactMessageHtmlTemplate>()
            .times(2)
            .returning(|_| Ok("<p>html</p>".into()));
        template
            .expect_render::<ContactMessagePlainTemplate>()
            .times(2)
            .returning(|_| Ok("text".into()));

        let mut email = MockEmailService::new();
        email
            .expect_send()
            .times(2)
            .with(mockall::predicate::eq(expected_email(Some(
                "Ada <ada@example.com>",
            ))))
            .returning(|_| Box::pin(std::future::ready(Ok(true))));

        let sut = ContactFeatureServiceImpl::new(time, template, email, config());

        // Act
        let first = sut.send_message(submission()).await;
        let second = sut.send_message(submission()).await;

        // Assert
        first.unwrap();
        second.unwrap();
    }
}
