use std::time::Duration;

use anyhow::anyhow;
use brailleread_email_contracts::{Email, EmailBody, EmailService};
use brailleread_models::email_address::{EmailAddress, EmailAddressWithName};
use brailleread_utils::Apply;
use lettre::{
    message::{header, MessageBuilder, MultiPart},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// Create a pooled smtp transport for the given url. No connection is
    /// established until the first email is sent.
    pub async fn new(url: &str, from: EmailAddress, timeout: Duration) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?
            .timeout(Some(timeout))
            .build();

        Ok(Self { from, transport })
    }

    #[cfg(feature = "dummy")]
    pub async fn dummy() -> Self {
        Self::new(
            "smtp://dummy",
            "dummy@example.com".parse().unwrap(),
            Duration::from_secs(1),
        )
        .await
        .unwrap()
    }

    fn build_message(&self, email: Email) -> anyhow::Result<Message> {
        let from = match email.sender_name {
            Some(name) => self.from.clone().with_name(name),
            None => EmailAddressWithName::from(self.from.clone()),
        };

        let builder = Message::builder()
            .from(from.header_safe().0)
            .to(email.recipient.header_safe().0)
            .apply_map(
                email.reply_to.map(|x| x.header_safe().0),
                MessageBuilder::reply_to,
            )
            .subject(email.subject);

        let message = match email.body {
            EmailBody::Text(body) => builder.header(header::ContentType::TEXT_PLAIN).body(body)?,
            EmailBody::Html(body) => builder.header(header::ContentType::TEXT_HTML).body(body)?,
            EmailBody::Alternative { html, text } => {
                builder.multipart(MultiPart::alternative_plain_html(text, html))?
            }
        };

        Ok(message)
    }
}

impl EmailService for EmailServiceImpl {
    #[tracing::instrument(skip_all, fields(subject = %email.subject))]
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
