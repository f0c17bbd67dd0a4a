use anyhow::Context;
use brailleread_config::EmailConfig;
use brailleread_email_impl::EmailServiceImpl;

/// Connect to the SMTP server
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone(), config.timeout.into())
        .await
        .context("Failed to connect to SMTP server")
}
