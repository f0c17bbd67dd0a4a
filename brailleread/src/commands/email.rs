use anyhow::ensure;
use brailleread_config::Config;
use brailleread_email_contracts::{Email, EmailBody, EmailService};
use brailleread_models::email_address::EmailAddressWithName;
use clap::Subcommand;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email).await?;

    let ok = email_service
        .send(Email {
            sender_name: None,
            recipient,
            reply_to: None,
            subject: "Email Deliverability Test".into(),
            body: EmailBody::Text("Email deliverability seems to be working!".into()),
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
