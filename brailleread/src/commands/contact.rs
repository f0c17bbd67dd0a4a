use anyhow::{ensure, Context};
use brailleread_config::Config;
use brailleread_core_form_contracts::ContactFormFeatureService;
use brailleread_models::contact::{ContactForm, ContactFormStatus, ContactSubmission};
use clap::Subcommand;
use url::Url;

use crate::environment::contact_form_feature;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a message through the contact api of a running server
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Base url of the server [default: http://127.0.0.1:<http.port>/]
        #[arg(long)]
        url: Option<Url>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                message,
                url,
            } => {
                let url = match url {
                    Some(url) => url,
                    None => format!("http://127.0.0.1:{}/", config.http.port)
                        .parse()
                        .context("Failed to build contact api url")?,
                };
                send(&url, ContactSubmission { name, email, message }).await
            }
        }
    }
}

async fn send(url: &Url, submission: ContactSubmission) -> anyhow::Result<()> {
    let contact_form = contact_form_feature(url)?;

    let mut form = ContactForm::new(submission);
    contact_form.submit(&mut form).await;

    let status = form.status.context("Contact form was not submitted")?;
    println!("{status}");
    ensure!(
        status == ContactFormStatus::Sent,
        "Failed to send contact message"
    );

    Ok(())
}
