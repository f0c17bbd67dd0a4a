use std::sync::Arc;

use anyhow::Context;
use brailleread_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use brailleread_models::contact::ContactSubmission;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    send_email_endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    /// `base_url` is the root of the relay server, e.g. `http://localhost:5000/`
    /// or `https://example.com/backend`.
    pub fn new(base_url: &Url) -> anyhow::Result<Self> {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let send_email_endpoint = base_url
            .join("api/send-email")
            .with_context(|| format!("Invalid contact api url {base_url}"))?;
        Ok(Self {
            send_email_endpoint: send_email_endpoint.into(),
        })
    }
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    #[tracing::instrument(skip_all, fields(endpoint = %self.config.send_email_endpoint))]
    async fn send_email(
        &self,
        submission: &ContactSubmission,
    ) -> anyhow::Result<ContactApiResponse> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        self.client
            .post((*self.config.send_email_endpoint).clone())
            .json(&SendEmailRequest {
                name,
                email,
                message,
            })
            .send()
            .await
            .context("Failed to reach the contact api")?
            .json::<SendEmailResponse>()
            .await
            .map(Into::into)
            .context("Failed to decode the contact api response")
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    success: bool,
    message: String,
}

impl From<SendEmailResponse> for ContactApiResponse {
    fn from(value: SendEmailResponse) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}
