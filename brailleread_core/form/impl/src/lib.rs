use brailleread_core_form_contracts::ContactFormFeatureService;
use brailleread_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use brailleread_models::contact::{ContactForm, ContactFormStatus};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ContactFormFeatureServiceImpl<ContactApi> {
    contact_api: ContactApi,
}

impl<ContactApi> ContactFormFeatureServiceImpl<ContactApi> {
    pub fn new(contact_api: ContactApi) -> Self {
        Self { contact_api }
    }
}

impl<ContactApi> ContactFormFeatureService for ContactFormFeatureServiceImpl<ContactApi>
where
    ContactApi: ContactApiService,
{
    #[tracing::instrument(skip_all)]
    async fn submit(&self, form: &mut ContactForm) {
        if !form.submission.is_complete() {
            form.set_status(ContactFormStatus::Incomplete);
            return;
        }

        form.set_status(ContactFormStatus::Sending);

        let status = match self.contact_api.send_email(&form.submission).await {
            Ok(ContactApiResponse {
                success: true,
                message,
            }) => {
                info!(%message, "contact form sent");
                ContactFormStatus::Sent
            }
            Ok(ContactApiResponse {
                success: false,
                message,
            }) => ContactFormStatus::Failed(message),
            Err(err) => {
                error!("failed to submit contact form: {err:#}");
                ContactFormStatus::NetworkError
            }
        };

        form.set_status(status);
    }
}
