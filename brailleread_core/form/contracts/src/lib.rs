use std::future::Future;

use brailleread_models::contact::ContactForm;

pub trait ContactFormFeatureService: Send + Sync + 'static {
    /// Submit the form to the contact api and update its status.
    ///
    /// Incomplete forms are rejected locally without contacting the server.
    /// On success the form fields are cleared.
    fn submit(&self, form: &mut ContactForm) -> impl Future<Output = ()> + Send;
}
