use brailleread_core_contact_impl::ContactFeatureServiceImpl;
use brailleread_core_form_impl::ContactFormFeatureServiceImpl;
use brailleread_email_impl::EmailServiceImpl;
use brailleread_extern_impl::contact::ContactApiServiceImpl;
use brailleread_shared_impl::time::TimeServiceImpl;
use brailleread_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = brailleread_api_rest::RestServer<ContactFeature>;

// Extern
pub type ContactApi = ContactApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;

// Email
pub type Email = EmailServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Time, Template, Email>;
pub type ContactFormFeature = ContactFormFeatureServiceImpl<ContactApi>;
