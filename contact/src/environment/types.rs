use contact_core_contact_impl::ContactServiceImpl;
use contact_form::{api::ContactApiServiceImpl, page::ContactFormPage};
use contact_notifier_impl::LogNotifierServiceImpl;

// API
pub type RestServer = contact_api_rest::RestServer<ContactFeature>;

// Notifier
pub type Notifier = LogNotifierServiceImpl;

// Core
pub type ContactFeature = ContactServiceImpl<Notifier>;

// Form
pub type ContactApi = ContactApiServiceImpl;
pub type FormPage = ContactFormPage<ContactApi>;
