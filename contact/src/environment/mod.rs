use types::{ContactApi, ContactFeature, FormPage, Notifier, RestServer};
use url::Url;

pub mod types;

pub fn rest_server() -> RestServer {
    RestServer::new(ContactFeature::new(Notifier::default()))
}

pub fn form_page(endpoint: Url) -> anyhow::Result<FormPage> {
    Ok(FormPage::new(ContactApi::new(endpoint)?))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use contact_config::DEFAULT_CONFIG_PATH;
    use contact_form::state::FormState;

    use super::*;

    #[test]
    fn provide_rest_server() {
        let _router = rest_server().router();
    }

    #[test]
    fn provide_form_page() {
        let config = contact_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        let page = form_page(config.form.endpoint).unwrap();

        assert_eq!(*page.state(), FormState::Idle);
    }
}
