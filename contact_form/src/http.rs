use std::{ops::Deref, sync::LazyLock};

use contact_utils::contact_version;

pub static USER_AGENT: LazyLock<String> =
    LazyLock::new(|| format!("contact-form/{}", contact_version()));

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new() -> reqwest::Result<Self> {
        reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .map(Self)
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
