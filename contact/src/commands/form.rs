use contact_config::Config;
use contact_form::terminal;
use tokio::io::BufReader;
use tracing::debug;
use url::Url;

use crate::environment;

/// Runs the contact form in the terminal, posting to `endpoint` or to the
/// configured endpoint.
pub async fn form(config: Config, endpoint: Option<Url>) -> anyhow::Result<()> {
    let endpoint = endpoint.unwrap_or(config.form.endpoint);
    debug!(%endpoint, "starting contact form");

    let mut page = environment::form_page(endpoint)?;
    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    terminal::run(&mut page, &mut input, &mut output).await
}
