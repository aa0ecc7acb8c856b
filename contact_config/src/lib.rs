use std::{net::IpAddr, path::Path};

use anyhow::{ensure, Context};
use config::{File, FileFormat, Source};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Reads the contact configuration from toml files. Keys in later files
/// replace the same keys in earlier files.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let mut builder = config::Config::builder();
    for path in paths {
        builder = builder.add_source(toml_file(path.as_ref())?);
    }

    let config = builder
        .build()
        .and_then(|config| config.try_deserialize::<Config>())
        .context("Invalid contact configuration")?;
    config.form.check_endpoint()?;
    Ok(config)
}

fn toml_file(path: &Path) -> anyhow::Result<impl Source + Send + Sync + 'static> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read contact config {}", path.display()))?;
    Ok(File::from_str(&content, FileFormat::Toml))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub form: FormConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    /// Url of the submission endpoint the form posts to
    pub endpoint: Url,
}

impl FormConfig {
    fn check_endpoint(&self) -> anyhow::Result<()> {
        ensure!(
            matches!(self.endpoint.scheme(), "http" | "https"),
            "form.endpoint must be an http or https url, got {}",
            self.endpoint
        );
        Ok(())
    }
}
