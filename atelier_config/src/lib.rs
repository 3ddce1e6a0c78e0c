use std::path::{Path, PathBuf};

use anyhow::Context;
use atelier_models::{email_address::EmailAddressWithName, Sensitive};
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, later files overriding earlier ones.
pub const CONFIG_PATHS_ENV: &str = "ATELIER_CONFIG";

/// Loads the config files listed in [`CONFIG_PATHS_ENV`], falling back to
/// [`DEFAULT_CONFIG_PATH`].
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATHS_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect::<Vec<_>>(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };

    load_with_overrides(&paths, &[])
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_overrides(paths, &[])
}

/// Layers the given files and then the inline TOML `overrides` on top of each
/// other.
pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    let config = overrides
        .iter()
        .fold(builder, |builder, &content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .build()?
        .try_deserialize::<Config>()
        .context("Failed to load config")?;

    config.validate()?;

    Ok(config)
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub inquiry: InquiryConfig,
    pub notifier: NotifierConfig,
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        match self.notifier.backend {
            NotifierBackend::Emailjs => self
                .notifier
                .emailjs
                .as_ref()
                .map(|_| ())
                .context("The emailjs notifier backend requires a [notifier.emailjs] section"),
            NotifierBackend::Smtp => self
                .notifier
                .smtp
                .as_ref()
                .map(|_| ())
                .context("The smtp notifier backend requires a [notifier.smtp] section"),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InquiryConfig {
    pub submit_timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct NotifierConfig {
    pub backend: NotifierBackend,
    pub emailjs: Option<EmailJsConfig>,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifierBackend {
    Emailjs,
    Smtp,
}

#[derive(Debug, Deserialize)]
pub struct EmailJsConfig {
    pub endpoint_override: Option<Url>,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Sensitive<String>,
    pub private_key: Option<Sensitive<String>>,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: Sensitive<String>,
    pub from: EmailAddressWithName,
    pub recipient: EmailAddressWithName,
}
