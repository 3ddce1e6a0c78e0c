use atelier_config::{Config, NotifierBackend, NotifierConfig};
use atelier_core_inquiry_impl::{InquiryFormServiceConfig, InquiryFormServiceImpl};
use atelier_models::inquiry::ValidatedInquiry;
use atelier_notify_contracts::{InquiryNotifier, NotifierError};
use atelier_notify_impl::{
    emailjs::{EmailJsNotifierConfig, EmailJsNotifierImpl},
    smtp::SmtpNotifierImpl,
};
use anyhow::Context;
use tracing::{debug, info};

pub type InquiryFormService = InquiryFormServiceImpl<Notifier>;

/// The notifier backend selected in the config.
#[derive(Debug, Clone)]
pub enum Notifier {
    EmailJs(EmailJsNotifierImpl),
    Smtp(SmtpNotifierImpl),
}

impl Notifier {
    pub fn new(config: &NotifierConfig) -> anyhow::Result<Self> {
        debug!(backend = ?config.backend, "creating inquiry notifier");
        match config.backend {
            NotifierBackend::Emailjs => {
                let emailjs = config
                    .emailjs
                    .as_ref()
                    .context("Missing [notifier.emailjs] config")?;
                let config = EmailJsNotifierConfig::new(
                    emailjs.endpoint_override.clone(),
                    emailjs.service_id.clone(),
                    emailjs.template_id.clone(),
                    emailjs.public_key.clone(),
                    emailjs.private_key.clone(),
                )?;
                Ok(Self::EmailJs(EmailJsNotifierImpl::new(config)))
            }
            NotifierBackend::Smtp => {
                let smtp = config
                    .smtp
                    .as_ref()
                    .context("Missing [notifier.smtp] config")?;
                let notifier =
                    SmtpNotifierImpl::new(&smtp.url, smtp.from.clone(), smtp.recipient.clone())
                        .context("Failed to create smtp transport")?;
                Ok(Self::Smtp(notifier))
            }
        }
    }

    /// Checks that the backend is reachable. EmailJS is only contacted when an
    /// inquiry is sent, so only the smtp server is pinged.
    pub async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::EmailJs(_) => Ok(()),
            Self::Smtp(notifier) => {
                notifier.ping().await?;
                info!("smtp server is reachable");
                Ok(())
            }
        }
    }
}

impl InquiryNotifier for Notifier {
    async fn notify(&self, inquiry: ValidatedInquiry) -> Result<(), NotifierError> {
        match self {
            Self::EmailJs(notifier) => notifier.notify(inquiry).await,
            Self::Smtp(notifier) => notifier.notify(inquiry).await,
        }
    }
}

pub fn inquiry_form_service(config: &Config) -> anyhow::Result<InquiryFormService> {
    let notifier = Notifier::new(&config.notifier)?;

    let service_config = InquiryFormServiceConfig {
        submit_timeout: config.inquiry.submit_timeout.map(|timeout| *timeout),
    };

    Ok(InquiryFormServiceImpl::new(notifier, service_config))
}
