use std::sync::Arc;

use atelier_models::{inquiry::ValidatedInquiry, Sensitive};
use atelier_notify_contracts::{InquiryNotifier, NotifierError};
use atelier_utils::trace_instrument;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::{http::HttpClient, MISSING_PHONE};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/";
pub const SEND_ROUTE: &str = "api/v1.0/email/send";

/// Sends inquiries through the EmailJS REST API, rendering them with a
/// template configured in the EmailJS dashboard.
#[derive(Debug, Clone)]
pub struct EmailJsNotifierImpl {
    config: Arc<EmailJsNotifierConfig>,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailJsNotifierConfig {
    pub send_endpoint: Url,
    pub service_id: String,
    pub template_id: String,
    pub public_key: Sensitive<String>,
    pub private_key: Option<Sensitive<String>>,
}

impl EmailJsNotifierConfig {
    pub fn new(
        endpoint_override: Option<Url>,
        service_id: String,
        template_id: String,
        public_key: Sensitive<String>,
        private_key: Option<Sensitive<String>>,
    ) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };

        Ok(Self {
            send_endpoint: endpoint.join(SEND_ROUTE)?,
            service_id,
            template_id,
            public_key,
            private_key,
        })
    }
}

impl EmailJsNotifierImpl {
    pub fn new(config: EmailJsNotifierConfig) -> Self {
        Self {
            config: config.into(),
            client: HttpClient::default(),
        }
    }
}

impl InquiryNotifier for EmailJsNotifierImpl {
    #[trace_instrument(skip(self, inquiry))]
    async fn notify(&self, inquiry: ValidatedInquiry) -> Result<(), NotifierError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref().map(String::as_str),
            template_params: TemplateParams::new(&inquiry),
        };

        let response = self
            .client
            .post(self.config.send_endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|err| NotifierError::Other(err.into()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await;
        Err(NotifierError::Rejected(rejection_reason(status, body)))
    }
}

/// EmailJS explains rejections in the plain text body. Falls back to the
/// status if the body is empty or unreadable.
fn rejection_reason(status: StatusCode, body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) if !body.trim().is_empty() => body,
        Ok(_) => status.to_string(),
        Err(err) => {
            warn!(%status, error = %err, "failed to read emailjs response body");
            status.to_string()
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    phone: &'a str,
    #[serde(rename = "dressType")]
    dress_type: &'static str,
    budget: &'static str,
    timeline: &'static str,
    message: &'a str,
}

impl<'a> TemplateParams<'a> {
    fn new(inquiry: &'a ValidatedInquiry) -> Self {
        Self {
            from_name: &inquiry.name,
            from_email: inquiry.email.as_str(),
            phone: inquiry.phone.as_deref().map_or(MISSING_PHONE, String::as_str),
            dress_type: inquiry.dress_type.label(),
            budget: inquiry.budget.label(),
            timeline: inquiry.timeline.label(),
            message: &inquiry.message,
        }
    }
}
