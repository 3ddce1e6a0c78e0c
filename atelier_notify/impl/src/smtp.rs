use anyhow::{anyhow, Context};
use atelier_models::{email_address::EmailAddressWithName, inquiry::ValidatedInquiry};
use atelier_notify_contracts::{InquiryNotifier, NotifierError};
use atelier_utils::trace_instrument;
use lettre::{message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::MISSING_PHONE;

/// Emails inquiries straight to the atelier's inbox over SMTP.
#[derive(Debug, Clone)]
pub struct SmtpNotifierImpl {
    from: EmailAddressWithName,
    recipient: EmailAddressWithName,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifierImpl {
    pub fn new(
        url: &str,
        from: EmailAddressWithName,
        recipient: EmailAddressWithName,
    ) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self {
            from,
            recipient,
            transport,
        })
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }

    fn build_message(&self, inquiry: &ValidatedInquiry) -> anyhow::Result<Message> {
        let reply_to = inquiry.email.clone().with_name((*inquiry.name).clone());

        Message::builder()
            .from(self.from.0.clone())
            .to(self.recipient.0.clone())
            .reply_to(reply_to.0)
            .subject(subject(inquiry))
            .header(header::ContentType::TEXT_PLAIN)
            .body(body(inquiry))
            .context("Failed to build inquiry email")
    }
}

impl InquiryNotifier for SmtpNotifierImpl {
    #[trace_instrument(skip(self, inquiry))]
    async fn notify(&self, inquiry: ValidatedInquiry) -> Result<(), NotifierError> {
        let message = self.build_message(&inquiry)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|err| NotifierError::Other(err.into()))?;

        if !response.is_positive() {
            let text = response.message().collect::<Vec<_>>().join(" ");
            return Err(NotifierError::Rejected(format!(
                "{} {text}",
                response.code()
            )));
        }

        Ok(())
    }
}

fn subject(inquiry: &ValidatedInquiry) -> String {
    format!(
        "[Consultation Request] {} from {}",
        inquiry.dress_type.label(),
        *inquiry.name
    )
}

fn body(inquiry: &ValidatedInquiry) -> String {
    format!(
        "New consultation request from {} ({}):\n\nPhone: {}\nDress type: {}\nBudget: \
         {}\nTimeline: {}\n\n{}",
        *inquiry.name,
        inquiry.email,
        inquiry.phone.as_deref().map_or(MISSING_PHONE, String::as_str),
        inquiry.dress_type.label(),
        inquiry.budget.label(),
        inquiry.timeline.label(),
        *inquiry.message,
    )
}
