use std::future::Future;

use atelier_models::inquiry::ValidatedInquiry;
use thiserror::Error;

/// Delivers a validated inquiry to the atelier, usually as an email.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryNotifier: Send + Sync + 'static {
    fn notify(
        &self,
        inquiry: ValidatedInquiry,
    ) -> impl Future<Output = Result<(), NotifierError>> + Send;
}

#[derive(Debug, Error)]
pub enum NotifierError {
    /// The delivery service refused the request.
    #[error("The email service rejected the inquiry: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NotifierError {
    /// The reason to show to the user, if the service provided one.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Rejected(reason) => Some(reason.trim())
                .filter(|reason| !reason.is_empty())
                .map(Into::into),
            Self::Other(err) => Some(err.to_string()).filter(|reason| !reason.is_empty()),
        }
    }
}

#[cfg(feature = "mock")]
impl MockInquiryNotifier {
    pub fn with_notify(mut self, inquiry: ValidatedInquiry, result: Result<(), String>) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(move |_| {
                Box::pin(std::future::ready(result.map_err(NotifierError::Rejected)))
            });
        self
    }
}
