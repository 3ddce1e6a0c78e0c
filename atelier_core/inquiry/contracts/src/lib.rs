use std::future::Future;

use atelier_models::{
    inquiry::{InquiryField, InquiryForm, ValidatedInquiry},
    validation::ValidationErrorSet,
};
use serde::Serialize;
use tokio::sync::watch;

pub const SUBMIT_LABEL: &str = "Request Appointment";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const GENERIC_FAILURE_REASON: &str = "Something went wrong.";
pub const TIMEOUT_FAILURE_REASON: &str = "The request timed out.";

/// Controls a single consultation form: its field values, its validation
/// errors and the lifecycle of its submission.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait InquiryFormService: Send + Sync + 'static {
    /// Sets the value of a field and clears the error currently shown for it.
    ///
    /// A settled submission (succeeded or failed) returns to idle.
    fn update_field(&self, field: InquiryField, value: String);

    /// Runs a full validation pass over `form` without touching any state.
    fn validate(&self, form: &InquiryForm) -> Result<ValidatedInquiry, ValidationErrorSet>;

    /// Validates the current form and, if every field is valid, hands the
    /// inquiry to the notifier.
    ///
    /// Calls made while a submission is in flight return
    /// [`SubmitOutcome::AlreadySubmitting`] without doing anything.
    fn submit(&self) -> impl Future<Output = SubmitOutcome> + Send;

    /// Returns the current state of the form.
    fn snapshot(&self) -> FormSnapshot;

    /// Returns a receiver that observes every state transition of the form.
    fn subscribe(&self) -> watch::Receiver<FormSnapshot>;
}

/// An immutable view of the complete form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub form: InquiryForm,
    pub errors: ValidationErrorSet,
    pub submission: SubmissionState,
    pub acknowledgment: Option<Acknowledgment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether the last submission finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Submitting => SUBMITTING_LABEL,
            _ => SUBMIT_LABEL,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_submitting()
    }
}

/// A notification shown to the user once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgment {
    pub kind: AcknowledgmentKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AcknowledgmentKind {
    Positive,
    Negative,
}

impl Acknowledgment {
    pub fn sent() -> Self {
        Self {
            kind: AcknowledgmentKind::Positive,
            title: "Appointment Request Sent".into(),
            description: "Thank you! We'll contact you soon.".into(),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            kind: AcknowledgmentKind::Negative,
            title: "Error".into(),
            description: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field is invalid; nothing was sent.
    Invalid(ValidationErrorSet),
    /// Another submission is still in flight; nothing was sent.
    AlreadySubmitting,
    Sent,
    Failed(String),
}

#[cfg(feature = "mock")]
impl MockInquiryFormService {
    pub fn with_submit(mut self, outcome: SubmitOutcome) -> Self {
        self.expect_submit()
            .once()
            .return_once(move || Box::pin(std::future::ready(outcome)));
        self
    }
}
