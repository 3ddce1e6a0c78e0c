use std::{sync::Arc, time::Duration};

use atelier_core_inquiry_contracts::{
    Acknowledgment, FormSnapshot, InquiryFormService, SubmissionState, SubmitOutcome,
    GENERIC_FAILURE_REASON, TIMEOUT_FAILURE_REASON,
};
use atelier_models::{
    inquiry::{InquiryField, InquiryForm, ValidatedInquiry},
    validation::ValidationErrorSet,
};
use atelier_notify_contracts::InquiryNotifier;
use tokio::sync::watch;
use tracing::{debug, info, warn};

pub mod schema;

#[cfg(test)]
mod tests;

pub const CANCELLED_FAILURE_REASON: &str = "The request was cancelled.";

#[derive(Debug, Clone)]
pub struct InquiryFormServiceImpl<Notifier> {
    notifier: Notifier,
    config: InquiryFormServiceConfig,
    state: Arc<watch::Sender<FormSnapshot>>,
}

#[derive(Debug, Clone, Default)]
pub struct InquiryFormServiceConfig {
    /// Maximum time to wait for the notifier before the submission fails.
    pub submit_timeout: Option<Duration>,
}

impl<Notifier> InquiryFormServiceImpl<Notifier> {
    pub fn new(notifier: Notifier, config: InquiryFormServiceConfig) -> Self {
        Self {
            notifier,
            config,
            state: Arc::new(watch::Sender::new(FormSnapshot::default())),
        }
    }
}

impl<Notifier> InquiryFormService for InquiryFormServiceImpl<Notifier>
where
    Notifier: InquiryNotifier,
{
    fn update_field(&self, field: InquiryField, value: String) {
        self.state.send_modify(|snapshot| {
            snapshot.form.set(field, value);
            snapshot.errors.remove(field);
            if snapshot.submission.is_settled() {
                snapshot.submission = SubmissionState::Idle;
                snapshot.acknowledgment = None;
            }
        });
    }

    fn validate(&self, form: &InquiryForm) -> Result<ValidatedInquiry, ValidationErrorSet> {
        schema::validate(form)
    }

    async fn submit(&self) -> SubmitOutcome {
        let inquiry = match self.begin_submission() {
            Ok(inquiry) => inquiry,
            Err(outcome) => return outcome,
        };

        let mut in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        let result = self.deliver(inquiry).await;
        in_flight.settled = true;

        self.finish_submission(result)
    }

    fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.state.subscribe()
    }
}

impl<Notifier> InquiryFormServiceImpl<Notifier>
where
    Notifier: InquiryNotifier,
{
    /// Moves the form into [`SubmissionState::Submitting`] if it is valid and
    /// no other submission is in flight.
    fn begin_submission(&self) -> Result<ValidatedInquiry, SubmitOutcome> {
        let mut result = Err(SubmitOutcome::AlreadySubmitting);

        self.state.send_if_modified(|snapshot| {
            if snapshot.submission.is_submitting() {
                return false;
            }

            snapshot.submission = SubmissionState::Idle;
            snapshot.acknowledgment = None;

            match schema::validate(&snapshot.form) {
                Ok(inquiry) => {
                    snapshot.errors.clear();
                    snapshot.submission = SubmissionState::Submitting;
                    result = Ok(inquiry);
                }
                Err(errors) => {
                    debug!(
                        fields = ?errors.fields().collect::<Vec<_>>(),
                        "inquiry failed validation"
                    );
                    snapshot.errors = errors.clone();
                    result = Err(SubmitOutcome::Invalid(errors));
                }
            }

            true
        });

        if matches!(result, Err(SubmitOutcome::AlreadySubmitting)) {
            debug!("ignoring submit while another submission is in flight");
        }

        result
    }

    async fn deliver(&self, inquiry: ValidatedInquiry) -> Result<(), String> {
        let notify = self.notifier.notify(inquiry);

        let result = match self.config.submit_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, notify).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(?timeout, "inquiry delivery timed out");
                    return Err(TIMEOUT_FAILURE_REASON.into());
                }
            },
            None => notify.await,
        };

        result.map_err(|err| {
            warn!(error = %err, "failed to deliver inquiry");
            err.reason()
                .unwrap_or_else(|| GENERIC_FAILURE_REASON.into())
        })
    }

    fn finish_submission(&self, result: Result<(), String>) -> SubmitOutcome {
        self.state.send_modify(|snapshot| match &result {
            Ok(()) => {
                snapshot.form = InquiryForm::default();
                snapshot.errors.clear();
                snapshot.submission = SubmissionState::Succeeded;
                snapshot.acknowledgment = Some(Acknowledgment::sent());
            }
            Err(reason) => {
                snapshot.submission = SubmissionState::Failed(reason.clone());
                snapshot.acknowledgment = Some(Acknowledgment::failed(reason.clone()));
            }
        });

        match result {
            Ok(()) => {
                info!("inquiry delivered");
                SubmitOutcome::Sent
            }
            Err(reason) => SubmitOutcome::Failed(reason),
        }
    }
}

/// Fails a submission whose future is dropped before the notifier answered,
/// so the form does not stay stuck in [`SubmissionState::Submitting`].
struct InFlight<'a> {
    state: &'a watch::Sender<FormSnapshot>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        warn!("inquiry submission was cancelled");
        self.state.send_modify(|snapshot| {
            if snapshot.submission.is_submitting() {
                snapshot.submission = SubmissionState::Failed(CANCELLED_FAILURE_REASON.into());
                snapshot.acknowledgment = Some(Acknowledgment::failed(CANCELLED_FAILURE_REASON));
            }
        });
    }
}
