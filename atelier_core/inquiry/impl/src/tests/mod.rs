use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use atelier_core_inquiry_contracts::InquiryFormService;
use atelier_models::inquiry::{InquiryField, InquiryForm, ValidatedInquiry};
use atelier_notify_contracts::{InquiryNotifier, MockInquiryNotifier, NotifierError};
use tokio::sync::Notify;

use crate::{InquiryFormServiceConfig, InquiryFormServiceImpl};

mod validate;

type Sut = InquiryFormServiceImpl<MockInquiryNotifier>;

fn make_sut<Notifier>(notifier: Notifier) -> InquiryFormServiceImpl<Notifier> {
    InquiryFormServiceImpl::new(notifier, InquiryFormServiceConfig::default())
}

fn make_sut_with_timeout<Notifier>(
    notifier: Notifier,
    timeout: Duration,
) -> InquiryFormServiceImpl<Notifier> {
    InquiryFormServiceImpl::new(
        notifier,
        InquiryFormServiceConfig {
            submit_timeout: Some(timeout),
        },
    )
}

/// Enters every value of `form` through [`InquiryFormService::update_field`].
fn fill(sut: &impl InquiryFormService, form: &InquiryForm) {
    for field in InquiryField::ALL {
        sut.update_field(field, form.get(field).into());
    }
}

/// A notifier that holds every delivery until [`GatedNotifier::release`] is
/// called.
#[derive(Debug, Clone, Default)]
struct GatedNotifier {
    calls: Arc<AtomicUsize>,
    gate: Arc<Notify>,
}

impl GatedNotifier {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn release(&self) {
        self.gate.notify_one();
    }
}

impl InquiryNotifier for GatedNotifier {
    async fn notify(&self, _inquiry: ValidatedInquiry) -> Result<(), NotifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(())
    }
}

/// A notifier that answers with a predefined sequence of results.
#[derive(Debug, Default)]
struct ScriptedNotifier {
    results: Mutex<VecDeque<Result<(), String>>>,
    received: Mutex<Vec<ValidatedInquiry>>,
}

impl ScriptedNotifier {
    fn new(results: impl IntoIterator<Item = Result<(), String>>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
            received: Default::default(),
        }
    }

    fn received(&self) -> Vec<ValidatedInquiry> {
        self.received.lock().unwrap().clone()
    }
}

impl InquiryNotifier for ScriptedNotifier {
    async fn notify(&self, inquiry: ValidatedInquiry) -> Result<(), NotifierError> {
        self.received.lock().unwrap().push(inquiry);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected notification")
            .map_err(NotifierError::Rejected)
    }
}
