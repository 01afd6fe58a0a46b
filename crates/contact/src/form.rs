use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use tokio::sync::Mutex;

use crate::{
    Error, Result,
    outcome::SubmissionOutcome,
    presenter::{FeedbackPresenter, Toast},
    relay::Relay,
    status::StatusBoard,
    submission::{ContactSubmission, Field},
};

#[derive(Clone, Debug)]
pub struct FormOptions {
    pub access_key: String,
    pub retain_on_failure: bool,
    pub status_clear_after: Duration,
}

impl FormOptions {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            retain_on_failure: false,
            status_clear_after: StatusBoard::DEFAULT_CLEAR_AFTER,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub outcome: SubmissionOutcome,
    pub toast: Toast,
}

/// The contact form of one visit: field values, the in-progress flag and the
/// inline status area.
#[derive(Debug)]
pub struct ContactForm {
    fields: Mutex<ContactSubmission>,
    submitting: AtomicBool,
    presenter: FeedbackPresenter,
    options: FormOptions,
}

impl ContactForm {
    pub fn new(options: FormOptions) -> Self {
        let status = StatusBoard::new(options.status_clear_after);

        Self {
            fields: Mutex::default(),
            submitting: AtomicBool::new(false),
            presenter: FeedbackPresenter::new(status),
            options,
        }
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        self.fields.lock().await.set(field, value);
    }

    pub async fn fill(&self, submission: ContactSubmission) {
        *self.fields.lock().await = submission;
    }

    pub async fn snapshot(&self) -> ContactSubmission {
        self.fields.lock().await.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> Phase {
        if self.is_submitting() {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    pub fn status(&self) -> &StatusBoard {
        self.presenter.status()
    }

    /// Relays the current field values, presents the outcome and resets the
    /// fields.
    ///
    /// Refused with [`Error::SubmissionInProgress`] while another submit of the
    /// same form is in flight. Field validation belongs to the input layer
    /// (see [`ContactSubmission::check`]) and is not repeated here.
    pub async fn submit<R: Relay + ?Sized>(&self, relay: &R) -> Result<Feedback> {
        let in_progress = InProgress::claim(&self.submitting).ok_or(Error::SubmissionInProgress)?;

        self.settle(in_progress, relay).await
    }

    /// Same as [`ContactForm::submit`], with `submission` replacing the field
    /// values only once the in-progress flag is held.
    pub async fn submit_with<R: Relay + ?Sized>(
        &self,
        submission: ContactSubmission,
        relay: &R,
    ) -> Result<Feedback> {
        let in_progress = InProgress::claim(&self.submitting).ok_or(Error::SubmissionInProgress)?;
        *self.fields.lock().await = submission;

        self.settle(in_progress, relay).await
    }

    async fn settle<R: Relay + ?Sized>(
        &self,
        in_progress: InProgress<'_>,
        relay: &R,
    ) -> Result<Feedback> {
        let payload = self.fields.lock().await.freeze(&self.options.access_key);

        let outcome = SubmissionOutcome::from(
            relay
                .send(&payload)
                .await
                .inspect_err(|err| tracing::warn!(err = %err, "contact relay failed")),
        );
        tracing::info!(outcome = outcome.kind(), "contact message settled");
        drop(in_progress);

        let toast = self.presenter.present(&outcome).await;

        if outcome.is_success() || !self.options.retain_on_failure {
            self.fields.lock().await.clear();
        }

        Ok(Feedback { outcome, toast })
    }
}

/// Holds the in-progress flag for the lifetime of one relay call and releases
/// it on drop, whichever way the call ends.
struct InProgress<'a>(&'a AtomicBool);

impl<'a> InProgress<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
