use crate::{
    outcome::{
        REJECTED_TITLE, SUCCESS_DESCRIPTION, SUCCESS_TITLE, SubmissionOutcome, TRANSPORT_TITLE,
    },
    status::{StatusBoard, StatusMessage, Tone},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Toast {
    pub fn is_positive(&self) -> bool {
        self.tone == Tone::Positive
    }
}

impl From<&SubmissionOutcome> for Toast {
    fn from(outcome: &SubmissionOutcome) -> Self {
        let (title, description) = match outcome {
            SubmissionOutcome::Success { .. } => (SUCCESS_TITLE, SUCCESS_DESCRIPTION),
            SubmissionOutcome::Rejected { message } => (REJECTED_TITLE, message.as_str()),
            SubmissionOutcome::TransportError { message } => (TRANSPORT_TITLE, message.as_str()),
        };

        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            tone: outcome.tone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackPresenter {
    status: StatusBoard,
}

impl FeedbackPresenter {
    pub fn new(status: StatusBoard) -> Self {
        Self { status }
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    /// Echoes the outcome into the inline status area and returns the toast to
    /// surface.
    pub async fn present(&self, outcome: &SubmissionOutcome) -> Toast {
        self.status
            .show(StatusMessage {
                text: outcome.message().to_owned(),
                tone: outcome.tone(),
            })
            .await;

        Toast::from(outcome)
    }
}
