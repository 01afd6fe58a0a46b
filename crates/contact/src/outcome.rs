use crate::{
    relay::{RelayError, RelayReply},
    status::Tone,
};

pub const SUCCESS_TITLE: &str = "Message Sent! ✨";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon!";
pub const REJECTED_TITLE: &str = "Oops! ❌";
pub const REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const TRANSPORT_TITLE: &str = "Error ❌";
pub const TRANSPORT_MESSAGE: &str = "Unable to send your message. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String },
    Rejected { message: String },
    TransportError { message: String },
}

impl SubmissionOutcome {
    pub fn transport_error() -> Self {
        Self::TransportError {
            message: TRANSPORT_MESSAGE.to_owned(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message }
            | Self::Rejected { message }
            | Self::TransportError { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Success { .. } => Tone::Positive,
            _ => Tone::Negative,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Rejected { .. } => "rejected",
            Self::TransportError { .. } => "transport_error",
        }
    }
}

impl From<RelayReply> for SubmissionOutcome {
    fn from(reply: RelayReply) -> Self {
        let message = reply.message.filter(|m| !m.is_empty());

        if reply.status == 200 {
            return Self::Success {
                message: message.unwrap_or_else(|| SUCCESS_DESCRIPTION.to_owned()),
            };
        }

        Self::Rejected {
            message: message.unwrap_or_else(|| REJECTED_MESSAGE.to_owned()),
        }
    }
}

impl From<Result<RelayReply, RelayError>> for SubmissionOutcome {
    fn from(result: Result<RelayReply, RelayError>) -> Self {
        match result {
            Ok(reply) => reply.into(),
            Err(_) => Self::transport_error(),
        }
    }
}
