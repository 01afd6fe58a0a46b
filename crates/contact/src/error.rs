#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("a message is already being sent")]
    SubmissionInProgress,
}

pub type Result<T> = std::result::Result<T, Error>;
