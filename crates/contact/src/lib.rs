mod desk;
mod error;
mod form;
mod outcome;
mod presenter;
mod relay;
mod status;
mod submission;

pub use desk::*;
pub use error::*;
pub use form::*;
pub use outcome::*;
pub use presenter::*;
pub use relay::*;
pub use status::*;
pub use submission::*;
