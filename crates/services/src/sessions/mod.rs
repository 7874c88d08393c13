mod card;
mod progress;
mod selection;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use card::{AnswerCard, OptionMark};
pub use progress::SessionProgress;
pub use selection::{Selection, Submission};
pub use service::{QuizSession, SessionStatus};
