#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod flow;
pub mod sessions;

pub use quiz_core::Clock;

pub use bank::{Subject, SubjectCatalog};
pub use error::{BankError, FlowError, SessionError};
pub use flow::{ContinueOutcome, FlowView, ResultSummary, SessionFlowController};
pub use sessions::{
    AnswerCard, OptionMark, QuizSession, Selection, SessionProgress, SessionStatus, Submission,
};
