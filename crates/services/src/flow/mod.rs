mod controller;
mod state;

pub use crate::error::FlowError;
pub use controller::SessionFlowController;
pub use state::{ActiveQuiz, ActiveSubject, ContinueOutcome, FlowState, FlowView, ResultSummary};
