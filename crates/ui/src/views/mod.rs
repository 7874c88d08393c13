mod assignment_select;
mod flow;
mod quiz;
mod result;
mod subject_select;
mod top_nav;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

use dioxus::prelude::*;
use services::SessionFlowController;

pub use assignment_select::AssignmentSelectView;
pub use flow::FlowRoot;
pub use quiz::QuizView;
pub use result::ResultView;
pub use subject_select::SubjectSelectView;
pub use top_nav::TopNav;

/// The flow controller shared by every screen, provided by [`crate::App`].
#[must_use]
pub fn use_flow() -> Signal<SessionFlowController> {
    use_context::<Signal<SessionFlowController>>()
}
