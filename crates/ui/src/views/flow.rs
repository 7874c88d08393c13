use dioxus::prelude::*;
use services::FlowView;

use super::{AssignmentSelectView, QuizView, ResultView, SubjectSelectView, TopNav, use_flow};

/// Picks the screen for the current flow state.
#[component]
pub fn FlowRoot() -> Element {
    let flow = use_flow();
    let view = flow.read().view();

    rsx! {
        div { class: "page flow-page",
            match view {
                FlowView::SubjectSelect => rsx! {
                    SubjectSelectView {}
                },
                FlowView::AssignmentSelect => rsx! {
                    TopNav {}
                    AssignmentSelectView {}
                },
                FlowView::Quiz => rsx! {
                    TopNav {}
                    QuizView {}
                },
                FlowView::Result(summary) => rsx! {
                    TopNav {}
                    ResultView { summary }
                },
            }
        }
    }
}
