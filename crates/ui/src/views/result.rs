use dioxus::prelude::*;
use services::{ContinueOutcome, ResultSummary};

use super::use_flow;
use crate::vm::map_result;

#[component]
pub fn ResultView(summary: ResultSummary) -> Element {
    let mut flow = use_flow();
    let vm = map_result(&summary, flow.read().user_name());

    rsx! {
        div { class: "card result-card",
            h2 { class: "view-title", "{vm.title}" }
            p { class: "result-greeting", "{vm.greeting}" }
            p { class: "view-subtitle", "{vm.subject_line}" }
            p { class: "result-score", "{vm.score_line}" }
            p { class: "result-percentage", "{vm.percentage_line}" }
            if let Some(elapsed) = vm.elapsed_line.as_ref() {
                p { class: "view-subtitle", "{elapsed}" }
            }
            div { class: "result-actions",
                if vm.show_continue {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            if flow.write().continue_to_next() == ContinueOutcome::Ignored {
                                tracing::debug!("continue had no effect");
                            }
                        },
                        "Continue to next assignment"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| flow.write().choose_another_week(),
                    "{vm.secondary_label}"
                }
            }
        }
    }
}
