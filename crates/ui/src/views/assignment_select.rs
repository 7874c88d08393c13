use dioxus::prelude::*;
use services::SessionFlowController;

use super::use_flow;
use crate::vm::{AssignmentChoiceVm, map_assignment_chooser};

#[component]
pub fn AssignmentSelectView() -> Element {
    let mut flow = use_flow();

    let vm = {
        let flow = flow.read();
        let subject = flow
            .state()
            .selected_subject()
            .map(ToString::to_string)
            .unwrap_or_default();
        map_assignment_chooser(&subject, flow.assignment_entries())
    };

    rsx! {
        div { class: "card chooser-card",
            h2 { class: "view-title", "{vm.title}" }
            div { class: "chooser-grid",
                {choice_buttons(flow, vm.regular, "btn chooser-week")}
            }
            div { class: "chooser-random",
                {choice_buttons(flow, vm.random, "btn chooser-random-button")}
            }
            div { class: "chooser-footer",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| flow.write().back_to_subjects(),
                    "Back to subjects"
                }
            }
        }
    }
}

fn choice_buttons(
    flow: Signal<SessionFlowController>,
    choices: Vec<AssignmentChoiceVm>,
    class: &'static str,
) -> impl Iterator<Item = Element> {
    choices.into_iter().map(move |choice| {
        let mut flow = flow;
        let key = choice.key.clone();
        rsx! {
            button {
                key: "{choice.key}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = flow.write().select_assignment(&key) {
                        tracing::warn!(error = %err, "assignment selection failed");
                    }
                },
                "{choice.label}"
            }
        }
    })
}
