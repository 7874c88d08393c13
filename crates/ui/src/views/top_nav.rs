use dioxus::prelude::*;

use super::use_flow;
use crate::vm::map_nav_label;

#[component]
pub fn TopNav() -> Element {
    let mut flow = use_flow();

    let label = {
        let flow = flow.read();
        let state = flow.state();
        let subject = state
            .selected_subject()
            .map(ToString::to_string)
            .unwrap_or_default();
        let assignment = state.selected_assignment().map(ToString::to_string);
        map_nav_label(&subject, assignment.as_deref())
    };

    rsx! {
        nav { class: "top-nav",
            button {
                class: "btn btn-small",
                r#type: "button",
                onclick: move |_| flow.write().change_subject(),
                "Change Subject"
            }
            button {
                class: "btn btn-small",
                r#type: "button",
                onclick: move |_| flow.write().choose_another_week(),
                "Choose Week"
            }
            span { class: "top-nav-divider", "|" }
            span { class: "top-nav-label", "{label}" }
        }
    }
}
