use dioxus::prelude::*;

use super::use_flow;
use crate::vm::map_subject_choices;

#[component]
pub fn SubjectSelectView() -> Element {
    let mut flow = use_flow();
    let error = use_signal(|| None::<String>);

    let (user_name, choices) = {
        let flow = flow.read();
        (
            flow.user_name().to_string(),
            map_subject_choices(flow.subjects()),
        )
    };

    let buttons = choices.into_iter().map(|choice| {
        let mut flow = flow;
        let mut error = error;
        let id = choice.id.clone();
        rsx! {
            button {
                key: "{choice.id}",
                class: "btn btn-primary subject-button",
                r#type: "button",
                onclick: move |_| {
                    if let Err(err) = flow.write().select_subject(&id) {
                        tracing::warn!(error = %err, "subject selection failed");
                        error.set(Some(err.to_string()));
                    }
                },
                "{choice.label}"
            }
        }
    });

    rsx! {
        div { class: "card subject-card",
            h1 { class: "view-title", "Quiz App" }
            input {
                class: "name-input",
                r#type: "text",
                placeholder: "Enter your name",
                value: "{user_name}",
                oninput: move |evt| flow.write().set_user_name(evt.value()),
            }
            div { class: "subject-list",
                {buttons}
            }
            if let Some(message) = error() {
                p { class: "view-error", "{message}" }
            }
        }
    }
}
