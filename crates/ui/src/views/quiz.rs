use dioxus::prelude::*;

use super::use_flow;
use crate::vm::{QuestionCardVm, QuizHeaderVm, map_question_card, map_quiz_header};

#[component]
pub fn QuizView() -> Element {
    let mut flow = use_flow();

    let (header, card) = {
        let flow = flow.read();
        let state = flow.state();
        let subject = state
            .selected_subject()
            .map(ToString::to_string)
            .unwrap_or_default();
        let assignment = state
            .selected_assignment()
            .map(ToString::to_string)
            .unwrap_or_default();
        let header = flow
            .session()
            .map(|session| map_quiz_header(flow.user_name(), &subject, &assignment, session.progress()));
        (header, flow.answer_card().map(map_question_card))
    };

    let Some(header) = header else {
        return rsx! {
            p { class: "view-empty", "No quiz running." }
        };
    };

    rsx! {
        div { class: "quiz",
            QuizHeader { header: header.clone() }
            match card {
                Some(card) => rsx! {
                    QuestionCard { card }
                },
                None => rsx! {
                    div { class: "card",
                        p { "No question available." }
                    }
                },
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !header.can_go_previous,
                    onclick: move |_| {
                        flow.write().go_previous();
                    },
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        flow.write().go_next();
                    },
                    "{header.next_label}"
                }
            }
        }
    }
}

#[component]
fn QuizHeader(header: QuizHeaderVm) -> Element {
    rsx! {
        header { class: "view-header quiz-header",
            if let Some(welcome) = header.welcome.as_ref() {
                h2 { class: "view-title", "{welcome}" }
            }
            p { class: "view-subtitle", "{header.subject_line}" }
            p { class: "view-subtitle", "{header.assignment_line}" }
            p { class: "view-subtitle", "{header.progress_line}" }
        }
    }
}

#[component]
fn QuestionCard(card: QuestionCardVm) -> Element {
    let mut flow = use_flow();

    let options = card.options.iter().map(|option| {
        let mut flow = flow;
        let label = option.label.clone();
        rsx! {
            button {
                key: "{option.label}",
                class: "{option.class}",
                r#type: "button",
                onclick: move |_| {
                    flow.write().click_option(&label);
                },
                span { class: "option-label", "{option.label}" }
                if let Some(marker) = option.marker {
                    span { class: "option-marker", "{marker}" }
                }
            }
        }
    });

    rsx! {
        div { class: "card question-card",
            h3 { class: "question-text", "{card.text}" }
            div { class: "option-list",
                {options}
            }
            if card.show_submit {
                button {
                    class: "btn btn-primary question-submit",
                    r#type: "button",
                    onclick: move |_| {
                        flow.write().submit_selection();
                    },
                    "Submit Answer"
                }
            }
        }
    }
}
