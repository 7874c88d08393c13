use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuestionBank;
use quiz_core::model::{Question, QuizSettings};
use quiz_core::time::fixed_clock;
use services::{Clock, SessionFlowController, Subject, SubjectCatalog};

use crate::context::{UiApp, build_app_context};
use crate::views::FlowRoot;

struct TestApp {
    catalog: SubjectCatalog,
}

impl UiApp for TestApp {
    fn catalog(&self) -> SubjectCatalog {
        self.catalog.clone()
    }

    fn settings(&self) -> QuizSettings {
        QuizSettings::default()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn seed(&self) -> Option<u64> {
        Some(7)
    }

    fn user_name(&self) -> String {
        "Tester".to_string()
    }
}

/// How far the controller is driven before the first render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Subjects,
    Chooser,
    /// First question of Week 1, answered correctly.
    Quiz,
    /// Week 1 finished with one correct answer.
    Result,
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    stage: Stage,
}

impl PartialEq for HarnessProps {
    fn eq(&self, other: &Self) -> bool {
        self.stage == other.stage
    }
}

#[component]
fn FlowHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let stage = props.stage;
    use_context_provider(|| Signal::new(drive_to(ctx.build_controller(), stage)));
    rsx! { FlowRoot {} }
}

fn drive_to(mut flow: SessionFlowController, stage: Stage) -> SessionFlowController {
    if stage == Stage::Subjects {
        return flow;
    }
    flow.select_subject("ONE").expect("select subject");
    if stage == Stage::Chooser {
        return flow;
    }
    flow.select_assignment("Week 1").expect("select assignment");
    flow.click_option("right").expect("first answer recorded");
    if stage == Stage::Result {
        while flow.go_next() {}
    }
    flow
}

fn test_catalog() -> SubjectCatalog {
    let questions = (1..=12)
        .map(|i| Question::new(format!("Question {i}?"), ["right", "wrong"], "A"))
        .collect();
    SubjectCatalog::new(vec![Subject {
        id: "ONE".into(),
        title: "First Subject".into(),
        bank: QuestionBank::Flat(questions),
    }])
    .expect("catalog")
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(stage: Stage) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: test_catalog(),
    });
    let dom = VirtualDom::new_with_props(FlowHarness, HarnessProps { app, stage });
    let mut harness = ViewHarness { dom };
    harness.rebuild();
    harness
}
