use super::test_harness::{Stage, setup_view_harness};

#[test]
fn subject_view_smoke_renders_name_and_subjects() {
    let harness = setup_view_harness(Stage::Subjects);
    let html = harness.render();
    assert!(html.contains("Quiz App"), "missing heading in {html}");
    assert!(html.contains("Tester"), "missing prefilled name in {html}");
    assert!(
        html.contains("ONE (First Subject)"),
        "missing subject button in {html}"
    );
    assert!(!html.contains("Change Subject"), "nav shown too early in {html}");
}

#[test]
fn chooser_view_smoke_renders_weeks_and_random() {
    let harness = setup_view_harness(Stage::Chooser);
    let html = harness.render();
    assert!(html.contains("ONE - Choose Assignment"), "missing title in {html}");
    assert!(html.contains("Week 2"), "missing week in {html}");
    assert!(html.contains("Random 50 Questions"), "missing random in {html}");
    assert!(html.contains("Back to subjects"), "missing back in {html}");
    assert!(html.contains("Change Subject"), "missing nav in {html}");
}

#[test]
fn quiz_view_smoke_renders_locked_question() {
    let harness = setup_view_harness(Stage::Quiz);
    let html = harness.render();
    assert!(html.contains("Welcome, Tester!"), "missing welcome in {html}");
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    assert!(html.contains("ONE • Week 1"), "missing nav label in {html}");
    assert!(html.contains("option--correct"), "missing mark in {html}");
    assert!(html.contains("Previous"), "missing previous in {html}");
    assert!(!html.contains("Submit Answer"), "single choice offers submit in {html}");
}

#[test]
fn result_view_smoke_renders_score_and_continue() {
    let harness = setup_view_harness(Stage::Result);
    let html = harness.render();
    assert!(html.contains("Assignment Completed!"), "missing title in {html}");
    assert!(
        html.contains("Your score: 1 out of 10"),
        "missing score in {html}"
    );
    assert!(html.contains("Percentage: 10%"), "missing percentage in {html}");
    assert!(html.contains("Time: 0:00"), "missing time in {html}");
    assert!(
        html.contains("Continue to next assignment"),
        "missing continue in {html}"
    );
    assert!(html.contains("Choose another week"), "missing secondary in {html}");
}
