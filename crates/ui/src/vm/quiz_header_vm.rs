use services::SessionProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeaderVm {
    pub welcome: Option<String>,
    pub subject_line: String,
    pub assignment_line: String,
    pub progress_line: String,
    pub can_go_previous: bool,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_quiz_header(
    user_name: &str,
    subject: &str,
    assignment: &str,
    progress: SessionProgress,
) -> QuizHeaderVm {
    let name = user_name.trim();
    QuizHeaderVm {
        welcome: (!name.is_empty()).then(|| format!("Welcome, {name}!")),
        subject_line: format!("Subject: {subject}"),
        assignment_line: format!("Assignment: {assignment}"),
        progress_line: format!(
            "Question {} of {}",
            progress.display_number(),
            progress.total
        ),
        can_go_previous: progress.position > 0,
        next_label: if progress.on_last_question() {
            "Submit"
        } else {
            "Next"
        },
    }
}

/// Label for the top navigation bar: `PMM` or `PMM • Week 1`.
#[must_use]
pub fn map_nav_label(subject: &str, assignment: Option<&str>) -> String {
    match assignment {
        Some(assignment) => format!("{subject} • {assignment}"),
        None => subject.to_string(),
    }
}
