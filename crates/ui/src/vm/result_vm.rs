use quiz_core::time::format_elapsed;
use services::ResultSummary;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub title: &'static str,
    pub greeting: String,
    pub subject_line: String,
    pub score_line: String,
    pub percentage_line: String,
    pub elapsed_line: Option<String>,
    pub show_continue: bool,
    pub secondary_label: &'static str,
}

#[must_use]
pub fn map_result(summary: &ResultSummary, user_name: &str) -> ResultVm {
    let name = user_name.trim();
    let greeting = if name.is_empty() {
        "Congratulations!".to_string()
    } else {
        format!("Congratulations, {name}!")
    };

    ResultVm {
        title: if summary.is_random {
            "Random Quiz Completed!"
        } else {
            "Assignment Completed!"
        },
        greeting,
        subject_line: format!("Subject: {} • {}", summary.subject, summary.assignment),
        score_line: format!("Your score: {} out of {}", summary.score, summary.total),
        percentage_line: format!("Percentage: {}%", summary.percentage),
        elapsed_line: summary
            .elapsed
            .map(|elapsed| format!("Time: {}", format_elapsed(elapsed))),
        show_continue: summary.can_continue,
        secondary_label: if summary.is_random {
            "Try Another Quiz"
        } else {
            "Choose another week"
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::{AssignmentKey, SubjectId};

    fn summary(is_random: bool, can_continue: bool) -> ResultSummary {
        ResultSummary {
            subject: SubjectId::new("PMM"),
            subject_title: "Project Management for Managers".into(),
            assignment: if is_random {
                AssignmentKey::random(30)
            } else {
                AssignmentKey::week(1)
            },
            score: 7,
            total: 10,
            percentage: 70,
            is_random,
            can_continue,
            elapsed: Some(Duration::seconds(65)),
        }
    }

    #[test]
    fn regular_result_offers_continue() {
        let vm = map_result(&summary(false, true), "Ana");
        assert_eq!(vm.title, "Assignment Completed!");
        assert_eq!(vm.greeting, "Congratulations, Ana!");
        assert_eq!(vm.subject_line, "Subject: PMM • Week 1");
        assert_eq!(vm.score_line, "Your score: 7 out of 10");
        assert_eq!(vm.percentage_line, "Percentage: 70%");
        assert_eq!(vm.elapsed_line.as_deref(), Some("Time: 1:05"));
        assert!(vm.show_continue);
        assert_eq!(vm.secondary_label, "Choose another week");
    }

    #[test]
    fn random_result_offers_try_another() {
        let vm = map_result(&summary(true, false), "");
        assert_eq!(vm.title, "Random Quiz Completed!");
        assert_eq!(vm.greeting, "Congratulations!");
        assert!(!vm.show_continue);
        assert_eq!(vm.secondary_label, "Try Another Quiz");
    }
}
