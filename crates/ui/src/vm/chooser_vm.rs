use quiz_core::model::AssignmentEntry;
use services::Subject;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectChoiceVm {
    pub id: String,
    pub label: String,
}

/// Buttons for the subject screen: `PMM (Project Management for Managers)`.
#[must_use]
pub fn map_subject_choices(subjects: &[Subject]) -> Vec<SubjectChoiceVm> {
    subjects
        .iter()
        .map(|subject| {
            let id = subject.id.as_str();
            let label = if subject.title == id {
                id.to_string()
            } else {
                format!("{id} ({})", subject.title)
            };
            SubjectChoiceVm {
                id: id.to_string(),
                label,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentChoiceVm {
    pub key: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentChooserVm {
    pub title: String,
    /// Bank assignments, shown as a grid.
    pub regular: Vec<AssignmentChoiceVm>,
    /// Random samples, shown as full-width buttons below the grid.
    pub random: Vec<AssignmentChoiceVm>,
}

#[must_use]
pub fn map_assignment_chooser(subject: &str, entries: &[AssignmentEntry]) -> AssignmentChooserVm {
    let (random, regular): (Vec<_>, Vec<_>) = entries.iter().partition(|e| e.is_random());
    let to_choice = |entry: &AssignmentEntry| AssignmentChoiceVm {
        key: entry.key().as_str().to_string(),
        label: entry.key().to_string(),
    };

    AssignmentChooserVm {
        title: format!("{subject} - Choose Assignment"),
        regular: regular.into_iter().map(to_choice).collect(),
        random: random.into_iter().map(to_choice).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::QuestionBank;
    use quiz_core::model::AssignmentKey;

    #[test]
    fn random_entries_are_split_out() {
        let entries = vec![
            AssignmentEntry::Regular {
                key: AssignmentKey::week(1),
                ordinal: 0,
            },
            AssignmentEntry::Random {
                key: AssignmentKey::random(30),
                count: 30,
            },
        ];
        let vm = map_assignment_chooser("PMM", &entries);
        assert_eq!(vm.title, "PMM - Choose Assignment");
        assert_eq!(vm.regular.len(), 1);
        assert_eq!(vm.random[0].label, "Random 30 Questions");
    }

    #[test]
    fn subject_label_skips_title_equal_to_id() {
        let subjects = vec![
            Subject {
                id: "PMM".into(),
                title: "Project Management for Managers".into(),
                bank: QuestionBank::Flat(Vec::new()),
            },
            Subject {
                id: "notes".into(),
                title: "notes".into(),
                bank: QuestionBank::Flat(Vec::new()),
            },
        ];
        let choices = map_subject_choices(&subjects);
        assert_eq!(choices[0].label, "PMM (Project Management for Managers)");
        assert_eq!(choices[1].label, "notes");
    }
}
