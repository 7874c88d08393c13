use services::{AnswerCard, OptionMark};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub label: String,
    pub mark: OptionMark,
    pub class: &'static str,
    pub marker: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub text: String,
    pub options: Vec<OptionRowVm>,
    pub show_submit: bool,
}

#[must_use]
pub fn map_question_card(card: &AnswerCard) -> QuestionCardVm {
    let answered = card.is_answered();
    let options = card
        .question()
        .options()
        .iter()
        .map(|option| {
            let mark = card.mark(option);
            let (class, marker) = match (mark, answered) {
                (OptionMark::Pending, _) => ("option option--pending", Some("●")),
                (OptionMark::Correct, _) => ("option option--correct", Some("✔️")),
                (OptionMark::Wrong, _) => ("option option--wrong", Some("❌")),
                (OptionMark::Plain, true) => ("option option--locked", None),
                (OptionMark::Plain, false) => ("option", None),
            };
            OptionRowVm {
                label: option.clone(),
                mark,
                class,
                marker,
            }
        })
        .collect();

    QuestionCardVm {
        text: card.question().text().to_string(),
        options,
        show_submit: card.can_submit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    #[test]
    fn answered_single_choice_marks_outcome() {
        let question = Question::new("Capital?", ["Paris", "Rome"], "A").process();
        let mut card = AnswerCard::new(question, None);
        card.click("Rome");

        let vm = map_question_card(&card);
        assert_eq!(vm.text, "Capital?");
        assert!(!vm.show_submit);
        assert_eq!(vm.options[0].mark, OptionMark::Correct);
        assert_eq!(vm.options[1].class, "option option--wrong");
        assert_eq!(vm.options[1].marker, Some("❌"));
    }

    #[test]
    fn pending_multi_choice_shows_submit() {
        let question = Question::new("Pick", ["x", "y", "z"], "A & B").process();
        let mut card = AnswerCard::new(question, None);
        card.click("y");

        let vm = map_question_card(&card);
        assert!(vm.show_submit);
        assert_eq!(vm.options[1].mark, OptionMark::Pending);
        assert_eq!(vm.options[0].class, "option");
    }
}
