use quiz_core::model::ProcessedQuestion;
use quiz_core::{grade_multi, grade_single};

use super::selection::{Selection, Submission};

/// How an option should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    /// Picked but not yet submitted.
    Pending,
    Correct,
    /// Picked and not among the correct options.
    Wrong,
}

/// Answering state for the question on screen.
///
/// Single-choice questions lock on the first click. Multi-choice questions
/// collect toggles until an explicit submit and lock afterwards. A card
/// rebuilt from a recorded answer starts locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCard {
    question: ProcessedQuestion,
    selected: Vec<String>,
    answered: bool,
}

impl AnswerCard {
    #[must_use]
    pub fn new(question: ProcessedQuestion, recorded: Option<&Selection>) -> Self {
        let (selected, answered) = match (question.is_multi(), recorded) {
            (true, Some(Selection::Multi(chosen))) => (chosen.clone(), !chosen.is_empty()),
            (false, Some(Selection::Single(chosen))) => (vec![chosen.clone()], true),
            _ => (Vec::new(), false),
        };
        Self {
            question,
            selected,
            answered,
        }
    }

    #[must_use]
    pub fn question(&self) -> &ProcessedQuestion {
        &self.question
    }

    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.question.is_multi()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// The explicit submit control is offered for unanswered multi-choice only.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_multi() && !self.answered
    }

    /// Handle a click on `option`.
    ///
    /// Returns the submission for single-choice questions; multi-choice clicks
    /// only toggle the pending selection. Locked cards ignore clicks.
    pub fn click(&mut self, option: &str) -> Option<Submission> {
        if self.answered {
            return None;
        }
        if self.is_multi() {
            match self.selected.iter().position(|s| s == option) {
                Some(idx) => {
                    self.selected.remove(idx);
                }
                None => self.selected.push(option.to_string()),
            }
            return None;
        }

        self.selected = vec![option.to_string()];
        self.answered = true;
        Some(Submission {
            selection: Selection::Single(option.to_string()),
            is_correct: grade_single(&self.question, option),
        })
    }

    /// Submit the pending multi-choice selection. No-op for single-choice or
    /// already answered cards.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        self.answered = true;
        Some(Submission {
            is_correct: grade_multi(&self.question, self.selected.as_slice()),
            selection: Selection::Multi(self.selected.clone()),
        })
    }

    #[must_use]
    pub fn mark(&self, option: &str) -> OptionMark {
        let picked = self.selected.iter().any(|s| s == option);
        if !self.answered {
            return if picked {
                OptionMark::Pending
            } else {
                OptionMark::Plain
            };
        }
        if self.question.correct_options().contains(option) {
            OptionMark::Correct
        } else if picked {
            OptionMark::Wrong
        } else {
            OptionMark::Plain
        }
    }
}
