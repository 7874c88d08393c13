use chrono::{DateTime, Duration, Utc};
use std::fmt;

use quiz_core::model::ProcessedQuestion;
use quiz_core::percentage;

use super::card::AnswerCard;
use super::progress::SessionProgress;
use super::selection::Selection;
use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough of an assignment.
///
/// The position runs over `0..=total`; reaching `total` completes the session.
/// Answers and correctness are kept per position so revisiting a question
/// restores what was recorded, and the score is always recounted from the
/// correctness entries.
pub struct QuizSession {
    questions: Vec<ProcessedQuestion>,
    current: usize,
    answers: Vec<Option<Selection>>,
    correctness: Vec<Option<bool>>,
    score: usize,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a fresh session with every answer unset.
    ///
    /// A session without questions is completed from the start.
    #[must_use]
    pub fn new(questions: Vec<ProcessedQuestion>, started_at: DateTime<Utc>) -> Self {
        let total = questions.len();
        Self {
            questions,
            current: 0,
            answers: vec![None; total],
            correctness: vec![None; total],
            score: 0,
            started_at,
            completed_at: (total == 0).then_some(started_at),
        }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.current >= self.questions.len() {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status() == SessionStatus::Completed
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&ProcessedQuestion> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn questions(&self) -> &[ProcessedQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total())
    }

    #[must_use]
    pub fn answer_at(&self, index: usize) -> Option<&Selection> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn correctness_at(&self, index: usize) -> Option<bool> {
        self.correctness.get(index).copied().flatten()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.completed_at.map(|done| done - self.started_at)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.current,
            total: self.total(),
            answered: self.answers.iter().filter(|a| a.is_some()).count(),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Widget state for the current question, restored from any recorded answer.
    #[must_use]
    pub fn answer_card(&self) -> Option<AnswerCard> {
        let question = self.current_question()?;
        Some(AnswerCard::new(question.clone(), self.answer_at(self.current)))
    }

    /// Record the answer for the current question and recount the score.
    ///
    /// A second submission for the same position replaces the first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session has completed.
    pub fn submit_answer(
        &mut self,
        selection: Selection,
        is_correct: bool,
    ) -> Result<usize, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        self.answers[self.current] = Some(selection);
        self.correctness[self.current] = Some(is_correct);
        self.score = self
            .correctness
            .iter()
            .filter(|c| matches!(c, Some(true)))
            .count();
        Ok(self.score)
    }

    /// Move forward one position; moving past the last question completes the
    /// session. Unanswered questions are not skipped. No-op once completed.
    pub fn go_next(&mut self, now: DateTime<Utc>) -> SessionStatus {
        if self.is_complete() {
            return SessionStatus::Completed;
        }
        self.current += 1;
        if self.is_complete() && self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
        self.status()
    }

    /// Move back one position. Returns `false` at the first question.
    pub fn go_previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
