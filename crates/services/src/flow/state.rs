use chrono::{DateTime, Duration, Utc};

use quiz_core::model::{AssignmentEntry, AssignmentKey, ProcessedQuestion, SubjectId};
use quiz_core::AssignmentBank;

use crate::sessions::{AnswerCard, QuizSession};

/// The subject currently chosen, with its assignments built.
#[derive(Debug, Clone)]
pub struct ActiveSubject {
    pub id: SubjectId,
    pub title: String,
    pub bank: AssignmentBank,
    pub entries: Vec<AssignmentEntry>,
}

impl ActiveSubject {
    /// The regular entry following `ordinal`, if any. Random entries are
    /// never chained.
    #[must_use]
    pub fn next_regular(&self, ordinal: usize) -> Option<&AssignmentEntry> {
        self.entries
            .iter()
            .find(|entry| entry.ordinal() == Some(ordinal + 1))
    }
}

/// A running assignment: the session plus the answering widget for the
/// question on screen.
#[derive(Debug)]
pub struct ActiveQuiz {
    pub entry: AssignmentEntry,
    pub session: QuizSession,
    pub card: Option<AnswerCard>,
}

impl ActiveQuiz {
    #[must_use]
    pub fn new(
        entry: AssignmentEntry,
        questions: Vec<ProcessedQuestion>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let session = QuizSession::new(questions, started_at);
        let card = session.answer_card();
        Self {
            entry,
            session,
            card,
        }
    }

    /// Rebuild the widget for the current position from the recorded answer.
    pub fn refresh_card(&mut self) {
        self.card = self.session.answer_card();
    }
}

/// Top-level navigation state.
///
/// No subject means the subject screen; a subject without a quiz means the
/// assignment chooser; a completed quiz means the result screen.
#[derive(Debug, Default)]
pub struct FlowState {
    pub(crate) user_name: String,
    pub(crate) subject: Option<ActiveSubject>,
    pub(crate) quiz: Option<ActiveQuiz>,
}

impl FlowState {
    #[must_use]
    pub fn selected_subject(&self) -> Option<&SubjectId> {
        self.subject.as_ref().map(|s| &s.id)
    }

    #[must_use]
    pub fn selected_assignment(&self) -> Option<&AssignmentKey> {
        self.quiz.as_ref().map(|q| q.entry.key())
    }

    /// Position of the running assignment among the regular entries; `None`
    /// in random mode or when no quiz runs.
    #[must_use]
    pub fn assignment_ordinal(&self) -> Option<usize> {
        self.quiz.as_ref().and_then(|q| q.entry.ordinal())
    }

    #[must_use]
    pub fn is_choosing_assignment(&self) -> bool {
        self.subject.is_some() && self.quiz.is_none()
    }

    #[must_use]
    pub fn view(&self) -> FlowView {
        match (&self.subject, &self.quiz) {
            (None, _) => FlowView::SubjectSelect,
            (Some(_), None) => FlowView::AssignmentSelect,
            (Some(subject), Some(quiz)) if quiz.session.is_complete() => {
                FlowView::Result(ResultSummary::new(subject, quiz))
            }
            (Some(_), Some(_)) => FlowView::Quiz,
        }
    }

    /// Drop the running quiz; the subject stays.
    pub(crate) fn reset_session(&mut self) {
        self.quiz = None;
    }

    /// Drop the subject and anything built from it; the user name stays.
    pub(crate) fn reset_subject(&mut self) {
        *self = Self {
            user_name: std::mem::take(&mut self.user_name),
            ..Self::default()
        };
    }
}

/// Which screen the rendering surface should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowView {
    SubjectSelect,
    AssignmentSelect,
    Quiz,
    Result(ResultSummary),
}

/// Everything the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub subject: SubjectId,
    pub subject_title: String,
    pub assignment: AssignmentKey,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub is_random: bool,
    /// A following regular assignment exists.
    pub can_continue: bool,
    pub elapsed: Option<Duration>,
}

impl ResultSummary {
    fn new(subject: &ActiveSubject, quiz: &ActiveQuiz) -> Self {
        let can_continue = quiz
            .entry
            .ordinal()
            .is_some_and(|ordinal| subject.next_regular(ordinal).is_some());
        Self {
            subject: subject.id.clone(),
            subject_title: subject.title.clone(),
            assignment: quiz.entry.key().clone(),
            score: quiz.session.score(),
            total: quiz.session.total(),
            percentage: quiz.session.percentage(),
            is_random: quiz.entry.is_random(),
            can_continue,
            elapsed: quiz.session.elapsed(),
        }
    }
}

/// What "continue" did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContinueOutcome {
    Started(AssignmentKey),
    ReturnedToChooser,
    /// No completed quiz to continue from.
    Ignored,
}
