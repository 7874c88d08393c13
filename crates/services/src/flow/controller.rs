use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{AssignmentEntry, ProcessedQuestion, QuizSettings};
use quiz_core::{Clock, attach_correct_options, build_assignments, sample_random};

use super::state::{ActiveQuiz, ActiveSubject, ContinueOutcome, FlowState, FlowView, ResultSummary};
use crate::bank::{Subject, SubjectCatalog};
use crate::error::FlowError;
use crate::sessions::{AnswerCard, QuizSession, Selection, Submission};

/// Drives the whole quiz flow: subject → assignment chooser → quiz → result.
///
/// Every user action maps to one method. Actions that make no sense in the
/// current state are ignored and reported through the return value.
pub struct SessionFlowController {
    catalog: SubjectCatalog,
    settings: QuizSettings,
    clock: Clock,
    rng: StdRng,
    state: FlowState,
}

impl SessionFlowController {
    #[must_use]
    pub fn new(catalog: SubjectCatalog, settings: QuizSettings, clock: Clock) -> Self {
        Self {
            catalog,
            settings,
            clock,
            rng: StdRng::from_os_rng(),
            state: FlowState::default(),
        }
    }

    /// Use a seeded generator so random samples repeat across runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.state.user_name = name.into();
        self
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn view(&self) -> FlowView {
        self.state.view()
    }

    #[must_use]
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        self.catalog.subjects()
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.state.user_name
    }

    #[must_use]
    pub fn subject(&self) -> Option<&ActiveSubject> {
        self.state.subject.as_ref()
    }

    /// Chooser entries for the selected subject; empty without one.
    #[must_use]
    pub fn assignment_entries(&self) -> &[AssignmentEntry] {
        self.state
            .subject
            .as_ref()
            .map(|s| s.entries.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_entry(&self) -> Option<&AssignmentEntry> {
        self.state.quiz.as_ref().map(|q| &q.entry)
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.state.quiz.as_ref().map(|q| &q.session)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&ProcessedQuestion> {
        self.session().and_then(QuizSession::current_question)
    }

    #[must_use]
    pub fn answer_card(&self) -> Option<&AnswerCard> {
        self.state.quiz.as_ref().and_then(|q| q.card.as_ref())
    }

    /// The recorded answer for the question on screen.
    #[must_use]
    pub fn persisted_answer(&self) -> Option<&Selection> {
        let session = self.session()?;
        session.answer_at(session.current_index())
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.session().map_or(0, QuizSession::score)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session().map_or(0, QuizSession::total)
    }

    #[must_use]
    pub fn result(&self) -> Option<ResultSummary> {
        match self.view() {
            FlowView::Result(summary) => Some(summary),
            _ => None,
        }
    }

    //
    // ─── ACTIONS ───────────────────────────────────────────────────────────────
    //

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.state.user_name = name.into();
    }

    /// Build the subject's assignments and open the chooser, discarding any
    /// running quiz.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::UnknownSubject` if the catalog has no such subject;
    /// the flow is left unchanged.
    pub fn select_subject(&mut self, id: &str) -> Result<(), FlowError> {
        let subject = self
            .catalog
            .get(id)
            .ok_or_else(|| FlowError::UnknownSubject(id.to_string()))?;

        let bank = build_assignments(subject.bank.clone(), &self.settings);
        let entries = bank.entries(&self.settings);
        tracing::info!(
            subject = %subject.id,
            assignments = bank.len(),
            "subject selected"
        );

        let active = ActiveSubject {
            id: subject.id.clone(),
            title: subject.title.clone(),
            bank,
            entries,
        };
        self.state.reset_subject();
        self.state.subject = Some(active);
        Ok(())
    }

    /// Start a fresh session for the chooser entry named `key`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoSubject` without a selected subject and
    /// `FlowError::UnknownAssignment` if `key` is not in the chooser.
    pub fn select_assignment(&mut self, key: &str) -> Result<(), FlowError> {
        let subject = self.state.subject.as_ref().ok_or(FlowError::NoSubject)?;
        let entry = subject
            .entries
            .iter()
            .find(|entry| entry.key().as_str() == key)
            .cloned()
            .ok_or_else(|| FlowError::UnknownAssignment(key.to_string()))?;
        self.start(entry)
    }

    /// Record an answer for the question on screen and return the new score.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoActiveQuiz` outside a quiz and
    /// `FlowError::Session` once the quiz has completed.
    pub fn submit_answer(
        &mut self,
        selection: Selection,
        is_correct: bool,
    ) -> Result<usize, FlowError> {
        let quiz = self.state.quiz.as_mut().ok_or(FlowError::NoActiveQuiz)?;
        let score = quiz.session.submit_answer(selection, is_correct)?;
        quiz.refresh_card();
        Ok(score)
    }

    /// Click an option on the current question. Returns the recorded
    /// submission when the click answered the question.
    pub fn click_option(&mut self, option: &str) -> Option<Submission> {
        let quiz = self.state.quiz.as_mut()?;
        let card = quiz.card.as_mut()?;
        let submission = card.click(option)?;
        self.record(submission)
    }

    /// Submit the pending multi-choice selection.
    pub fn submit_selection(&mut self) -> Option<Submission> {
        let quiz = self.state.quiz.as_mut()?;
        let card = quiz.card.as_mut()?;
        let submission = card.submit()?;
        self.record(submission)
    }

    /// Advance one question; past the last one the result screen shows.
    pub fn go_next(&mut self) -> bool {
        let now = self.clock.now();
        let Some(quiz) = self.state.quiz.as_mut() else {
            tracing::debug!("go_next ignored: no quiz running");
            return false;
        };
        if quiz.session.is_complete() {
            return false;
        }
        quiz.session.go_next(now);
        quiz.refresh_card();
        if quiz.session.is_complete() {
            tracing::info!(
                assignment = %quiz.entry.key(),
                score = quiz.session.score(),
                total = quiz.session.total(),
                "assignment completed"
            );
        }
        true
    }

    pub fn go_previous(&mut self) -> bool {
        let Some(quiz) = self.state.quiz.as_mut() else {
            return false;
        };
        let moved = quiz.session.go_previous();
        if moved {
            quiz.refresh_card();
        }
        moved
    }

    /// Back to the subject screen, forgetting the subject and its assignments.
    pub fn change_subject(&mut self) {
        tracing::debug!("returning to subject selection");
        self.state.reset_subject();
    }

    /// The chooser's own way out; same effect as `change_subject`.
    pub fn back_to_subjects(&mut self) {
        if !self.state.is_choosing_assignment() {
            tracing::debug!("back_to_subjects outside the chooser");
        }
        self.change_subject();
    }

    /// Back to the assignment chooser, discarding the running quiz.
    pub fn choose_another_week(&mut self) {
        if self.state.subject.is_none() {
            tracing::debug!("choose_another_week ignored: no subject selected");
            return;
        }
        self.state.reset_session();
    }

    /// From the result screen, start the next regular assignment, or go back
    /// to the chooser when there is none (always the case after a random quiz).
    pub fn continue_to_next(&mut self) -> ContinueOutcome {
        let (Some(subject), Some(quiz)) = (&self.state.subject, &self.state.quiz) else {
            return ContinueOutcome::Ignored;
        };
        if !quiz.session.is_complete() {
            tracing::debug!("continue ignored: quiz still running");
            return ContinueOutcome::Ignored;
        }

        let next = quiz
            .entry
            .ordinal()
            .and_then(|ordinal| subject.next_regular(ordinal))
            .cloned();

        match next {
            Some(entry) => {
                let key = entry.key().clone();
                match self.start(entry) {
                    Ok(()) => ContinueOutcome::Started(key),
                    Err(err) => {
                        tracing::warn!(error = %err, "could not start next assignment");
                        self.state.reset_session();
                        ContinueOutcome::ReturnedToChooser
                    }
                }
            }
            None => {
                self.state.reset_session();
                ContinueOutcome::ReturnedToChooser
            }
        }
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn start(&mut self, entry: AssignmentEntry) -> Result<(), FlowError> {
        let subject = self.state.subject.as_ref().ok_or(FlowError::NoSubject)?;
        let questions = match &entry {
            AssignmentEntry::Regular { key, .. } => subject
                .bank
                .get(key)
                .map(<[_]>::to_vec)
                .ok_or_else(|| FlowError::UnknownAssignment(key.to_string()))?,
            AssignmentEntry::Random { count, .. } => {
                sample_random(&subject.bank, *count, &mut self.rng)
            }
        };
        let processed = attach_correct_options(questions);
        tracing::info!(
            subject = %subject.id,
            assignment = %entry.key(),
            questions = processed.len(),
            "assignment started"
        );
        self.state.quiz = Some(ActiveQuiz::new(entry, processed, self.clock.now()));
        Ok(())
    }

    fn record(&mut self, submission: Submission) -> Option<Submission> {
        match self.submit_answer(submission.selection.clone(), submission.is_correct) {
            Ok(_) => Some(submission),
            Err(err) => {
                tracing::warn!(error = %err, "answer not recorded");
                None
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
