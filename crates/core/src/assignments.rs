//! Grouping a subject's question bank into ordered assignments.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{AssignmentEntry, AssignmentKey, ProcessedQuestion, Question, QuizSettings};

/// A subject's questions as loaded from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBank {
    /// Already grouped by assignment key, in source order.
    Grouped(Vec<(AssignmentKey, Vec<Question>)>),
    /// A flat list that gets chunked into weekly assignments.
    Flat(Vec<Question>),
}

impl QuestionBank {
    #[must_use]
    pub fn question_count(&self) -> usize {
        match self {
            Self::Grouped(groups) => groups.iter().map(|(_, qs)| qs.len()).sum(),
            Self::Flat(questions) => questions.len(),
        }
    }
}

/// One named, ordered batch of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: AssignmentKey,
    pub questions: Vec<Question>,
}

/// Assignments keyed by name, with unique keys kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentBank {
    assignments: Vec<Assignment>,
}

impl AssignmentBank {
    #[must_use]
    pub fn keys(&self) -> Vec<&AssignmentKey> {
        self.assignments.iter().map(|a| &a.key).collect()
    }

    #[must_use]
    pub fn get(&self, key: &AssignmentKey) -> Option<&[Question]> {
        self.assignments
            .iter()
            .find(|a| &a.key == key)
            .map(|a| a.questions.as_slice())
    }

    /// Assignment at the given position among the regular entries.
    #[must_use]
    pub fn at(&self, ordinal: usize) -> Option<&Assignment> {
        self.assignments.get(ordinal)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Every question, in key order then in-key order.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.assignments.iter().flat_map(|a| a.questions.iter())
    }

    /// The chooser list: bank keys in order, then the synthetic random entries.
    #[must_use]
    pub fn entries(&self, settings: &QuizSettings) -> Vec<AssignmentEntry> {
        let mut entries: Vec<_> = self
            .assignments
            .iter()
            .enumerate()
            .map(|(ordinal, a)| AssignmentEntry::Regular {
                key: a.key.clone(),
                ordinal,
            })
            .collect();
        entries.extend(settings.random_entries());
        entries
    }

    fn upsert(&mut self, key: AssignmentKey, questions: Vec<Question>) {
        match self.assignments.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.questions = questions,
            None => self.assignments.push(Assignment { key, questions }),
        }
    }
}

/// Build the assignment bank for a subject.
///
/// Grouped banks pass through as-is (a repeated key keeps its first position
/// and takes the last group). Flat banks are split into consecutive chunks of
/// `settings.chunk_size()` named `Week 1`, `Week 2`, …; the last chunk may be
/// shorter.
#[must_use]
pub fn build_assignments(bank: QuestionBank, settings: &QuizSettings) -> AssignmentBank {
    let mut built = AssignmentBank::default();
    match bank {
        QuestionBank::Grouped(groups) => {
            for (key, questions) in groups {
                built.upsert(key, questions);
            }
        }
        QuestionBank::Flat(questions) => {
            for (idx, chunk) in questions.chunks(settings.chunk_size()).enumerate() {
                built.upsert(AssignmentKey::week(idx + 1), chunk.to_vec());
            }
        }
    }
    built
}

/// Uniformly shuffled sample of up to `count` questions drawn from the whole bank.
///
/// Asking for more than the pool holds returns the whole pool, shuffled.
pub fn sample_random<R: Rng + ?Sized>(
    bank: &AssignmentBank,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool: Vec<Question> = bank.all_questions().cloned().collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

#[must_use]
pub fn attach_correct_options(questions: Vec<Question>) -> Vec<ProcessedQuestion> {
    questions.into_iter().map(Question::process).collect()
}
