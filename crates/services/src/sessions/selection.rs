/// What the user picked for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(String),
    Multi(Vec<String>),
}

impl Selection {
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        match self {
            Self::Single(chosen) => chosen == option,
            Self::Multi(chosen) => chosen.iter().any(|c| c == option),
        }
    }
}

/// The outcome of answering a question, ready to hand to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub selection: Selection,
    pub is_correct: bool,
}
