use serde::{Deserialize, Deserializer, Serialize};

use crate::answer_key::parse_correct_options;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A question as it appears in a bank file.
///
/// `answer` is kept raw: see [`AnswerKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: AnswerKey,
}

impl Question {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<AnswerKey>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Derive the correct option set from the raw answer.
    #[must_use]
    pub fn process(self) -> ProcessedQuestion {
        let correct_options = parse_correct_options(&self.answer, &self.options);
        ProcessedQuestion {
            question: self,
            correct_options,
        }
    }
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// The `answer` field of a bank question.
///
/// Text is either an option's literal text or a letter code such as
/// `"A & C"`. A list names the correct options directly. Numbers and `true`
/// are read as their text; `null`, `false` and `0` mean no answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Text(String),
    List(Vec<String>),
}

impl AnswerKey {
    /// The text form; `None` for a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }
}

impl Default for AnswerKey {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for AnswerKey {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AnswerKey {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for AnswerKey {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl<'de> Deserialize<'de> for AnswerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawAnswer::deserialize(deserializer).map(Self::from)
    }
}

/// Every JSON shape an answer shows up as in bank files.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Missing,
    Text(String),
    List(Vec<String>),
    Flag(bool),
    Integer(i64),
    Float(f64),
}

impl From<RawAnswer> for AnswerKey {
    fn from(raw: RawAnswer) -> Self {
        match raw {
            RawAnswer::Missing | RawAnswer::Flag(false) | RawAnswer::Integer(0) => Self::default(),
            RawAnswer::Float(value) if value == 0.0 || value.is_nan() => Self::default(),
            RawAnswer::Text(text) => Self::Text(text),
            RawAnswer::List(list) => Self::List(list),
            RawAnswer::Flag(true) => Self::Text("true".to_string()),
            RawAnswer::Integer(value) => Self::Text(value.to_string()),
            RawAnswer::Float(value) => Self::Text(value.to_string()),
        }
    }
}

//
// ─── CORRECT OPTIONS ───────────────────────────────────────────────────────────
//

/// Ordered set of the option texts that make up a correct answer.
///
/// Insertion order is kept so the set renders in option order; duplicates are
/// dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorrectOptions(Vec<String>);

impl CorrectOptions {
    #[must_use]
    pub fn single(option: impl Into<String>) -> Self {
        Self(vec![option.into()])
    }

    pub fn insert(&mut self, option: impl Into<String>) {
        let option = option.into();
        if !self.0.contains(&option) {
            self.0.push(option);
        }
    }

    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|o| o == option)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for CorrectOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for option in iter {
            set.insert(option);
        }
        set
    }
}

//
// ─── PROCESSED QUESTION ────────────────────────────────────────────────────────
//

/// A question with its parsed correct options attached. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedQuestion {
    question: Question,
    correct_options: CorrectOptions,
}

impl ProcessedQuestion {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.question.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.question.options
    }

    /// The raw answer exactly as it appeared in the bank.
    #[must_use]
    pub fn raw_answer(&self) -> &AnswerKey {
        &self.question.answer
    }

    #[must_use]
    pub fn correct_options(&self) -> &CorrectOptions {
        &self.correct_options
    }

    /// More than one option must be chosen to answer correctly.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.correct_options.len() > 1
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_missing_options_and_null_answer() {
        let q: Question =
            serde_json::from_str(r#"{ "question": "Q?", "answer": null }"#).unwrap();
        assert!(q.options.is_empty());
        assert_eq!(q.answer, AnswerKey::default());
    }

    #[test]
    fn deserializes_list_and_scalar_answers() {
        let list: Question =
            serde_json::from_str(r#"{ "question": "Q", "answer": ["x", "z"] }"#).unwrap();
        assert_eq!(list.answer, AnswerKey::List(vec!["x".into(), "z".into()]));
        assert_eq!(list.answer.as_text(), None);

        let number: Question =
            serde_json::from_str(r#"{ "question": "Q", "answer": 2 }"#).unwrap();
        assert_eq!(number.answer.as_text(), Some("2"));

        let zero: Question =
            serde_json::from_str(r#"{ "question": "Q", "answer": 0 }"#).unwrap();
        assert_eq!(zero.answer, AnswerKey::default());

        let fraction: Question =
            serde_json::from_str(r#"{ "question": "Q", "answer": 2.5 }"#).unwrap();
        assert_eq!(fraction.answer.as_text(), Some("2.5"));
    }

    #[test]
    fn correct_options_drop_duplicates() {
        let set: CorrectOptions = ["x", "y", "x"].into_iter().collect();
        assert_eq!(set.as_slice(), ["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn process_marks_letter_pairs_as_multi() {
        let q = Question::new("Pick two", ["one", "two", "three"], "A & C").process();
        assert!(q.is_multi());
        assert!(q.correct_options().contains("one"));
        assert!(q.correct_options().contains("three"));
        assert_eq!(q.raw_answer().as_text(), Some("A & C"));
    }
}
