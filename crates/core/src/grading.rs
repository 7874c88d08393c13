//! Grading rules for single- and multi-choice answers.

use std::collections::BTreeSet;

use crate::model::ProcessedQuestion;

const SELECTION_SEPARATOR: &str = "||";

/// A single-choice click is correct when it equals the raw answer text or is
/// one of the parsed correct options.
#[must_use]
pub fn grade_single(question: &ProcessedQuestion, clicked: &str) -> bool {
    question.raw_answer().as_text() == Some(clicked)
        || question.correct_options().contains(clicked)
}

/// Canonical form of a selection: trimmed, de-duplicated, sorted, joined.
#[must_use]
pub fn normalize_selection<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(SELECTION_SEPARATOR)
}

/// Multi-choice answers must match the correct set exactly. No partial credit.
#[must_use]
pub fn grade_multi<S: AsRef<str>>(question: &ProcessedQuestion, chosen: &[S]) -> bool {
    normalize_selection(chosen) == normalize_selection(question.correct_options().iter())
}

/// Score as a whole percentage, rounding halves up. Zero questions score 0%.
#[must_use]
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn multi_question() -> ProcessedQuestion {
        Question::new("Pick", ["A", "B", "C"], "A & C").process()
    }

    #[test]
    fn multi_choice_requires_exact_set() {
        let q = Question::new("Pick", ["alpha", "beta", "gamma"], "A & C").process();
        assert!(grade_multi(&q, &["gamma", "alpha"]));
        assert!(!grade_multi(&q, &["alpha"]));
        assert!(!grade_multi(&q, &["alpha", "beta", "gamma"]));
    }

    #[test]
    fn multi_choice_over_letter_named_options() {
        // Options literally named "A"/"C": the answer "A & C" is not an exact
        // option text, so letters map to the first and third options.
        let q = multi_question();
        assert_eq!(q.correct_options().as_slice(), ["A".to_string(), "C".to_string()]);
        assert!(grade_multi(&q, &["C", "A"]));
        assert!(!grade_multi(&q, &["A"]));
        assert!(!grade_multi(&q, &["A", "B", "C"]));
    }

    #[test]
    fn normalization_trims_and_dedups() {
        assert_eq!(normalize_selection([" b", "a ", "b"]), "a||b");
        assert_eq!(normalize_selection(Vec::<String>::new()), "");
    }

    #[test]
    fn single_choice_accepts_raw_or_parsed_match() {
        let q = Question::new("Capital?", ["Paris", "Rome"], "A").process();
        assert!(grade_single(&q, "Paris"));
        assert!(!grade_single(&q, "Rome"));

        let literal = Question::new("Capital?", ["Paris", "Rome"], "Rome").process();
        assert!(grade_single(&literal, "Rome"));
    }

    #[test]
    fn list_answers_grade_by_membership() {
        let single = Question::new("Q", ["x", "y"], vec!["y".to_string()]).process();
        assert!(!single.is_multi());
        assert!(grade_single(&single, "y"));
        assert!(!grade_single(&single, "x"));

        let multi = Question::new("Q", ["x", "y", "z"], vec!["x".to_string(), "z".to_string()])
            .process();
        assert!(multi.is_multi());
        assert!(grade_multi(&multi, &["z", "x"]));
        assert!(!grade_multi(&multi, &["x"]));
    }

    #[test]
    fn fallback_answer_is_unreachable_by_clicks() {
        let q = Question::new("Q", ["x", "y"], "???").process();
        assert!(!grade_single(&q, "x"));
        assert!(!grade_single(&q, "y"));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
    }
}
