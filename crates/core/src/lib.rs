#![forbid(unsafe_code)]

pub mod answer_key;
pub mod assignments;
pub mod grading;
pub mod model;
pub mod time;

pub use answer_key::parse_correct_options;
pub use assignments::{
    AssignmentBank, QuestionBank, attach_correct_options, build_assignments, sample_random,
};
pub use grading::{grade_multi, grade_single, normalize_selection, percentage};
pub use time::Clock;
