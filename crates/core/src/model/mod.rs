mod ids;
mod question;
mod settings;

pub use ids::{AssignmentEntry, AssignmentKey, SubjectId};
pub use question::{AnswerKey, CorrectOptions, ProcessedQuestion, Question};
pub use settings::{QuizSettings, SettingsError};
