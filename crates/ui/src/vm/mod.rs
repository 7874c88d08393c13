mod chooser_vm;
mod question_card_vm;
mod quiz_header_vm;
mod result_vm;

pub use chooser_vm::{
    AssignmentChoiceVm, AssignmentChooserVm, SubjectChoiceVm, map_assignment_chooser,
    map_subject_choices,
};
pub use question_card_vm::{OptionRowVm, QuestionCardVm, map_question_card};
pub use quiz_header_vm::{QuizHeaderVm, map_nav_label, map_quiz_header};
pub use result_vm::{ResultVm, map_result};
