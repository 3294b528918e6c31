mod footer_vm;
mod progress_vm;
mod quiz_vm;
mod section_vm;

pub use footer_vm::{FooterTool, RESET_CONFIRMATION_MS, RESET_PROMPT, ResetPhase};
pub use progress_vm::ProgressVm;
pub use quiz_vm::{
    FeedbackVm, OptionVm, QUIZ_UNAVAILABLE, QuestionVm, QuizPanel, QuizSessionVm, ResultBannerVm,
};
pub use section_vm::{
    CardVm, CollapsedSections, NavEntryVm, SectionVm, map_active_section, map_nav_entries,
};
