mod footer;
mod header;
mod nav;
mod quiz_modal;
mod section;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use footer::FooterTools;
pub use header::ProgressHeader;
pub use nav::NavMenu;
pub use quiz_modal::QuizModal;
pub use section::SectionPanel;
pub use study::StudyView;
