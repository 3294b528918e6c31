use mindmap_core::model::{AppState, ProgressTier, TOTAL_SECTIONS};

/// Header figures: progress bar, completed sections and reviewed counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    pub percent_label: String,
    pub bar_class: &'static str,
    pub completed_label: String,
    pub reviewed_label: String,
}

impl From<&AppState> for ProgressVm {
    fn from(state: &AppState) -> Self {
        let percent = state.progress_percent();
        Self {
            percent,
            percent_label: format!("{percent}%"),
            bar_class: tier_class(state.progress_tier()),
            completed_label: format!("{}/{TOTAL_SECTIONS}", state.completed_count()),
            reviewed_label: state.reviewed_count().to_string(),
        }
    }
}

fn tier_class(tier: ProgressTier) -> &'static str {
    match tier {
        ProgressTier::Low => "progress-bar progress-bar--low",
        ProgressTier::Medium => "progress-bar progress-bar--medium",
        ProgressTier::High => "progress-bar progress-bar--high",
    }
}
