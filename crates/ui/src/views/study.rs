use std::time::Duration;

use dioxus::prelude::*;
use mindmap_core::model::{CardId, SectionId};
use services::{Navigation, PendingSave};

use crate::context::AppContext;
use crate::vm::{CollapsedSections, ProgressVm, QuizPanel, map_active_section, map_nav_entries};

use super::{FooterTools, NavMenu, ProgressHeader, QuizModal, SectionPanel};

#[cfg(test)]
use super::test_harness::StudyTestHandles;

/// Delay before the cards fade in after the first render.
pub(super) const FADE_IN_DELAY_MS: u64 = 500;

/// Commit a save without blocking the handler. The save is stamped by the
/// caller, so out-of-order commits never overwrite newer progress. Failures are
/// logged by the progress service.
pub(super) fn persist_in_background(save: PendingSave) {
    spawn(async move {
        save.commit().await;
    });
}

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let curriculum = ctx.curriculum();
    let initial_state = ctx.initial_state();

    let state = use_signal(move || initial_state);
    let collapsed = use_signal(CollapsedSections::default);
    let quiz_panel = use_signal(QuizPanel::default);
    let revealed = use_signal(|| false);

    use_hook(move || {
        let mut revealed = revealed;
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(FADE_IN_DELAY_MS)).await;
            revealed.set(true);
        });
    });

    let on_navigate = {
        let study = ctx.study();
        use_callback(move |section: SectionId| {
            let mut state = state;
            let outcome = study.navigate_to(&mut state.write(), section.as_str());
            if let Navigation::Moved { .. } = outcome {
                persist_in_background(study.pending_save(&state.read()));
            }
        })
    };

    let on_toggle_collapse = use_callback(move |section: SectionId| {
        let mut collapsed = collapsed;
        collapsed.write().toggle(&section);
    });

    let on_toggle_complete = {
        let study = ctx.study();
        use_callback(move |section: SectionId| {
            let mut state = state;
            if study.toggle_complete(&mut state.write(), &section).is_some() {
                persist_in_background(study.pending_save(&state.read()));
            }
        })
    };

    let on_toggle_bookmark = {
        let study = ctx.study();
        use_callback(move |card: CardId| {
            let mut state = state;
            if study.toggle_bookmark(&mut state.write(), &card).is_some() {
                persist_in_background(study.pending_save(&state.read()));
            }
        })
    };

    let on_open_quiz = {
        let quiz = ctx.quiz();
        use_callback(move |raw: String| {
            let mut quiz_panel = quiz_panel;
            quiz_panel.set(QuizPanel::from_lookup(quiz.open(&raw)));
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register_study(
                    state,
                    on_navigate,
                    on_toggle_complete,
                    on_toggle_bookmark,
                    on_open_quiz,
                );
            }
        }
    }

    let snapshot = state.read().clone();
    let progress = ProgressVm::from(&snapshot);
    let entries = map_nav_entries(&curriculum, &snapshot);
    let active = map_active_section(&curriculum, &snapshot, &collapsed.read());
    let title = curriculum.title().to_string();

    rsx! {
        div { class: "mindmap",
            ProgressHeader { title, progress }
            NavMenu { entries, on_navigate }
            main { class: "content",
                if let Some(section) = active {
                    SectionPanel {
                        section,
                        revealed: revealed(),
                        on_toggle_collapse,
                        on_toggle_complete,
                        on_toggle_bookmark,
                        on_open_quiz,
                    }
                } else {
                    p { class: "content-missing", "Sección no encontrada." }
                }
            }
            FooterTools { state }
            QuizModal { panel: quiz_panel, state }
        }
    }
}
