use dioxus::prelude::*;

use crate::vm::ProgressVm;

#[component]
pub fn ProgressHeader(title: String, progress: ProgressVm) -> Element {
    rsx! {
        header { class: "header",
            h1 {
                i { class: "fas fa-brain" }
                " {title}"
            }
            div { class: "progress-container",
                div { class: "progress-track",
                    div {
                        id: "progressBar",
                        class: progress.bar_class,
                        style: "width: {progress.percent}%;",
                    }
                }
                span { id: "progressPercent", class: "progress-percent", "{progress.percent_label}" }
            }
            div { class: "stats",
                div { class: "stat",
                    span { class: "stat-label", "Secciones completadas" }
                    span { id: "completedSections", class: "stat-value", "{progress.completed_label}" }
                }
                div { class: "stat",
                    span { class: "stat-label", "Tarjetas revisadas" }
                    span { id: "reviewedCards", class: "stat-value", "{progress.reviewed_label}" }
                }
            }
        }
    }
}
