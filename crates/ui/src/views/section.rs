use dioxus::prelude::*;
use mindmap_core::model::{CardId, SectionId};

use crate::vm::{CardVm, SectionVm};

#[component]
pub fn SectionPanel(
    section: SectionVm,
    revealed: bool,
    on_toggle_collapse: Callback<SectionId>,
    on_toggle_complete: Callback<SectionId>,
    on_toggle_bookmark: Callback<CardId>,
    on_open_quiz: Callback<String>,
) -> Element {
    let collapse_target = section.id.clone();
    let complete_target = section.id.clone();
    let cards = section.cards.clone();

    rsx! {
        section { class: "content-section active", id: "{section.id}",
            div { class: "section-header",
                h2 {
                    i { class: "{section.icon_class}" }
                    " {section.heading}"
                }
                div { class: "section-controls",
                    button {
                        class: "btn-toggle",
                        r#type: "button",
                        title: "Expandir/Contraer",
                        onclick: move |_| on_toggle_collapse.call(collapse_target.clone()),
                        i { class: section.collapse_icon }
                    }
                    button {
                        class: if section.completed {
                            "btn-mark-complete btn-mark-complete--done"
                        } else {
                            "btn-mark-complete"
                        },
                        r#type: "button",
                        "data-section": "{section.id}",
                        onclick: move |_| on_toggle_complete.call(complete_target.clone()),
                        i { class: section.complete_icon }
                        " Completado"
                    }
                }
            }
            if !section.collapsed {
                div { class: "cards-container",
                    for card in cards {
                        StudyCardView {
                            key: "{card.id}",
                            card,
                            revealed,
                            on_toggle_bookmark,
                            on_open_quiz,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StudyCardView(
    card: CardVm,
    revealed: bool,
    on_toggle_bookmark: Callback<CardId>,
    on_open_quiz: Callback<String>,
) -> Element {
    let bookmark_target = card.id.clone();
    let quiz_label = card.quiz.as_ref().map(ToString::to_string);
    let quiz_target = quiz_label.clone();

    rsx! {
        article {
            class: if revealed { "card card--visible" } else { "card" },
            "data-card": "{card.id}",
            div { class: "card-header",
                h3 { "{card.id} {card.title}" }
                button {
                    class: if card.bookmarked { "btn-bookmark btn-bookmark--active" } else { "btn-bookmark" },
                    r#type: "button",
                    "data-card": "{card.id}",
                    onclick: move |_| on_toggle_bookmark.call(bookmark_target.clone()),
                    i { class: card.bookmark_icon }
                }
            }
            p { class: "card-summary", "{card.summary}" }
            if let Some(quiz_label) = quiz_label {
                button {
                    class: "btn-quiz",
                    r#type: "button",
                    "data-quiz": "{quiz_label}",
                    onclick: move |_| {
                        if let Some(target) = quiz_target.clone() {
                            on_open_quiz.call(target);
                        }
                    },
                    i { class: "fas fa-question-circle" }
                    " Test rápido"
                }
            }
        }
    }
}
