use dioxus::prelude::*;
use mindmap_core::model::SectionId;

use crate::vm::NavEntryVm;

#[component]
pub fn NavMenu(entries: Vec<NavEntryVm>, on_navigate: Callback<SectionId>) -> Element {
    rsx! {
        nav { class: "nav-menu",
            ul {
                for entry in entries {
                    li { key: "{entry.id}",
                        NavLink { entry, on_navigate }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(entry: NavEntryVm, on_navigate: Callback<SectionId>) -> Element {
    let target = entry.id.clone();
    rsx! {
        a {
            class: if entry.active { "nav-link active" } else { "nav-link" },
            href: "#{entry.id}",
            "data-section": "{entry.id}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_navigate.call(target.clone());
            },
            i { class: "{entry.icon_class}" }
            " {entry.label}"
            if entry.completed {
                i { class: "fas fa-check nav-done" }
            }
        }
    }
}
