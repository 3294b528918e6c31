use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use mindmap_core::model::AppState;

use crate::context::AppContext;
use crate::vm::{FooterTool, RESET_CONFIRMATION_MS, RESET_PROMPT, ResetPhase};

use super::study::persist_in_background;
#[cfg(test)]
use super::test_harness::StudyTestHandles;

#[component]
pub fn FooterTools(state: Signal<AppState>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut phase = use_signal(ResetPhase::default);
    let mut notice = use_signal(|| None::<String>);

    let on_reset_request = use_callback(move |()| {
        let mut phase = phase;
        if phase() == ResetPhase::Idle {
            phase.set(ResetPhase::Confirming);
        }
    });

    let on_reset_confirm = {
        let study = ctx.study();
        use_callback(move |()| {
            let mut state = state;
            let mut phase = phase;
            study.reset(&mut state.write());
            persist_in_background(study.pending_save(&state.read()));
            phase.set(ResetPhase::Done);

            spawn(async move {
                tokio::time::sleep(Duration::from_millis(RESET_CONFIRMATION_MS)).await;
                if phase() == ResetPhase::Done {
                    phase.set(ResetPhase::Idle);
                }
            });
        })
    };

    let on_tool = {
        let study = ctx.study();
        use_callback(move |tool: FooterTool| {
            let mut notice = notice;
            log::debug!("footer tool {tool} selected");
            let bookmarks = study.bookmark_summary(&state.read());
            match tool.notice(bookmarks) {
                Some(message) => notice.set(Some(message)),
                None => {
                    spawn(async move {
                        if let Err(err) = eval("window.print();").await {
                            log::warn!("print dialog failed: {err}");
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register_footer(on_reset_request, on_reset_confirm, on_tool);
            }
        }
    }

    let current_phase = phase();
    let reset_label = current_phase.label();
    let reset_icon = current_phase.icon();

    rsx! {
        footer { class: "footer",
            div { class: "footer-tools",
                button {
                    id: "resetProgress",
                    class: "btn-reset",
                    r#type: "button",
                    onclick: move |_| on_reset_request.call(()),
                    i { class: reset_icon }
                    " {reset_label}"
                }
                if current_phase == ResetPhase::Confirming {
                    div { class: "reset-confirm",
                        p { "{RESET_PROMPT}" }
                        button {
                            class: "btn-confirm",
                            r#type: "button",
                            onclick: move |_| on_reset_confirm.call(()),
                            "Sí, reiniciar"
                        }
                        button {
                            class: "btn-cancel",
                            r#type: "button",
                            onclick: move |_| phase.set(ResetPhase::Idle),
                            "Cancelar"
                        }
                    }
                }
                for tool in FooterTool::ALL {
                    a {
                        key: "{tool}",
                        id: tool.element_id(),
                        class: "footer-tool",
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_tool.call(tool);
                        },
                        i { class: tool.icon() }
                        " "
                        {tool.label()}
                    }
                }
            }
            if let Some(message) = notice() {
                div { class: "footer-notice", role: "status",
                    span { "{message}" }
                    button {
                        class: "notice-dismiss",
                        r#type: "button",
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }
        }
    }
}
