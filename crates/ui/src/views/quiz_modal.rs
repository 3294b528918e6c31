use dioxus::prelude::*;
use mindmap_core::model::AppState;

use crate::context::AppContext;
use crate::vm::{QUIZ_UNAVAILABLE, QuestionVm, QuizPanel, QuizSessionVm};

use super::study::persist_in_background;
#[cfg(test)]
use super::test_harness::StudyTestHandles;

#[component]
pub fn QuizModal(panel: Signal<QuizPanel>, state: Signal<AppState>) -> Element {
    let ctx = use_context::<AppContext>();

    let on_select = {
        let quiz = ctx.quiz();
        use_callback(move |(question, option): (usize, usize)| {
            let mut panel = panel;
            if let QuizPanel::Open(session) = &mut *panel.write() {
                session.select(&quiz, question, option);
            }
        })
    };

    let on_verify = {
        let quiz = ctx.quiz();
        use_callback(move |()| {
            let mut panel = panel;
            let mut state = state;
            let save = match &mut *panel.write() {
                QuizPanel::Open(session) => session.verify(&quiz, &mut state.write()),
                QuizPanel::Closed | QuizPanel::Unavailable => None,
            };
            if let Some(save) = save {
                persist_in_background(save);
            }
        })
    };

    let on_restart = {
        let quiz = ctx.quiz();
        use_callback(move |()| {
            let mut panel = panel;
            if let QuizPanel::Open(session) = &mut *panel.write() {
                session.restart(&quiz);
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<StudyTestHandles>() {
                handles.register_quiz(on_select, on_verify);
            }
        }
    }

    let current = panel.read().clone();
    if !current.is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "quizModal",
            class: "modal",
            onclick: move |_| {
                let mut panel = panel;
                panel.set(QuizPanel::Closed);
            },
            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                span {
                    class: "close-modal",
                    onclick: move |_| {
                        let mut panel = panel;
                        panel.set(QuizPanel::Closed);
                    },
                    "×"
                }
                div { id: "quizContent",
                    match current {
                        QuizPanel::Open(session) => rsx! {
                            QuizBody { session, on_select, on_verify, on_restart }
                        },
                        QuizPanel::Closed | QuizPanel::Unavailable => rsx! {
                            p { class: "quiz-unavailable", "{QUIZ_UNAVAILABLE}" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn QuizBody(
    session: QuizSessionVm,
    on_select: Callback<(usize, usize)>,
    on_verify: Callback<()>,
    on_restart: Callback<()>,
) -> Element {
    let title = session.title().to_string();
    let questions = session.questions();
    let banner = session.banner();

    rsx! {
        h2 { "{title}" }
        div { class: "quiz-container",
            for question in questions {
                QuestionBlock { key: "{question.index}", question, on_select }
            }
            div { class: "quiz-controls",
                button {
                    id: "submitQuiz",
                    class: "btn-quiz",
                    r#type: "button",
                    onclick: move |_| on_verify.call(()),
                    "Verificar Respuestas"
                }
                button {
                    id: "resetQuiz",
                    class: "btn-bookmark",
                    r#type: "button",
                    onclick: move |_| on_restart.call(()),
                    "Reiniciar Quiz"
                }
            }
            div { id: "quizResult",
                if let Some(banner) = banner {
                    div { class: "quiz-result-banner",
                        h3 { "{banner.headline}" }
                        p { class: "quiz-score", "{banner.score_label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionBlock(question: QuestionVm, on_select: Callback<(usize, usize)>) -> Element {
    let index = question.index;
    let options = question.options.clone();
    let feedback = question.feedback.clone();

    rsx! {
        div { class: "quiz-question", "data-question": "{index}",
            h3 { "{question.heading}" }
            p { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-options",
                for option in options {
                    div { key: "{option.input_id}", class: "quiz-option",
                        input {
                            r#type: "radio",
                            id: "{option.input_id}",
                            name: "{question.group}",
                            value: "{option.index}",
                            checked: option.checked,
                            onchange: move |_| on_select.call((index, option.index)),
                        }
                        label { r#for: "{option.input_id}", "{option.label}" }
                    }
                }
            }
            if let Some(feedback) = feedback {
                div { class: feedback.class,
                    strong { "{feedback.headline}" }
                    if let Some(explanation) = feedback.explanation {
                        br {}
                        "{explanation}"
                    }
                }
            }
        }
    }
}
