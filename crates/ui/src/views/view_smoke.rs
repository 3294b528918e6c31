use std::time::Duration;

use dioxus::prelude::ReadableExt;

use mindmap_core::model::{AppState, CardId, SectionId};
use services::{AppServices, BookmarkSummary, PROGRESS_KEY};
use storage::repository::KeyValueStore;

use crate::vm::{
    FooterTool, QUIZ_UNAVAILABLE, QuizPanel, RESET_CONFIRMATION_MS, RESET_PROMPT, ResetPhase,
};

use super::study::FADE_IN_DELAY_MS;
use super::test_harness::{
    CountingStore, ViewKind, setup_view_harness, setup_view_harness_with_store,
};

const SEEDED: &str = r#"{"progress":33,"completedSections":["fundamentos","adiciones"],"bookmarkedCards":["1.1"],"reviewedCards":5}"#;

fn section(raw: &str) -> SectionId {
    SectionId::new(raw).unwrap()
}

fn card(raw: &str) -> CardId {
    CardId::new(raw).unwrap()
}

async fn seeded_store() -> CountingStore {
    let store = CountingStore::default();
    store.set(PROGRESS_KEY, SEEDED).await.expect("seed progress");
    store
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_fresh_progress() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Mapa Mental Interactivo - Química Orgánica",
        "0%",
        "0/6",
        r#"id="fundamentos""#,
        "nav-link active",
        "far fa-check-circle",
        "far fa-bookmark",
        "Reiniciar Progreso",
        "Tarjetas de Estudio",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("card--visible"), "cards shown before fade-in: {html}");
    assert!(!html.contains("quizModal"), "modal rendered while closed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_restores_saved_progress() {
    let store = seeded_store().await;
    let mut harness = setup_view_harness_with_store(ViewKind::Study, store).await;
    assert_eq!(harness.services.initial_state().reviewed_count(), 5);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "33%",
        "2/6",
        "progress-bar--medium",
        "fas fa-check-circle",
        "fas fa-bookmark",
        "btn-mark-complete--done",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }

    let state = harness.handles.state().peek().clone();
    assert_eq!(state.reviewed_count(), 5);
    assert_eq!(state.completed_count(), 2);
    assert!(state.is_bookmarked(&card("1.1")));
    assert_eq!(harness.store.writes(), 1, "rendering must not write");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_modal_smoke_renders_unavailable_message() {
    let mut harness = setup_view_harness(ViewKind::Quiz(QuizPanel::Unavailable)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(QUIZ_UNAVAILABLE), "missing fallback in {html}");
    assert!(!html.contains("Verificar Respuestas"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_modal_smoke_renders_graded_attempt() {
    let services = AppServices::in_memory().await.expect("services");
    let quiz = services.quiz();
    let QuizPanel::Open(mut session) = QuizPanel::from_lookup(quiz.open("1.3")) else {
        panic!("quiz 1.3 missing");
    };
    session.select(&quiz, 0, 2);
    session.select(&quiz, 1, 1);
    let mut state = AppState::default();
    assert!(session.verify(&quiz, &mut state).is_some());

    let mut harness = setup_view_harness(ViewKind::Quiz(QuizPanel::Open(session))).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "quizModal",
        "Pregunta 1",
        "Pregunta 2",
        "✓ Correcto!",
        "🎯 ¡Perfecto!",
        "2 / 2 (100%)",
        "Reiniciar Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("✗ Incorrecto."));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_modal_smoke_hides_when_closed() {
    let mut harness = setup_view_harness(ViewKind::Quiz(QuizPanel::Closed)).await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("quizModal"), "closed modal rendered: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn cards_fade_in_after_the_delay() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();
    assert!(!harness.render().contains("card--visible"));

    harness
        .drive_for(Duration::from_millis(FADE_IN_DELAY_MS + 250))
        .await;

    let html = harness.render();
    assert!(html.contains("card card--visible"), "cards still hidden: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navigation_and_toggles_are_written_after_each_change() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();
    let handles = harness.handles.clone();

    handles.navigate().call(section("alquinos"));
    harness.drive_async().await;
    assert_eq!(harness.store.writes(), 1);
    assert_eq!(harness.store.record().await.reviewed_cards, 1);
    let html = harness.render();
    assert!(html.contains(r#"id="alquinos""#), "section not shown: {html}");
    assert!(html.contains("5. Alquinos"), "section heading not shown: {html}");
    assert!(!html.contains(r#"id="fundamentos""#), "previous section still shown: {html}");
    assert_eq!(handles.state().peek().current_section().as_str(), "alquinos");

    handles.toggle_complete().call(section("alquinos"));
    harness.drive_async().await;
    assert_eq!(harness.store.writes(), 2);
    let record = harness.store.record().await;
    assert_eq!(record.completed_sections, vec!["alquinos".to_string()]);
    assert_eq!(record.progress, 17);
    let html = harness.render();
    assert!(html.contains("17%"), "progress not refreshed: {html}");
    assert!(html.contains("1/6"), "completed count not refreshed: {html}");

    handles.toggle_bookmark().call(card("5.2"));
    harness.drive_async().await;
    assert_eq!(harness.store.writes(), 3);
    assert_eq!(harness.store.record().await.bookmarked_cards, vec!["5.2".to_string()]);
    assert!(harness.render().contains("fas fa-bookmark"));

    handles.toggle_complete().call(section("inexistente"));
    handles.navigate().call(section("inexistente"));
    harness.drive_async().await;
    assert_eq!(harness.store.writes(), 3, "unknown ids must not write");
}

#[tokio::test(flavor = "current_thread")]
async fn passing_quiz_from_the_study_view_is_written_once() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();
    let handles = harness.handles.clone();

    handles.open_quiz().call("1.3".to_string());
    harness.drive_async().await;
    assert!(harness.render().contains("quizModal"));

    handles.select().call((0, 2));
    handles.select().call((1, 1));
    handles.verify().call(());
    harness.drive_async().await;

    assert_eq!(harness.store.writes(), 1);
    assert_eq!(harness.store.record().await.reviewed_cards, 1);
    assert_eq!(handles.state().peek().reviewed_count(), 1);
    let html = harness.render();
    assert!(html.contains("🎯 ¡Perfecto!"), "missing banner in {html}");

    handles.select().call((0, 0));
    handles.verify().call(());
    harness.drive_async().await;

    assert_eq!(harness.store.writes(), 1, "failed attempt must not write");
    assert_eq!(handles.state().peek().reviewed_count(), 1);
    assert!(harness.render().contains("📚 Sigue practicando"));
}

#[tokio::test(flavor = "current_thread")]
async fn unavailable_quiz_opens_the_fallback_without_writing() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();

    harness.handles.open_quiz().call("2.1".to_string());
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(QUIZ_UNAVAILABLE), "missing fallback in {html}");
    assert_eq!(harness.store.writes(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn confirmed_reset_clears_progress_and_restores_the_label() {
    let store = seeded_store().await;
    let mut harness = setup_view_harness_with_store(ViewKind::Study, store).await;
    harness.rebuild();
    let handles = harness.handles.clone();
    let seeded_writes = harness.store.writes();

    handles.request_reset().call(());
    harness.drive_async().await;
    assert!(harness.render().contains(RESET_PROMPT));
    assert_eq!(harness.store.writes(), seeded_writes);

    handles.confirm_reset().call(());
    harness.drive_async().await;

    assert_eq!(harness.store.writes(), seeded_writes + 1);
    let record = harness.store.record().await;
    assert!(record.completed_sections.is_empty());
    assert!(record.bookmarked_cards.is_empty());
    assert_eq!((record.progress, record.reviewed_cards), (0, 0));
    let html = harness.render();
    assert!(html.contains(ResetPhase::Done.label()), "missing confirmation in {html}");
    assert!(!html.contains(RESET_PROMPT));
    assert!(html.contains("0/6"));

    harness
        .drive_for(Duration::from_millis(RESET_CONFIRMATION_MS + 300))
        .await;

    let html = harness.render();
    assert!(!html.contains(ResetPhase::Done.label()), "label not restored: {html}");
    assert!(html.contains(ResetPhase::Idle.label()));
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_tool_reports_saved_cards() {
    let store = seeded_store().await;
    let mut harness = setup_view_harness_with_store(ViewKind::Study, store).await;
    harness.rebuild();

    harness.handles.tool().call(FooterTool::Flashcards);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(&BookmarkSummary::Saved(1).message()), "missing notice in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn print_tool_without_a_webview_shows_no_notice() {
    let mut harness = setup_view_harness(ViewKind::Study).await;
    harness.rebuild();

    harness.handles.tool().call(FooterTool::PrintSummary);
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("footer-notice"), "print must not raise a notice: {html}");
    assert_eq!(harness.store.writes(), 0);
}
