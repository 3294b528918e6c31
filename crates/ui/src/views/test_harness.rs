use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use mindmap_core::QuizBank;
use mindmap_core::model::{AppState, CardId, SectionId};
use services::{AppServices, PROGRESS_KEY, QuizService, StudyService};
use storage::ProgressRecord;
use storage::repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{QuizModal, StudyView};
use crate::vm::{FooterTool, QuizPanel};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn study(&self) -> Arc<StudyService> {
        self.services.study()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn initial_state(&self) -> AppState {
        self.services.initial_state()
    }
}

/// In-memory store that counts writes.
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: InMemoryKeyValueStore,
    writes: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn record(&self) -> ProgressRecord {
        let raw = self
            .inner
            .get(PROGRESS_KEY)
            .await
            .expect("read progress")
            .expect("progress stored");
        ProgressRecord::from_json(&raw).expect("decode progress")
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

#[derive(Default)]
struct Registered {
    state: Option<Signal<AppState>>,
    navigate: Option<Callback<SectionId>>,
    toggle_complete: Option<Callback<SectionId>>,
    toggle_bookmark: Option<Callback<CardId>>,
    open_quiz: Option<Callback<String>>,
    select: Option<Callback<(usize, usize)>>,
    verify: Option<Callback<()>>,
    request_reset: Option<Callback<()>>,
    confirm_reset: Option<Callback<()>>,
    tool: Option<Callback<FooterTool>>,
}

/// Handlers the study components register so tests can fire them the way the
/// click and change listeners do.
#[derive(Clone, Default)]
pub(crate) struct StudyTestHandles {
    registered: Rc<RefCell<Registered>>,
}

impl StudyTestHandles {
    pub(crate) fn register_study(
        &self,
        state: Signal<AppState>,
        navigate: Callback<SectionId>,
        toggle_complete: Callback<SectionId>,
        toggle_bookmark: Callback<CardId>,
        open_quiz: Callback<String>,
    ) {
        let mut registered = self.registered.borrow_mut();
        registered.state = Some(state);
        registered.navigate = Some(navigate);
        registered.toggle_complete = Some(toggle_complete);
        registered.toggle_bookmark = Some(toggle_bookmark);
        registered.open_quiz = Some(open_quiz);
    }

    pub(crate) fn register_quiz(&self, select: Callback<(usize, usize)>, verify: Callback<()>) {
        let mut registered = self.registered.borrow_mut();
        registered.select = Some(select);
        registered.verify = Some(verify);
    }

    pub(crate) fn register_footer(
        &self,
        request_reset: Callback<()>,
        confirm_reset: Callback<()>,
        tool: Callback<FooterTool>,
    ) {
        let mut registered = self.registered.borrow_mut();
        registered.request_reset = Some(request_reset);
        registered.confirm_reset = Some(confirm_reset);
        registered.tool = Some(tool);
    }

    pub(crate) fn state(&self) -> Signal<AppState> {
        self.registered.borrow().state.expect("study state registered")
    }

    pub(crate) fn navigate(&self) -> Callback<SectionId> {
        self.registered.borrow().navigate.expect("navigate registered")
    }

    pub(crate) fn toggle_complete(&self) -> Callback<SectionId> {
        self.registered
            .borrow()
            .toggle_complete
            .expect("toggle complete registered")
    }

    pub(crate) fn toggle_bookmark(&self) -> Callback<CardId> {
        self.registered
            .borrow()
            .toggle_bookmark
            .expect("toggle bookmark registered")
    }

    pub(crate) fn open_quiz(&self) -> Callback<String> {
        self.registered.borrow().open_quiz.expect("open quiz registered")
    }

    pub(crate) fn select(&self) -> Callback<(usize, usize)> {
        self.registered.borrow().select.expect("quiz select registered")
    }

    pub(crate) fn verify(&self) -> Callback<()> {
        self.registered.borrow().verify.expect("quiz verify registered")
    }

    pub(crate) fn request_reset(&self) -> Callback<()> {
        self.registered
            .borrow()
            .request_reset
            .expect("reset request registered")
    }

    pub(crate) fn confirm_reset(&self) -> Callback<()> {
        self.registered
            .borrow()
            .confirm_reset
            .expect("reset confirm registered")
    }

    pub(crate) fn tool(&self) -> Callback<FooterTool> {
        self.registered.borrow().tool.expect("footer tool registered")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Study,
    Quiz(QuizPanel),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: StudyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let handles = props.handles.clone();
    use_context_provider(|| handles);
    match props.view {
        ViewKind::Study => rsx! { StudyView {} },
        ViewKind::Quiz(initial) => rsx! { QuizOverlay { initial } },
    }
}

#[component]
fn QuizOverlay(initial: QuizPanel) -> Element {
    let ctx = use_context::<AppContext>();
    let panel = use_signal(move || initial);
    let state = use_signal(move || ctx.initial_state());
    rsx! { QuizModal { panel, state } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: CountingStore,
    pub services: AppServices,
    pub handles: StudyTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Keep the dom running for `duration` so spawned timers can fire.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_store(view, CountingStore::default()).await
}

pub async fn setup_view_harness_with_store(view: ViewKind, store: CountingStore) -> ViewHarness {
    let storage = Storage {
        kv: Arc::new(store.clone()),
    };
    let bank = QuizBank::embedded().expect("quiz bank");
    let services = AppServices::from_storage(&storage, bank)
        .await
        .expect("services");
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let handles = StudyTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        store,
        services,
        handles,
    }
}
