//! BDD test world for the lesson watch client

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use cucumber::World;
use lesson_watch::api::{LessonApi, ScrapeRequest, StartRequest};
use lesson_watch::delegation::{
    ClickTarget, LESSON_ID_ATTR, LESSON_NAME_ATTR, LESSON_STATUS_ATTR, LESSON_TIME_ATTR,
};
use lesson_watch::executor::TokioExecutor;
use lesson_watch::form::MonitorForm;
use lesson_watch::model::{LessonRecord, MonitoringStatus, NotifyMethod};
use lesson_watch::render::{
    ButtonView, ControlsView, LessonListView, NotificationFieldsView, SelectionView, StatusView,
};
use lesson_watch::toast::Toast;
use lesson_watch::{ClientConfig, Dashboard, LessonWatchError, View};

/// In-memory backend with call recording
#[derive(Debug, Default)]
pub struct FakeApi {
    pub lessons: RefCell<Vec<LessonRecord>>,
    pub status: RefCell<MonitoringStatus>,
    pub fail_scrape: Cell<bool>,
    pub fail_start: Cell<bool>,
    pub fail_stop: Cell<bool>,
    pub scrape_calls: Cell<usize>,
    pub start_requests: RefCell<Vec<StartRequest>>,
    pub stop_calls: Cell<usize>,
}

#[async_trait(?Send)]
impl LessonApi for FakeApi {
    async fn scrape_lessons(
        &self,
        _request: &ScrapeRequest,
    ) -> lesson_watch::Result<Vec<LessonRecord>> {
        self.scrape_calls.set(self.scrape_calls.get() + 1);
        if self.fail_scrape.get() {
            return Err(LessonWatchError::Status {
                endpoint: "/api/scrape_lessons".to_string(),
                status: 500,
            });
        }
        Ok(self.lessons.borrow().clone())
    }

    async fn start_monitoring(&self, request: &StartRequest) -> lesson_watch::Result<()> {
        self.start_requests.borrow_mut().push(request.clone());
        if self.fail_start.get() {
            return Err(LessonWatchError::Status {
                endpoint: "/api/start_monitoring".to_string(),
                status: 500,
            });
        }
        let mut status = self.status.borrow_mut();
        status.is_running = true;
        status.lesson_count = request.lessons.len() as u32;
        Ok(())
    }

    async fn stop_monitoring(&self) -> lesson_watch::Result<()> {
        self.stop_calls.set(self.stop_calls.get() + 1);
        if self.fail_stop.get() {
            return Err(LessonWatchError::Http("connection reset".to_string()));
        }
        *self.status.borrow_mut() = MonitoringStatus::default();
        Ok(())
    }

    async fn monitoring_status(&self) -> lesson_watch::Result<MonitoringStatus> {
        Ok(self.status.borrow().clone())
    }
}

/// Keeps the latest view model of every panel
#[derive(Debug, Default)]
pub struct RecordingView {
    pub lessons: RefCell<LessonListView>,
    pub selection: RefCell<SelectionView>,
    pub status: RefCell<StatusView>,
    pub controls: Cell<ControlsView>,
    pub search_button: Cell<Option<ButtonView>>,
    pub fields: Cell<NotificationFieldsView>,
    pub toast: RefCell<Option<Toast>>,
}

impl View for RecordingView {
    fn show_lessons(&self, lessons: LessonListView) {
        *self.lessons.borrow_mut() = lessons;
    }

    fn show_selection(&self, selection: SelectionView) {
        *self.selection.borrow_mut() = selection;
    }

    fn show_status(&self, status: StatusView) {
        *self.status.borrow_mut() = status;
    }

    fn show_controls(&self, controls: ControlsView) {
        self.controls.set(controls);
    }

    fn show_search_button(&self, button: ButtonView) {
        self.search_button.set(Some(button));
    }

    fn show_notification_fields(&self, fields: NotificationFieldsView) {
        self.fields.set(fields);
    }

    fn show_toast(&self, toast: Option<Toast>) {
        *self.toast.borrow_mut() = toast;
    }
}

/// An element with one class, `data-*` attributes and an optional parent
#[derive(Debug, Clone)]
pub struct FakeElement {
    class: String,
    attributes: HashMap<String, String>,
    parent: Option<Rc<FakeElement>>,
}

impl FakeElement {
    pub fn new(class: &str, attributes: HashMap<String, String>) -> Self {
        Self {
            class: class.to_string(),
            attributes,
            parent: None,
        }
    }

    pub fn for_lesson(class: &str, lesson: &LessonRecord) -> Self {
        let attributes = [
            (LESSON_ID_ATTR, &lesson.id),
            (LESSON_NAME_ATTR, &lesson.name),
            (LESSON_TIME_ATTR, &lesson.time),
            (LESSON_STATUS_ATTR, &lesson.status),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
        Self::new(class, attributes)
    }

    pub fn child(&self, class: &str) -> Self {
        Self {
            class: class.to_string(),
            attributes: HashMap::new(),
            parent: Some(Rc::new(self.clone())),
        }
    }
}

impl ClickTarget for FakeElement {
    fn closest(&self, selector: &str) -> Option<Self> {
        if selector.strip_prefix('.') == Some(self.class.as_str()) {
            return Some(self.clone());
        }
        self.parent.as_ref()?.closest(selector)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

#[derive(Debug, Default, World)]
pub struct LessonWatchWorld {
    pub api: Option<Rc<FakeApi>>,
    pub view: Option<Rc<RecordingView>>,
    pub dashboard: Option<Rc<Dashboard>>,

    // Form input for the next search/start
    pub form: MonitorForm,

    // Rendering checks without a dashboard
    pub reported_status: Option<MonitoringStatus>,
    pub rendered_status: Option<StatusView>,
}

impl LessonWatchWorld {
    /// Build the dashboard on first use
    pub fn dashboard(&mut self) -> Rc<Dashboard> {
        if let Some(dashboard) = &self.dashboard {
            return Rc::clone(dashboard);
        }
        let api = Rc::clone(self.api.get_or_insert_with(|| Rc::new(FakeApi::default())));
        let view = Rc::clone(
            self.view
                .get_or_insert_with(|| Rc::new(RecordingView::default())),
        );
        let dashboard = Dashboard::new(
            ClientConfig::default(),
            api as Rc<dyn LessonApi>,
            Rc::new(TokioExecutor),
            view as Rc<dyn View>,
        );
        dashboard.initialize();
        self.dashboard = Some(Rc::clone(&dashboard));
        dashboard
    }

    pub fn api(&mut self) -> Rc<FakeApi> {
        Rc::clone(self.api.get_or_insert_with(|| Rc::new(FakeApi::default())))
    }

    pub fn view(&self) -> Rc<RecordingView> {
        Rc::clone(self.view.as_ref().expect("dashboard not created"))
    }

    pub fn fill_form(&mut self) {
        self.form = MonitorForm {
            user_id: "member".to_string(),
            password: "secret".to_string(),
            date: "2026-10-18".to_string(),
            method: NotifyMethod::Email,
            email: "me@example.com".to_string(),
            webhook_token: String::new(),
            interval: String::new(),
        };
    }

    pub fn lesson(&self, id: &str) -> LessonRecord {
        self.api
            .as_ref()
            .and_then(|api| api.lessons.borrow().iter().find(|l| l.id == id).cloned())
            .unwrap_or_else(|| panic!("no lesson with id {}", id))
    }
}

/// Let spawned poll and toast tasks run
pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}
