//! Page-level context tying the stores, the controller and the view together
//!
//! One `Dashboard` exists per page (or terminal run). Every UI event lands on
//! one of its methods, and every change is pushed back out through the
//! [`View`] as a fresh view model.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::api::LessonApi;
use crate::config::ClientConfig;
use crate::controller::{
    MonitorState, MonitoringController, StatusSink, Transition, TransitionOutcome,
};
use crate::delegation::{self, ClickTarget};
use crate::executor::Executor;
use crate::form::{MonitorForm, SearchForm};
use crate::model::{LessonRecord, MonitoringStatus, NotifyMethod};
use crate::render;
use crate::selection::{SelectionChange, SelectionStore};
use crate::toast::{Severity, Toast, ToastNotifier};
use crate::view::View;

pub struct Dashboard {
    config: ClientConfig,
    api: Rc<dyn LessonApi>,
    view: Rc<dyn View>,
    toasts: Rc<ToastNotifier>,
    controller: MonitoringController,
    selection: RefCell<SelectionStore>,
    lessons: RefCell<Vec<LessonRecord>>,
    method: Cell<NotifyMethod>,
    searching: Cell<bool>,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("controller", &self.controller)
            .field("selection", &self.selection)
            .field("lessons", &self.lessons.borrow().len())
            .field("searching", &self.searching.get())
            .finish()
    }
}

impl Dashboard {
    pub fn new(
        config: ClientConfig,
        api: Rc<dyn LessonApi>,
        executor: Rc<dyn Executor>,
        view: Rc<dyn View>,
    ) -> Rc<Self> {
        let toast_view = Rc::clone(&view);
        let toasts = ToastNotifier::new(
            Rc::clone(&executor),
            config.toast_duration(),
            move |toast| toast_view.show_toast(toast.cloned()),
        );
        let controller =
            MonitoringController::new(Rc::clone(&api), executor, config.poll_interval());

        Rc::new(Self {
            config,
            api,
            view,
            toasts,
            controller,
            selection: RefCell::new(SelectionStore::new()),
            lessons: RefCell::new(Vec::new()),
            method: Cell::new(NotifyMethod::default()),
            searching: Cell::new(false),
        })
    }

    /// Push the initial state of every panel to the view
    pub fn initialize(&self) {
        tracing::debug!("Initializing dashboard against '{}'", self.config.base_url);
        self.refresh_selection();
        self.view.show_status(render::StatusView::Stopped);
        self.view.show_search_button(render::search_button(false));
        self.view
            .show_notification_fields(render::notification_fields(self.method.get()));
    }

    /// Fetch the monitoring status once and show it. Failures leave the
    /// panel as it was.
    pub async fn load_status(&self) -> Option<MonitoringStatus> {
        let status = self.controller.refresh_status().await?;
        self.view.show_status(render::status_view(&status));
        Some(status)
    }

    /// Scrape lessons for the form's credentials and date
    pub async fn search(&self, form: SearchForm) {
        if self.searching.get() {
            tracing::debug!("Search ignored: already searching");
            return;
        }
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.toasts.notify(e.to_string(), Severity::Error);
                return;
            }
        };

        self.set_searching(true);
        match self.api.scrape_lessons(&request).await {
            Ok(lessons) => {
                let count = lessons.len();
                *self.lessons.borrow_mut() = lessons;
                self.refresh_lessons();
                self.toasts.notify(loaded_message(count), Severity::Success);
            }
            Err(e) => {
                tracing::warn!("Lesson search failed: {}", e);
                self.toasts.notify(format!("Error: {}", e), Severity::Error);
            }
        }
        self.set_searching(false);
    }

    /// Delegated click in the search results
    pub fn lesson_clicked<T: ClickTarget>(&self, target: &T) -> Option<SelectionChange> {
        let lesson = delegation::lesson_identity(target, delegation::LESSON_ITEM_SELECTOR)?;
        Some(self.toggle_lesson(lesson))
    }

    /// Delegated click in the watch list
    pub fn remove_clicked<T: ClickTarget>(&self, target: &T) -> Option<SelectionChange> {
        let lesson = delegation::lesson_identity(target, delegation::REMOVE_BUTTON_SELECTOR)?;
        Some(self.toggle_lesson(lesson))
    }

    pub fn toggle_lesson(&self, lesson: LessonRecord) -> SelectionChange {
        let name = lesson.name.clone();
        let change = self.selection.borrow_mut().toggle(lesson);
        match change {
            SelectionChange::Added => self
                .toasts
                .notify(format!("{} added to watch list", name), Severity::Success),
            SelectionChange::Removed => self
                .toasts
                .notify(format!("{} removed from watch list", name), Severity::Info),
        };
        self.refresh_selection();
        change
    }

    pub fn clear_selection(&self) {
        self.selection.borrow_mut().clear();
        self.toasts.notify("Watch list cleared", Severity::Info);
        self.refresh_selection();
    }

    pub fn notification_method_changed(&self, method: NotifyMethod) {
        self.method.set(method);
        self.view
            .show_notification_fields(render::notification_fields(method));
    }

    pub async fn start_monitoring(self: &Rc<Self>, form: MonitorForm) {
        if self.controller.pending().is_some() {
            tracing::debug!("Start ignored: transition already in flight");
            return;
        }
        if self.controller.state() == MonitorState::Running {
            tracing::debug!("Start ignored: already monitoring");
            return;
        }
        let request = {
            let selection = self.selection.borrow();
            form.validate(&selection, self.config.default_check_interval_minutes)
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                self.toasts.notify(e.to_string(), Severity::Error);
                return;
            }
        };

        self.show_in_flight(Transition::Starting);
        let outcome = self.controller.start(&request, self.status_sink()).await;
        self.refresh_controls();
        match outcome {
            TransitionOutcome::Done => {
                self.toasts.notify("Monitoring started", Severity::Success);
                self.load_status().await;
            }
            TransitionOutcome::Busy => {}
            TransitionOutcome::Failed(e) => {
                self.toasts.notify(format!("Error: {}", e), Severity::Error);
            }
        }
    }

    pub async fn stop_monitoring(&self) {
        if self.controller.pending().is_some() {
            tracing::debug!("Stop ignored: transition already in flight");
            return;
        }

        self.show_in_flight(Transition::Stopping);
        let outcome = self.controller.stop().await;
        self.refresh_controls();
        match outcome {
            TransitionOutcome::Done => {
                self.toasts.notify("Monitoring stopped", Severity::Info);
                self.load_status().await;
            }
            TransitionOutcome::Busy => {}
            TransitionOutcome::Failed(e) => {
                self.toasts.notify(format!("Error: {}", e), Severity::Error);
            }
        }
    }

    pub fn monitor_state(&self) -> MonitorState {
        self.controller.state()
    }

    pub fn active_polls(&self) -> usize {
        self.controller.active_polls()
    }

    /// Results of the last successful search
    pub fn lessons(&self) -> Vec<LessonRecord> {
        self.lessons.borrow().clone()
    }

    pub fn selected_lessons(&self) -> Vec<LessonRecord> {
        self.selection.borrow().list().to_vec()
    }

    pub fn current_toast(&self) -> Option<Toast> {
        self.toasts.current()
    }

    pub fn is_searching(&self) -> bool {
        self.searching.get()
    }

    fn status_sink(self: &Rc<Self>) -> StatusSink {
        let dashboard: Weak<Self> = Rc::downgrade(self);
        Rc::new(move |status: &MonitoringStatus| {
            if let Some(dashboard) = dashboard.upgrade() {
                dashboard.view.show_status(render::status_view(status));
            }
        })
    }

    fn set_searching(&self, busy: bool) {
        self.searching.set(busy);
        self.view.show_search_button(render::search_button(busy));
    }

    fn show_in_flight(&self, transition: Transition) {
        let selection_empty = self.selection.borrow().is_empty();
        self.view.show_controls(render::controls(
            self.controller.state(),
            Some(transition),
            selection_empty,
        ));
    }

    fn refresh_lessons(&self) {
        let list = render::lesson_list(&self.lessons.borrow(), &self.selection.borrow());
        self.view.show_lessons(list);
    }

    /// Redraw everything that depends on the selection
    fn refresh_selection(&self) {
        let selection = render::selection_list(&self.selection.borrow());
        self.view.show_selection(selection);
        self.refresh_lessons();
        self.refresh_controls();
    }

    fn refresh_controls(&self) {
        let selection_empty = self.selection.borrow().is_empty();
        self.view.show_controls(render::controls(
            self.controller.state(),
            self.controller.pending(),
            selection_empty,
        ));
    }
}

fn loaded_message(count: usize) -> String {
    match count {
        1 => "Loaded 1 lesson".to_string(),
        n => format!("Loaded {} lessons", n),
    }
}
