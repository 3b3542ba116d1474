//! Terminal front end: a [`View`] that prints, and the subcommand drivers

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use crate::api::{HttpLessonApi, LessonApi};
use crate::config::ClientConfig;
use crate::controller::MonitorState;
use crate::dashboard::Dashboard;
use crate::executor::TokioExecutor;
use crate::form::{MonitorForm, SearchForm};
use crate::io::ReqwestHttpClient;
use crate::model::LessonRecord;
use crate::render::{
    ButtonView, ControlsView, LessonListView, NotificationFieldsView, SelectionView, StatusView,
};
use crate::toast::{Severity, Toast};
use crate::view::View;
use crate::LessonWatchError;

/// Prints panels and toasts to stdout, error toasts to stderr.
///
/// The lesson list is printed only when the lessons themselves change, not
/// when a selection toggle redraws the same rows.
pub struct ConsoleView {
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
    printed_lessons: RefCell<Option<Vec<LessonRecord>>>,
}

impl fmt::Debug for ConsoleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleView")
            .field("printed_lessons", &self.printed_lessons)
            .finish()
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl ConsoleView {
    pub fn with_writers(out: impl Write + 'static, err: impl Write + 'static) -> Self {
        Self {
            out: RefCell::new(Box::new(out)),
            err: RefCell::new(Box::new(err)),
            printed_lessons: RefCell::new(None),
        }
    }

    fn print(&self, stream: &RefCell<Box<dyn Write>>, text: &str) {
        if let Err(e) = writeln!(stream.borrow_mut(), "{}", text.trim_end()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl View for ConsoleView {
    fn show_lessons(&self, lessons: LessonListView) {
        let records: Vec<LessonRecord> = match &lessons {
            LessonListView::Empty => Vec::new(),
            LessonListView::List(items) => items.iter().map(|item| item.lesson.clone()).collect(),
        };
        if self.printed_lessons.borrow().as_ref() == Some(&records) {
            tracing::trace!("Lesson list unchanged");
            return;
        }
        self.print(&self.out, &lessons.to_string());
        *self.printed_lessons.borrow_mut() = Some(records);
    }

    fn show_selection(&self, selection: SelectionView) {
        tracing::debug!("Watch list:\n{}", selection);
    }

    fn show_status(&self, status: StatusView) {
        self.print(&self.out, &status.to_string());
    }

    fn show_controls(&self, controls: ControlsView) {
        tracing::trace!("Controls: start={:?} stop={:?}", controls.start, controls.stop);
    }

    fn show_search_button(&self, button: ButtonView) {
        tracing::trace!("Search button: {:?}", button);
    }

    fn show_notification_fields(&self, fields: NotificationFieldsView) {
        tracing::trace!("Notification fields: {:?}", fields);
    }

    fn show_toast(&self, toast: Option<Toast>) {
        match toast {
            Some(toast) if toast.severity == Severity::Error => {
                self.print(&self.err, &toast.to_string())
            }
            Some(toast) => self.print(&self.out, &toast.to_string()),
            None => {}
        }
    }
}

/// Arguments of the `watch` subcommand
#[derive(Debug, Clone)]
pub struct WatchArgs {
    pub form: MonitorForm,
    pub lesson_ids: Vec<String>,
}

/// A dashboard whose panels start blank: a terminal run only prints what it
/// actually fetched.
fn console_dashboard(config: ClientConfig) -> Rc<Dashboard> {
    let http = Rc::new(ReqwestHttpClient::new());
    let api: Rc<dyn LessonApi> = Rc::new(HttpLessonApi::new(&config.base_url, http));
    Dashboard::new(
        config,
        api,
        Rc::new(TokioExecutor),
        Rc::new(ConsoleView::default()),
    )
}

/// Scrape and print the lessons for one date
pub async fn search(config: ClientConfig, form: SearchForm) -> crate::Result<()> {
    let dashboard = console_dashboard(config);
    dashboard.search(form).await;
    Ok(())
}

/// Print the monitoring status once
pub async fn status(config: ClientConfig) -> crate::Result<()> {
    let dashboard = console_dashboard(config);
    report_status(&dashboard).await
}

async fn report_status(dashboard: &Dashboard) -> crate::Result<()> {
    match dashboard.load_status().await {
        Some(_) => Ok(()),
        None => Err(LessonWatchError::StatusUnavailable),
    }
}

pub async fn stop(config: ClientConfig) -> crate::Result<()> {
    let http = ReqwestHttpClient::new();
    let api = HttpLessonApi::new(&config.base_url, Rc::new(http));
    api.stop_monitoring().await?;
    tracing::info!("Monitoring stopped");
    Ok(())
}

/// Put each requested lesson on the watch list once. Ids repeated on the
/// command line, or already selected, are left alone.
fn select_lessons(dashboard: &Dashboard, lesson_ids: &[String], date: &str) {
    let lessons = dashboard.lessons();
    for id in lesson_ids {
        if dashboard.selected_lessons().iter().any(|lesson| &lesson.id == id) {
            tracing::debug!("Lesson '{}' already selected", id);
            continue;
        }
        match lessons.iter().find(|lesson| &lesson.id == id) {
            Some(lesson) => {
                dashboard.toggle_lesson(lesson.clone());
            }
            None => tracing::warn!("Lesson '{}' not found on {}", id, date),
        }
    }
}

/// Search, select the requested lessons and monitor until Ctrl-C
pub async fn watch(config: ClientConfig, args: WatchArgs) -> crate::Result<()> {
    let dashboard = console_dashboard(config);

    dashboard
        .search(SearchForm {
            user_id: args.form.user_id.clone(),
            password: args.form.password.clone(),
            date: args.form.date.clone(),
        })
        .await;

    select_lessons(&dashboard, &args.lesson_ids, &args.form.date);

    dashboard.start_monitoring(args.form).await;
    if dashboard.monitor_state() != MonitorState::Running {
        return Err(LessonWatchError::NotStarted);
    }

    tracing::info!("Watching, press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down");
    dashboard.stop_monitoring().await;
    Ok(())
}
