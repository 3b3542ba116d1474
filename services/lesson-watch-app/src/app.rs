//! Main App component

use std::rc::Rc;

use leptos::prelude::*;
use lesson_watch::api::{HttpLessonApi, LessonApi};
use lesson_watch::form::{self, MonitorForm, SearchForm};
use lesson_watch::{ClientConfig, Dashboard, NotifyMethod};

use crate::components::lesson_list::LessonList;
use crate::components::monitor_controls::MonitorControls;
use crate::components::notification_settings::NotificationSettings;
use crate::components::search_form::SearchPanel;
use crate::components::status_panel::StatusPanel;
use crate::components::toast::ToastBanner;
use crate::components::watch_list::WatchList;
use crate::executor::LeptosExecutor;
use crate::http::BrowserHttpClient;
use crate::view::LeptosView;

/// The page's dashboard, reachable from event handlers
pub type DashboardHandle = StoredValue<Rc<Dashboard>, LocalStorage>;

/// Raw form input, one signal per field
#[derive(Debug, Clone, Copy)]
pub struct FormState {
    pub user_id: RwSignal<String>,
    pub password: RwSignal<String>,
    pub date: RwSignal<String>,
    pub method: RwSignal<NotifyMethod>,
    pub email: RwSignal<String>,
    pub webhook_token: RwSignal<String>,
    pub interval: RwSignal<String>,
}

impl FormState {
    pub fn new(default_interval: u32) -> Self {
        Self {
            user_id: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            date: RwSignal::new(form::today()),
            method: RwSignal::new(NotifyMethod::default()),
            email: RwSignal::new(String::new()),
            webhook_token: RwSignal::new(String::new()),
            interval: RwSignal::new(default_interval.to_string()),
        }
    }

    pub fn search_form(&self) -> SearchForm {
        SearchForm {
            user_id: self.user_id.get_untracked(),
            password: self.password.get_untracked(),
            date: self.date.get_untracked(),
        }
    }

    pub fn monitor_form(&self) -> MonitorForm {
        MonitorForm {
            user_id: self.user_id.get_untracked(),
            password: self.password.get_untracked(),
            date: self.date.get_untracked(),
            method: self.method.get_untracked(),
            email: self.email.get_untracked(),
            webhook_token: self.webhook_token.get_untracked(),
            interval: self.interval.get_untracked(),
        }
    }
}

/// Backend on the page's own origin
fn browser_config() -> ClientConfig {
    #[cfg(feature = "csr")]
    {
        match crate::dom::page_origin() {
            Some(origin) => ClientConfig {
                base_url: origin,
                ..ClientConfig::default()
            },
            None => ClientConfig::same_origin(),
        }
    }

    #[cfg(not(feature = "csr"))]
    {
        ClientConfig::same_origin()
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = browser_config();
    let panels = LeptosView::new();
    let form = FormState::new(config.default_check_interval_minutes);

    let api: Rc<dyn LessonApi> = Rc::new(HttpLessonApi::new(
        &config.base_url,
        Rc::new(BrowserHttpClient),
    ));
    let dashboard = Dashboard::new(config, api, Rc::new(LeptosExecutor), Rc::new(panels));
    dashboard.initialize();

    let startup = Rc::clone(&dashboard);
    leptos::task::spawn_local(async move {
        startup.load_status().await;
    });

    let dashboard: DashboardHandle = StoredValue::new_local(dashboard);

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>"🧘 Lesson Watch"</h1>
            <SearchPanel form=form button=panels.search_button dashboard=dashboard />
            <LessonList lessons=panels.lessons dashboard=dashboard />
            <WatchList selection=panels.selection dashboard=dashboard />
            <NotificationSettings form=form fields=panels.fields dashboard=dashboard />
            <MonitorControls form=form controls=panels.controls dashboard=dashboard />
            <StatusPanel status=panels.status />
            <ToastBanner toast=panels.toast />
        </main>
    }
}
