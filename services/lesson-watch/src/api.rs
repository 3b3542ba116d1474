//! Typed client for the lesson watch backend

use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::io::{HttpClient, HttpResponse};
use crate::model::{LessonRecord, MonitoringStatus, NotificationConfig, SelectedLesson};

pub const SCRAPE_LESSONS_PATH: &str = "/api/scrape_lessons";
pub const START_MONITORING_PATH: &str = "/api/start_monitoring";
pub const STOP_MONITORING_PATH: &str = "/api/stop_monitoring";
pub const MONITORING_STATUS_PATH: &str = "/api/monitoring_status";

/// Body of a scrape request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub user_id: String,
    pub password: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    lessons: Vec<LessonRecord>,
}

/// Body of a start-monitoring request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    pub user_id: String,
    pub password: String,
    pub date: String,
    pub lessons: Vec<SelectedLesson>,
    pub notification: NotificationConfig,
    /// Backend check interval in minutes
    pub interval: u32,
}

/// Backend operations used by the client
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait LessonApi {
    async fn scrape_lessons(&self, request: &ScrapeRequest) -> crate::Result<Vec<LessonRecord>>;

    async fn start_monitoring(&self, request: &StartRequest) -> crate::Result<()>;

    async fn stop_monitoring(&self) -> crate::Result<()>;

    async fn monitoring_status(&self) -> crate::Result<MonitoringStatus>;
}

/// [`LessonApi`] over JSON/HTTP
pub struct HttpLessonApi {
    base_url: String,
    http: Rc<dyn HttpClient>,
}

impl std::fmt::Debug for HttpLessonApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLessonApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpLessonApi {
    /// An empty `base_url` yields same-origin relative paths
    pub fn new(base_url: &str, http: Rc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ensure_success(path: &str, response: HttpResponse) -> crate::Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        tracing::debug!("{} -> {}: {}", path, response.status, response.body);
        Err(crate::LessonWatchError::Status {
            endpoint: path.to_string(),
            status: response.status,
        })
    }
}

#[async_trait(?Send)]
impl LessonApi for HttpLessonApi {
    async fn scrape_lessons(&self, request: &ScrapeRequest) -> crate::Result<Vec<LessonRecord>> {
        let body = serde_json::to_string(request)?;
        let response = self
            .http
            .post_json(&self.url(SCRAPE_LESSONS_PATH), &body)
            .await?;
        let response = ensure_success(SCRAPE_LESSONS_PATH, response)?;
        let parsed: ScrapeResponse = serde_json::from_str(&response.body)?;
        tracing::debug!(
            "Scraped {} lessons for {}",
            parsed.lessons.len(),
            request.date
        );
        Ok(parsed.lessons)
    }

    async fn start_monitoring(&self, request: &StartRequest) -> crate::Result<()> {
        let body = serde_json::to_string(request)?;
        let response = self
            .http
            .post_json(&self.url(START_MONITORING_PATH), &body)
            .await?;
        ensure_success(START_MONITORING_PATH, response)?;
        Ok(())
    }

    async fn stop_monitoring(&self) -> crate::Result<()> {
        let response = self.http.post(&self.url(STOP_MONITORING_PATH)).await?;
        ensure_success(STOP_MONITORING_PATH, response)?;
        Ok(())
    }

    async fn monitoring_status(&self) -> crate::Result<MonitoringStatus> {
        let response = self.http.get(&self.url(MONITORING_STATUS_PATH)).await?;
        let response = ensure_success(MONITORING_STATUS_PATH, response)?;
        Ok(serde_json::from_str(&response.body)?)
    }
}
