//! Search and monitoring form input, and the validation that gates requests

use chrono::Local;

use crate::api::{ScrapeRequest, StartRequest};
use crate::error::ValidationError;
use crate::model::{NotificationConfig, NotifyMethod};
use crate::selection::SelectionStore;

/// Lesson search form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub user_id: String,
    pub password: String,
    pub date: String,
}

impl SearchForm {
    pub fn validate(&self) -> Result<ScrapeRequest, ValidationError> {
        if is_blank(&self.user_id) || is_blank(&self.password) || is_blank(&self.date) {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(ScrapeRequest {
            user_id: self.user_id.clone(),
            password: self.password.clone(),
            date: self.date.clone(),
        })
    }
}

/// Everything the start button reads from the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonitorForm {
    pub user_id: String,
    pub password: String,
    pub date: String,
    pub method: NotifyMethod,
    pub email: String,
    pub webhook_token: String,
    /// Raw check interval input, in minutes
    pub interval: String,
}

impl MonitorForm {
    /// Build a start request, checking credentials, then the selection, then
    /// the field the chosen notification method needs.
    pub fn validate(
        &self,
        selection: &SelectionStore,
        default_interval: u32,
    ) -> Result<StartRequest, ValidationError> {
        if is_blank(&self.user_id) || is_blank(&self.password) || is_blank(&self.date) {
            return Err(ValidationError::MissingCredentials);
        }
        if selection.is_empty() {
            return Err(ValidationError::EmptySelection);
        }
        let notification = match self.method {
            NotifyMethod::Email if is_blank(&self.email) => {
                return Err(ValidationError::MissingEmailAddress)
            }
            NotifyMethod::Email => NotificationConfig::Email {
                address: self.email.trim().to_string(),
            },
            NotifyMethod::Webhook if is_blank(&self.webhook_token) => {
                return Err(ValidationError::MissingWebhookToken)
            }
            NotifyMethod::Webhook => NotificationConfig::Webhook {
                token: self.webhook_token.trim().to_string(),
            },
        };

        Ok(StartRequest {
            user_id: self.user_id.clone(),
            password: self.password.clone(),
            date: self.date.clone(),
            lessons: selection.list().to_vec(),
            notification,
            interval: parse_interval(&self.interval, default_interval),
        })
    }
}

/// Parse the check interval in minutes. Blank, zero or garbage gives `default`.
pub fn parse_interval(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(minutes) if minutes >= 1 => minutes,
        _ => default,
    }
}

/// Today's date as `YYYY-MM-DD`, the date input's initial value
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
