//! Lesson, notification and monitoring status types shared with the backend

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A bookable lesson slot as scraped by the backend.
///
/// `status` is kept verbatim so it can be echoed back when monitoring starts;
/// use [`LessonRecord::status_kind`] for display decisions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LessonRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: String,
}

/// A lesson on the watch list. Same shape as a scraped record.
pub type SelectedLesson = LessonRecord;

impl LessonRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        time: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time: time.into(),
            status: status.into(),
        }
    }

    pub fn status_kind(&self) -> LessonStatus {
        LessonStatus::classify(&self.status)
    }
}

/// Availability of a lesson slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonStatus {
    Available,
    FewLeft,
    Full,
    Unknown,
}

impl LessonStatus {
    /// Classify a raw status string. Anything unrecognised is `Unknown`.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.trim();
        match raw {
            "空きあり" | "空き有り" => return LessonStatus::Available,
            "残りわずか" => return LessonStatus::FewLeft,
            "満員" | "満席" => return LessonStatus::Full,
            _ => {}
        }
        match raw.to_ascii_lowercase().as_str() {
            "available" => LessonStatus::Available,
            "few_left" | "few-left" => LessonStatus::FewLeft,
            "full" => LessonStatus::Full,
            _ => LessonStatus::Unknown,
        }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonStatus::Available => write!(f, "Available"),
            LessonStatus::FewLeft => write!(f, "Few left"),
            LessonStatus::Full => write!(f, "Full"),
            LessonStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Which channel the backend should notify through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyMethod {
    #[default]
    Email,
    Webhook,
}

impl NotifyMethod {
    /// Value used by the method selector and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyMethod::Email => "email",
            NotifyMethod::Webhook => "line",
        }
    }
}

impl FromStr for NotifyMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(NotifyMethod::Email),
            "line" | "webhook" => Ok(NotifyMethod::Webhook),
            other => Err(format!("unknown notification method '{}'", other)),
        }
    }
}

/// Notification settings sent with a start request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum NotificationConfig {
    #[serde(rename = "email")]
    Email {
        #[serde(rename = "email")]
        address: String,
    },
    #[serde(rename = "line")]
    Webhook {
        #[serde(rename = "lineToken")]
        token: String,
    },
}

impl NotificationConfig {
    pub fn method(&self) -> NotifyMethod {
        match self {
            NotificationConfig::Email { .. } => NotifyMethod::Email,
            NotificationConfig::Webhook { .. } => NotifyMethod::Webhook,
        }
    }
}

/// A wall-clock instant reported by the backend, in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub NaiveDateTime);

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

impl Timestamp {
    /// Parse an RFC 3339 string, a naive `YYYY-MM-DD HH:MM:SS` string or
    /// epoch milliseconds.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            serde_json::Value::Number(n) => n.as_i64().and_then(Self::from_epoch_ms),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.with_timezone(&Local).naive_local()));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .map(Self)
    }

    pub fn from_epoch_ms(ms: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).map(|dt| Self(dt.with_timezone(&Local).naive_local()))
    }

    /// `HH:MM:SS`
    pub fn time_of_day(&self) -> String {
        self.0.format("%H:%M:%S").to_string()
    }

    /// `YYYY/MM/DD HH:MM:SS`
    pub fn date_time(&self) -> String {
        self.0.format("%Y/%m/%d %H:%M:%S").to_string()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Timestamp::from_json))
}

/// Monitoring status as returned by /api/monitoring_status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringStatus {
    #[serde(default, alias = "monitoring")]
    pub is_running: bool,
    #[serde(default)]
    pub lesson_count: u32,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_check: Option<Timestamp>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_check: Option<Timestamp>,
}
