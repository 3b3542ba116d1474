//! View models for the lesson list, watch list, status panel and controls
//!
//! Everything here is a pure function of client state. Front ends turn these
//! into markup (the Leptos app) or plain text (the `Display` impls, used by
//! the terminal front end).

use std::fmt;

use crate::controller::{MonitorState, Transition};
use crate::model::{LessonRecord, LessonStatus, MonitoringStatus, NotifyMethod};
use crate::selection::SelectionStore;

pub const NO_LESSONS_MESSAGE: &str = "No matching lessons found";
pub const NOTHING_SELECTED_MESSAGE: &str = "Select lessons to watch";
pub const NEXT_CHECK_PLACEHOLDER: &str = "Not scheduled";
pub const LAST_CHECK_PLACEHOLDER: &str = "Never";

const MISSING_FIELD: &str = "N/A";

/// Availability badge for a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: LessonStatus,
    pub label: &'static str,
    pub class: &'static str,
}

impl StatusBadge {
    pub fn for_status(status: LessonStatus) -> Self {
        let (label, class) = match status {
            LessonStatus::Available => ("✅ Available", "status-available"),
            LessonStatus::FewLeft => ("⚠️ Few left", "status-warning"),
            LessonStatus::Full => ("❌ Full", "status-full"),
            LessonStatus::Unknown => ("❓ Unknown", "status-unknown"),
        };
        Self {
            status,
            label,
            class,
        }
    }
}

/// One row of the search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonItemView {
    pub lesson: LessonRecord,
    pub badge: StatusBadge,
    pub selected: bool,
}

impl LessonItemView {
    pub fn time_label(&self) -> &str {
        non_empty_or(&self.lesson.time, MISSING_FIELD)
    }

    pub fn name_label(&self) -> &str {
        non_empty_or(&self.lesson.name, MISSING_FIELD)
    }
}

/// Search results panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LessonListView {
    #[default]
    Empty,
    List(Vec<LessonItemView>),
}

/// Build the search results panel, flagging lessons already on the watch list
pub fn lesson_list(lessons: &[LessonRecord], selection: &SelectionStore) -> LessonListView {
    if lessons.is_empty() {
        return LessonListView::Empty;
    }
    LessonListView::List(
        lessons
            .iter()
            .map(|lesson| LessonItemView {
                badge: StatusBadge::for_status(lesson.status_kind()),
                selected: selection.contains(&lesson.id),
                lesson: lesson.clone(),
            })
            .collect(),
    )
}

/// Watch list panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionView {
    #[default]
    Empty,
    List(Vec<LessonRecord>),
}

pub fn selection_list(selection: &SelectionStore) -> SelectionView {
    if selection.is_empty() {
        SelectionView::Empty
    } else {
        SelectionView::List(selection.list().to_vec())
    }
}

/// Monitoring status panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Stopped,
    Running {
        lesson_count: u32,
        next_check: String,
        last_check: String,
    },
}

impl StatusView {
    pub fn class(&self) -> &'static str {
        match self {
            StatusView::Stopped => "status-card status-stopped",
            StatusView::Running { .. } => "status-card status-running",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatusView::Stopped => "⏸️ Monitoring stopped",
            StatusView::Running { .. } => "🔄 Monitoring active",
        }
    }
}

/// A stopped status ignores every other field.
pub fn status_view(status: &MonitoringStatus) -> StatusView {
    if !status.is_running {
        return StatusView::Stopped;
    }
    StatusView::Running {
        lesson_count: status.lesson_count,
        next_check: status
            .next_check
            .map(|t| t.time_of_day())
            .unwrap_or_else(|| NEXT_CHECK_PLACEHOLDER.to_string()),
        last_check: status
            .last_check
            .map(|t| t.date_time())
            .unwrap_or_else(|| LAST_CHECK_PLACEHOLDER.to_string()),
    }
}

/// Label and state of a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub visible: bool,
    pub enabled: bool,
}

/// Start/stop buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsView {
    pub start: ButtonView,
    pub stop: ButtonView,
}

impl Default for ControlsView {
    fn default() -> Self {
        controls(MonitorState::Stopped, None, true)
    }
}

/// Only one of start/stop is visible. Start needs a non-empty selection, and
/// both are disabled while a transition is in flight.
pub fn controls(
    state: MonitorState,
    pending: Option<Transition>,
    selection_empty: bool,
) -> ControlsView {
    let running = state == MonitorState::Running;
    let start_label = if pending == Some(Transition::Starting) {
        "🔄 Starting..."
    } else {
        "🚀 Start monitoring"
    };
    let stop_label = if pending == Some(Transition::Stopping) {
        "🔄 Stopping..."
    } else {
        "⏹️ Stop monitoring"
    };
    ControlsView {
        start: ButtonView {
            label: start_label,
            visible: !running,
            enabled: !running && pending.is_none() && !selection_empty,
        },
        stop: ButtonView {
            label: stop_label,
            visible: running,
            enabled: running && pending.is_none(),
        },
    }
}

/// Search submit button
pub fn search_button(busy: bool) -> ButtonView {
    ButtonView {
        label: if busy {
            "🔄 Searching..."
        } else {
            "🔍 Search lessons"
        },
        visible: true,
        enabled: !busy,
    }
}

/// Which method-specific notification inputs are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationFieldsView {
    pub email_visible: bool,
    pub webhook_visible: bool,
}

impl Default for NotificationFieldsView {
    fn default() -> Self {
        notification_fields(NotifyMethod::default())
    }
}

pub fn notification_fields(method: NotifyMethod) -> NotificationFieldsView {
    NotificationFieldsView {
        email_visible: method == NotifyMethod::Email,
        webhook_visible: method == NotifyMethod::Webhook,
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

impl fmt::Display for LessonListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonListView::Empty => write!(f, "❌ {}", NO_LESSONS_MESSAGE),
            LessonListView::List(items) => {
                for item in items {
                    let marker = if item.selected { "*" } else { " " };
                    writeln!(
                        f,
                        "{} [{}] ⏰ {}  📚 {}  {}",
                        marker,
                        item.lesson.id,
                        item.time_label(),
                        item.name_label(),
                        item.badge.label
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for SelectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionView::Empty => write!(f, "📝 {}", NOTHING_SELECTED_MESSAGE),
            SelectionView::List(lessons) => {
                for lesson in lessons {
                    writeln!(f, "⏰ {}  📚 {}", lesson.time, lesson.name)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusView::Stopped => {
                write!(f, "{}: no lessons are being watched", self.title())
            }
            StatusView::Running {
                lesson_count,
                next_check,
                last_check,
            } => write!(
                f,
                "{}: 📊 watching {} lessons, ⏱️ next check {}, 📧 last check {}",
                self.title(),
                lesson_count,
                next_check,
                last_check
            ),
        }
    }
}
