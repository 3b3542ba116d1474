//! The surface a front end renders into

use crate::render::{
    ButtonView, ControlsView, LessonListView, NotificationFieldsView, SelectionView, StatusView,
};
use crate::toast::Toast;

/// Receives fresh view models whenever client state changes.
///
/// Each call replaces what was shown before; implementations keep no
/// history.
pub trait View {
    fn show_lessons(&self, lessons: LessonListView);

    fn show_selection(&self, selection: SelectionView);

    fn show_status(&self, status: StatusView);

    fn show_controls(&self, controls: ControlsView);

    fn show_search_button(&self, button: ButtonView);

    fn show_notification_fields(&self, fields: NotificationFieldsView);

    /// `None` hides the toast
    fn show_toast(&self, toast: Option<Toast>);
}
