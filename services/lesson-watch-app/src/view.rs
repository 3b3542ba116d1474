//! Signals the dashboard renders into

use leptos::prelude::*;
use lesson_watch::render::{
    self, ButtonView, ControlsView, LessonListView, NotificationFieldsView, SelectionView,
    StatusView,
};
use lesson_watch::toast::Toast;
use lesson_watch::View;

/// One signal per panel. Components read these; only the dashboard writes.
#[derive(Debug, Clone, Copy)]
pub struct LeptosView {
    pub lessons: RwSignal<LessonListView>,
    pub selection: RwSignal<SelectionView>,
    pub status: RwSignal<StatusView>,
    pub controls: RwSignal<ControlsView>,
    pub search_button: RwSignal<ButtonView>,
    pub fields: RwSignal<NotificationFieldsView>,
    pub toast: RwSignal<Option<Toast>>,
}

impl LeptosView {
    pub fn new() -> Self {
        Self {
            lessons: RwSignal::new(LessonListView::default()),
            selection: RwSignal::new(SelectionView::default()),
            status: RwSignal::new(StatusView::default()),
            controls: RwSignal::new(ControlsView::default()),
            search_button: RwSignal::new(render::search_button(false)),
            fields: RwSignal::new(NotificationFieldsView::default()),
            toast: RwSignal::new(None),
        }
    }
}

impl Default for LeptosView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for LeptosView {
    fn show_lessons(&self, lessons: LessonListView) {
        self.lessons.set(lessons);
    }

    fn show_selection(&self, selection: SelectionView) {
        self.selection.set(selection);
    }

    fn show_status(&self, status: StatusView) {
        self.status.set(status);
    }

    fn show_controls(&self, controls: ControlsView) {
        self.controls.set(controls);
    }

    fn show_search_button(&self, button: ButtonView) {
        self.search_button.set(button);
    }

    fn show_notification_fields(&self, fields: NotificationFieldsView) {
        self.fields.set(fields);
    }

    fn show_toast(&self, toast: Option<Toast>) {
        self.toast.set(toast);
    }
}
