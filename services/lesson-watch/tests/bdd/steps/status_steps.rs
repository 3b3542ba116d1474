//! BDD step definitions for rendering backend status

use cucumber::{given, then, when};
use lesson_watch::model::{LessonStatus, MonitoringStatus};
use lesson_watch::render::{self, StatusBadge, StatusView};

use crate::world::LessonWatchWorld;

#[given(expr = "the backend reports the status {string}")]
fn backend_reports(world: &mut LessonWatchWorld, json: String) {
    let status: MonitoringStatus = serde_json::from_str(&json).expect("invalid status JSON");
    world.reported_status = Some(status);
}

#[when("the status panel is rendered")]
fn render_status(world: &mut LessonWatchWorld) {
    let status = world.reported_status.as_ref().expect("no status reported");
    world.rendered_status = Some(render::status_view(status));
}

#[then("the panel says monitoring is stopped")]
fn panel_stopped(world: &mut LessonWatchWorld) {
    let rendered = world.rendered_status.as_ref().expect("not rendered");
    assert_eq!(*rendered, StatusView::Stopped);
    assert_eq!(rendered.class(), "status-card status-stopped");
}

#[then(expr = "the panel shows {int} lessons, next check {string} and last check {string}")]
fn panel_running(world: &mut LessonWatchWorld, count: u32, next: String, last: String) {
    match world.rendered_status.as_ref().expect("not rendered") {
        StatusView::Running {
            lesson_count,
            next_check,
            last_check,
        } => {
            assert_eq!(*lesson_count, count);
            assert_eq!(*next_check, next);
            assert_eq!(*last_check, last);
        }
        StatusView::Stopped => panic!("panel shows stopped"),
    }
}

#[then(expr = "a lesson with status {string} gets the badge class {string}")]
fn badge_class(_world: &mut LessonWatchWorld, status: String, class: String) {
    let badge = StatusBadge::for_status(LessonStatus::classify(&status));
    assert_eq!(badge.class, class);
}
