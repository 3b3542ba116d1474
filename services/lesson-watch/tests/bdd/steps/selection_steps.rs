//! BDD step definitions for the watch list and toasts

use std::collections::HashMap;

use cucumber::{given, then, when};
use lesson_watch::delegation::{LESSON_ID_ATTR, LESSON_NAME_ATTR, LESSON_TIME_ATTR};
use lesson_watch::render::SelectionView;
use lesson_watch::toast::Severity;

use crate::world::{FakeElement, LessonWatchWorld};

fn severity(name: &str) -> Severity {
    match name {
        "info" => Severity::Info,
        "success" => Severity::Success,
        "error" => Severity::Error,
        other => panic!("Unknown severity: {}", other),
    }
}

#[given(expr = "I have selected lesson {string}")]
fn selected_lesson(world: &mut LessonWatchWorld, id: String) {
    click_lesson(world, id);
}

#[when(expr = "I click lesson {string}")]
fn click_lesson(world: &mut LessonWatchWorld, id: String) {
    let lesson = world.lesson(&id);
    let dashboard = world.dashboard();
    let row = FakeElement::for_lesson("lesson-item", &lesson);
    let name = row.child("lesson-name");
    assert!(dashboard.lesson_clicked(&name).is_some());
}

#[when(expr = "I click the remove button of lesson {string}")]
fn click_remove(world: &mut LessonWatchWorld, id: String) {
    let lesson = world.lesson(&id);
    let dashboard = world.dashboard();
    let button = FakeElement::for_lesson("remove-lesson-btn", &lesson);
    assert!(dashboard.remove_clicked(&button).is_some());
}

#[when("I click the lesson list outside any lesson")]
fn click_outside(world: &mut LessonWatchWorld) {
    let dashboard = world.dashboard();
    let list = FakeElement::new("lesson-list", HashMap::new());
    assert!(dashboard.lesson_clicked(&list.child("header")).is_none());
}

#[when(expr = "I click a lesson row without a status for {string}")]
fn click_incomplete_row(world: &mut LessonWatchWorld, id: String) {
    let lesson = world.lesson(&id);
    let dashboard = world.dashboard();
    let attributes = HashMap::from([
        (LESSON_ID_ATTR.to_string(), lesson.id.clone()),
        (LESSON_NAME_ATTR.to_string(), lesson.name.clone()),
        (LESSON_TIME_ATTR.to_string(), lesson.time.clone()),
    ]);
    let row = FakeElement::new("lesson-item", attributes);
    assert!(dashboard.lesson_clicked(&row).is_none());
}

#[when("I clear the watch list")]
fn clear_watch_list(world: &mut LessonWatchWorld) {
    world.dashboard().clear_selection();
}

#[then(expr = "the watch list contains {int} lesson(s)")]
fn watch_list_count(world: &mut LessonWatchWorld, count: usize) {
    let dashboard = world.dashboard();
    assert_eq!(dashboard.selected_lessons().len(), count);

    let view = world.view();
    match &*view.selection.borrow() {
        SelectionView::Empty => assert_eq!(count, 0),
        SelectionView::List(lessons) => assert_eq!(lessons.len(), count),
    };
}

#[then(expr = "the watch list is {string}")]
fn watch_list_order(world: &mut LessonWatchWorld, ids: String) {
    let selected: Vec<String> = world
        .dashboard()
        .selected_lessons()
        .into_iter()
        .map(|l| l.id)
        .collect();
    let expected: Vec<String> = ids.split(',').map(|s| s.trim().to_string()).collect();
    assert_eq!(selected, expected);
}

#[then(expr = "lesson {string} is highlighted in the lesson list")]
fn lesson_highlighted(world: &mut LessonWatchWorld, id: String) {
    match &*world.view().lessons.borrow() {
        lesson_watch::render::LessonListView::List(items) => {
            assert!(items.iter().any(|item| item.lesson.id == id && item.selected));
        }
        other => panic!("expected lesson list, got {:?}", other),
    }
}

#[then(expr = "a(n) {word} toast says {string}")]
fn toast_says(world: &mut LessonWatchWorld, kind: String, message: String) {
    let view = world.view();
    let toast = view.toast.borrow().clone().expect("no toast shown");
    assert_eq!(toast.severity, severity(&kind));
    assert_eq!(toast.message, message);
}

#[then(expr = "a(n) {word} toast starts with {string}")]
fn toast_starts_with(world: &mut LessonWatchWorld, kind: String, prefix: String) {
    let view = world.view();
    let toast = view.toast.borrow().clone().expect("no toast shown");
    assert_eq!(toast.severity, severity(&kind));
    assert!(toast.message.starts_with(&prefix), "{}", toast.message);
}
