//! BDD step definitions for lesson search

use cucumber::{given, then, when};
use lesson_watch::form::SearchForm;
use lesson_watch::model::LessonRecord;
use lesson_watch::render::{LessonListView, NO_LESSONS_MESSAGE};

use crate::world::LessonWatchWorld;

#[given(expr = "the studio lists lesson {string} named {string} at {string} with status {string}")]
fn studio_lists_lesson(
    world: &mut LessonWatchWorld,
    id: String,
    name: String,
    time: String,
    status: String,
) {
    world
        .api()
        .lessons
        .borrow_mut()
        .push(LessonRecord::new(id, name, time, status));
}

#[given("the studio lists no lessons")]
fn studio_lists_nothing(world: &mut LessonWatchWorld) {
    world.api().lessons.borrow_mut().clear();
}

#[given("the studio site is down")]
fn studio_down(world: &mut LessonWatchWorld) {
    world.api().fail_scrape.set(true);
}

#[given("I have entered my credentials")]
fn entered_credentials(world: &mut LessonWatchWorld) {
    world.fill_form();
}

#[given("I have left the password empty")]
fn password_empty(world: &mut LessonWatchWorld) {
    world.fill_form();
    world.form.password.clear();
}

#[given("I have searched for lessons")]
async fn searched(world: &mut LessonWatchWorld) {
    search(world).await;
}

#[when("I search for lessons")]
async fn search(world: &mut LessonWatchWorld) {
    let dashboard = world.dashboard();
    let form = SearchForm {
        user_id: world.form.user_id.clone(),
        password: world.form.password.clone(),
        date: world.form.date.clone(),
    };
    dashboard.search(form).await;
}

#[then(expr = "the lesson list shows {int} lessons")]
fn lesson_list_count(world: &mut LessonWatchWorld, count: usize) {
    match &*world.view().lessons.borrow() {
        LessonListView::List(items) => assert_eq!(items.len(), count),
        LessonListView::Empty => panic!("lesson list is empty"),
    }
}

#[then("the lesson list shows the empty message")]
fn lesson_list_empty(world: &mut LessonWatchWorld) {
    let view = world.view();
    let lessons = view.lessons.borrow();
    assert_eq!(*lessons, LessonListView::Empty);
    assert!(lessons.to_string().contains(NO_LESSONS_MESSAGE));
}

#[then(expr = "lesson {string} shows the badge {string}")]
fn lesson_badge(world: &mut LessonWatchWorld, id: String, class: String) {
    match &*world.view().lessons.borrow() {
        LessonListView::List(items) => {
            let item = items
                .iter()
                .find(|item| item.lesson.id == id)
                .unwrap_or_else(|| panic!("lesson {} not listed", id));
            assert_eq!(item.badge.class, class);
        }
        LessonListView::Empty => panic!("lesson list is empty"),
    }
}

#[then("the search button is enabled")]
fn search_button_enabled(world: &mut LessonWatchWorld) {
    let button = world.view().search_button.get().expect("button never drawn");
    assert!(button.enabled);
    assert_eq!(button.label, "🔍 Search lessons");
}

#[then("no search request was sent")]
fn no_search_request(world: &mut LessonWatchWorld) {
    assert_eq!(world.api().scrape_calls.get(), 0);
}
