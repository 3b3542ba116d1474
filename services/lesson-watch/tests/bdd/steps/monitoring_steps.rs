//! BDD step definitions for starting, stopping and polling the monitor

use cucumber::{given, then, when};
use lesson_watch::controller::MonitorState;
use lesson_watch::model::{NotificationConfig, NotifyMethod};
use lesson_watch::render::StatusView;

use crate::world::{settle, LessonWatchWorld};

#[given("I choose email notifications without an address")]
fn email_without_address(world: &mut LessonWatchWorld) {
    world.form.method = NotifyMethod::Email;
    world.form.email.clear();
}

#[given(expr = "I choose webhook notifications with token {string}")]
fn webhook_with_token(world: &mut LessonWatchWorld, token: String) {
    world.form.method = NotifyMethod::Webhook;
    world.form.webhook_token = token;
    world.dashboard().notification_method_changed(NotifyMethod::Webhook);
}

#[given(expr = "I set the check interval to {string}")]
fn set_interval(world: &mut LessonWatchWorld, interval: String) {
    world.form.interval = interval;
}

#[given("the backend rejects start requests")]
fn backend_rejects_start(world: &mut LessonWatchWorld) {
    world.api().fail_start.set(true);
}

#[given("the backend rejects stop requests")]
fn backend_rejects_stop(world: &mut LessonWatchWorld) {
    world.api().fail_stop.set(true);
}

#[given("monitoring was started")]
async fn monitoring_was_started(world: &mut LessonWatchWorld) {
    start_monitoring(world).await;
    assert_eq!(world.dashboard().monitor_state(), MonitorState::Running);
}

#[when("I start monitoring")]
async fn start_monitoring(world: &mut LessonWatchWorld) {
    let dashboard = world.dashboard();
    dashboard.start_monitoring(world.form.clone()).await;
    settle().await;
}

#[when("I stop monitoring")]
async fn stop_monitoring(world: &mut LessonWatchWorld) {
    world.dashboard().stop_monitoring().await;
    settle().await;
}

#[when(expr = "I start and stop monitoring {int} times")]
async fn start_stop_repeatedly(world: &mut LessonWatchWorld, times: usize) {
    let dashboard = world.dashboard();
    for _ in 0..times {
        dashboard.start_monitoring(world.form.clone()).await;
        settle().await;
        assert!(dashboard.active_polls() <= 1);
        dashboard.stop_monitoring().await;
        settle().await;
        assert!(dashboard.active_polls() <= 1);
    }
}

#[then(expr = "monitoring is {word}")]
fn monitoring_state(world: &mut LessonWatchWorld, state: String) {
    let expected = match state.as_str() {
        "running" => MonitorState::Running,
        "stopped" => MonitorState::Stopped,
        other => panic!("Unknown monitor state: {}", other),
    };
    assert_eq!(world.dashboard().monitor_state(), expected);
}

#[then(expr = "{int} status poll(s) is/are active")]
fn active_polls(world: &mut LessonWatchWorld, count: usize) {
    assert_eq!(world.dashboard().active_polls(), count);
}

#[then("only the stop button is shown")]
fn only_stop_shown(world: &mut LessonWatchWorld) {
    let controls = world.view().controls.get();
    assert!(!controls.start.visible);
    assert!(controls.stop.visible);
    assert!(controls.stop.enabled);
}

#[then("only the start button is shown")]
fn only_start_shown(world: &mut LessonWatchWorld) {
    let controls = world.view().controls.get();
    assert!(controls.start.visible);
    assert!(!controls.stop.visible);
    assert_eq!(controls.start.label, "🚀 Start monitoring");
}

#[then(expr = "the start button is {word}")]
fn start_button_state(world: &mut LessonWatchWorld, state: String) {
    let controls = world.view().controls.get();
    match state.as_str() {
        "enabled" => assert!(controls.start.enabled),
        "disabled" => assert!(!controls.start.enabled),
        other => panic!("Unknown button state: {}", other),
    }
}

#[then("no start request was sent")]
fn no_start_request(world: &mut LessonWatchWorld) {
    assert!(world.api().start_requests.borrow().is_empty());
}

#[then(expr = "the start request asks for a {int} minute interval")]
fn start_request_interval(world: &mut LessonWatchWorld, minutes: u32) {
    let api = world.api();
    let requests = api.start_requests.borrow();
    let request = requests.last().expect("no start request sent");
    assert_eq!(request.interval, minutes);
}

#[then(expr = "the start request notifies through the webhook with token {string}")]
fn start_request_webhook(world: &mut LessonWatchWorld, token: String) {
    let api = world.api();
    let requests = api.start_requests.borrow();
    let request = requests.last().expect("no start request sent");
    assert_eq!(request.notification, NotificationConfig::Webhook { token });
}

#[then(expr = "the status panel shows {int} watched lesson(s)")]
fn status_panel_count(world: &mut LessonWatchWorld, count: u32) {
    match &*world.view().status.borrow() {
        StatusView::Running { lesson_count, .. } => assert_eq!(*lesson_count, count),
        StatusView::Stopped => panic!("status panel shows stopped"),
    }
}

#[then("the status panel shows monitoring stopped")]
fn status_panel_stopped(world: &mut LessonWatchWorld) {
    assert_eq!(*world.view().status.borrow(), StatusView::Stopped);
}

#[then("the webhook token field is shown")]
fn webhook_field_shown(world: &mut LessonWatchWorld) {
    let fields = world.view().fields.get();
    assert!(fields.webhook_visible);
    assert!(!fields.email_visible);
}
