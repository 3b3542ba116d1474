//! Browser task spawning and timers

use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use lesson_watch::executor::Executor;

/// Spawns onto the Leptos local executor and sleeps with `setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct LeptosExecutor;

impl Executor for LeptosExecutor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (fired, wait) = oneshot::channel::<()>();
        leptos::prelude::set_timeout(
            move || {
                let _ = fired.send(());
            },
            duration,
        );
        Box::pin(async move {
            let _ = wait.await;
        })
    }
}
