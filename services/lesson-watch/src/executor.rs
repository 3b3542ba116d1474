//! Single-threaded task spawning and timers
//!
//! The client runs on one thread (the browser's UI thread, or a tokio
//! `LocalSet` natively), so spawned tasks are not `Send`.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Spawns local tasks and produces sleep futures
pub trait Executor {
    /// Run a task to completion in the background
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// A future that resolves after `duration`
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Tokio-backed executor. Must be used from inside a `tokio::task::LocalSet`.
#[cfg(feature = "native")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioExecutor;

#[cfg(feature = "native")]
impl Executor for TokioExecutor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}
