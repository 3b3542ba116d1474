//! Monitoring controller: start/stop the backend monitor and poll its status
//!
//! Two states, `Stopped` and `Running`. Transitions only happen after the
//! backend accepted the request; a failed request leaves the state alone and
//! is not retried. While running, exactly one poll task refreshes the status
//! on a fixed period.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{self, Either};
use tokio_util::sync::CancellationToken;

use crate::api::{LessonApi, StartRequest};
use crate::executor::Executor;
use crate::model::MonitoringStatus;

/// Whether the backend monitor is running, as far as the client knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorState {
    #[default]
    Stopped,
    Running,
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorState::Stopped => write!(f, "Stopped"),
            MonitorState::Running => write!(f, "Running"),
        }
    }
}

/// A transition waiting on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Starting,
    Stopping,
}

/// Receives every status fetched by the poll task
pub type StatusSink = Rc<dyn Fn(&MonitoringStatus)>;

/// Outcome of a start or stop request
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The backend accepted the request and the state changed
    Done,
    /// Another transition was already in flight; nothing was sent
    Busy,
    /// The request failed; the state is unchanged
    Failed(crate::LessonWatchError),
}

/// Counts live poll tasks. Increments on creation, decrements on drop.
struct LiveGuard(Rc<Cell<usize>>);

impl LiveGuard {
    fn new(counter: &Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        Self(Rc::clone(counter))
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

/// Drives the Stopped/Running state machine and owns the poll task
pub struct MonitoringController {
    api: Rc<dyn LessonApi>,
    executor: Rc<dyn Executor>,
    poll_period: Duration,
    state: Cell<MonitorState>,
    pending: Cell<Option<Transition>>,
    poll: RefCell<Option<CancellationToken>>,
    live_polls: Rc<Cell<usize>>,
}

impl fmt::Debug for MonitoringController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitoringController")
            .field("state", &self.state.get())
            .field("pending", &self.pending.get())
            .field("poll_period", &self.poll_period)
            .field("live_polls", &self.live_polls.get())
            .finish()
    }
}

impl MonitoringController {
    pub fn new(api: Rc<dyn LessonApi>, executor: Rc<dyn Executor>, poll_period: Duration) -> Self {
        Self {
            api,
            executor,
            poll_period,
            state: Cell::new(MonitorState::Stopped),
            pending: Cell::new(None),
            poll: RefCell::new(None),
            live_polls: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state.get()
    }

    pub fn pending(&self) -> Option<Transition> {
        self.pending.get()
    }

    /// Number of poll tasks that have not yet exited
    pub fn active_polls(&self) -> usize {
        self.live_polls.get()
    }

    /// Ask the backend to start monitoring. On success the state becomes
    /// `Running` and a fresh poll task feeds `sink`.
    pub async fn start(&self, request: &StartRequest, sink: StatusSink) -> TransitionOutcome {
        if self.pending.get().is_some() {
            tracing::debug!("Start ignored: transition already in flight");
            return TransitionOutcome::Busy;
        }
        self.pending.set(Some(Transition::Starting));
        tracing::info!(
            "Starting monitoring of {} lessons on {}",
            request.lessons.len(),
            request.date
        );

        let result = self.api.start_monitoring(request).await;
        self.pending.set(None);

        match result {
            Ok(()) => {
                self.state.set(MonitorState::Running);
                self.spawn_poll(sink);
                tracing::info!("Monitoring started");
                TransitionOutcome::Done
            }
            Err(e) => {
                tracing::warn!("Failed to start monitoring: {}", e);
                TransitionOutcome::Failed(e)
            }
        }
    }

    /// Ask the backend to stop monitoring. On success the poll task is
    /// cancelled and the state becomes `Stopped`.
    pub async fn stop(&self) -> TransitionOutcome {
        if self.pending.get().is_some() {
            tracing::debug!("Stop ignored: transition already in flight");
            return TransitionOutcome::Busy;
        }
        self.pending.set(Some(Transition::Stopping));
        tracing::info!("Stopping monitoring");

        let result = self.api.stop_monitoring().await;
        self.pending.set(None);

        match result {
            Ok(()) => {
                self.cancel_poll();
                self.state.set(MonitorState::Stopped);
                tracing::info!("Monitoring stopped");
                TransitionOutcome::Done
            }
            Err(e) => {
                tracing::warn!("Failed to stop monitoring: {}", e);
                TransitionOutcome::Failed(e)
            }
        }
    }

    /// Fetch the status once. Failures are logged and yield `None`.
    pub async fn refresh_status(&self) -> Option<MonitoringStatus> {
        fetch_status(self.api.as_ref()).await
    }

    fn spawn_poll(&self, sink: StatusSink) {
        self.cancel_poll();

        let cancel = CancellationToken::new();
        let guard = LiveGuard::new(&self.live_polls);
        let api = Rc::clone(&self.api);
        let executor = Rc::clone(&self.executor);
        let period = self.poll_period;
        let token = cancel.clone();

        self.executor.spawn(Box::pin(async move {
            let _guard = guard;
            poll_loop(api, executor, sink, period, token).await;
        }));

        *self.poll.borrow_mut() = Some(cancel);
    }

    fn cancel_poll(&self) {
        if let Some(cancel) = self.poll.borrow_mut().take() {
            tracing::debug!("Cancelling status poll");
            cancel.cancel();
        }
    }
}

impl Drop for MonitoringController {
    fn drop(&mut self) {
        self.cancel_poll();
    }
}

async fn poll_loop(
    api: Rc<dyn LessonApi>,
    executor: Rc<dyn Executor>,
    sink: StatusSink,
    period: Duration,
    cancel: CancellationToken,
) {
    loop {
        let tick = executor.sleep(period);
        match future::select(Box::pin(cancel.cancelled()), tick).await {
            Either::Left(_) => break,
            Either::Right(_) => {}
        }

        let status = fetch_status(api.as_ref()).await;
        if cancel.is_cancelled() {
            break;
        }
        if let Some(status) = status {
            sink(&status);
        }
    }
    tracing::debug!("Status poll exited");
}

async fn fetch_status(api: &dyn LessonApi) -> Option<MonitoringStatus> {
    match api.monitoring_status().await {
        Ok(status) => {
            tracing::debug!(
                "Monitoring status: running={}, lessons={}",
                status.is_running,
                status.lesson_count
            );
            Some(status)
        }
        Err(e) => {
            tracing::warn!("Failed to fetch monitoring status: {}", e);
            None
        }
    }
}
