//! Transient toast messages. One toast at a time, newest wins.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::executor::Executor;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ️",
            Severity::Success => "✅",
            Severity::Error => "❌",
        }
    }

    /// CSS class, appended to `toast`
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.icon(), self.message)
    }
}

type ToastListener = Box<dyn Fn(Option<&Toast>)>;

/// Shows toasts and removes each one after a fixed display duration
pub struct ToastNotifier {
    current: RefCell<Option<Toast>>,
    next_id: Cell<u64>,
    duration: Duration,
    executor: Rc<dyn Executor>,
    listener: ToastListener,
}

impl fmt::Debug for ToastNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastNotifier")
            .field("current", &self.current)
            .field("duration", &self.duration)
            .finish()
    }
}

impl ToastNotifier {
    /// `listener` is called with the toast to display, or `None` to hide it
    pub fn new(
        executor: Rc<dyn Executor>,
        duration: Duration,
        listener: impl Fn(Option<&Toast>) + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            current: RefCell::new(None),
            next_id: Cell::new(1),
            duration,
            executor,
            listener: Box::new(listener),
        })
    }

    /// Replace the visible toast and schedule its removal. Returns the toast id.
    pub fn notify(self: &Rc<Self>, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let toast = Toast {
            id,
            message: message.into(),
            severity,
        };
        tracing::debug!("Toast {}: {}", id, toast);
        *self.current.borrow_mut() = Some(toast.clone());
        (self.listener)(Some(&toast));

        let notifier: Weak<Self> = Rc::downgrade(self);
        let sleep = self.executor.sleep(self.duration);
        self.executor.spawn(Box::pin(async move {
            sleep.await;
            if let Some(notifier) = notifier.upgrade() {
                notifier.expire(id);
            }
        }));

        id
    }

    /// Remove the toast with `id` if it is still the visible one
    pub fn expire(&self, id: u64) -> bool {
        let expired = {
            let mut current = self.current.borrow_mut();
            match current.as_ref() {
                Some(toast) if toast.id == id => {
                    *current = None;
                    true
                }
                _ => false,
            }
        };
        if expired {
            (self.listener)(None);
        }
        expired
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.borrow().clone()
    }
}
