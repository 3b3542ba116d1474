//! Lesson Watch - client for the lesson availability monitor
//!
//! Searches a studio's lesson schedule, keeps a watch list of lessons, and
//! starts, stops and polls the backend monitor that sends a notification when
//! a watched lesson opens up. The state managers are front-end agnostic: the
//! browser app and the `lesson-watch` terminal client both drive a
//! [`Dashboard`] and render through a [`View`].

pub mod api;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod delegation;
pub mod error;
pub mod executor;
pub mod form;
pub mod io;
pub mod model;
pub mod render;
pub mod selection;
pub mod toast;
pub mod view;

#[cfg(feature = "native")]
pub mod console;

pub use config::{load_config, ClientConfig};
pub use dashboard::Dashboard;
pub use error::{LessonWatchError, Result, ValidationError};
pub use model::{LessonRecord, MonitoringStatus, NotificationConfig, NotifyMethod};
pub use view::View;
