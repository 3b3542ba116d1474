pub mod lesson_list;
pub mod monitor_controls;
pub mod notification_settings;
pub mod search_form;
pub mod status_badge;
pub mod status_panel;
pub mod toast;
pub mod watch_list;
