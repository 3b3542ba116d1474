//! BDD step definitions for the lesson watch client

pub mod monitoring_steps;
pub mod search_steps;
pub mod selection_steps;
pub mod status_steps;
