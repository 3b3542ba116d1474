//! Availability badge component

use leptos::prelude::*;
use lesson_watch::model::LessonStatus;
use lesson_watch::render;

/// A colored badge: green when open, amber when nearly full, red when full
#[component]
pub fn StatusBadge(badge: render::StatusBadge) -> impl IntoView {
    let (color, bg) = match badge.status {
        LessonStatus::Available => ("#155724", "#d4edda"),
        LessonStatus::FewLeft => ("#856404", "#fff3cd"),
        LessonStatus::Full => ("#721c24", "#f8d7da"),
        LessonStatus::Unknown => ("#383d41", "#e2e3e5"),
    };

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span class=format!("lesson-status {}", badge.class) style=style>{badge.label}</span>
    }
}
