//! Search results component

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use lesson_watch::render::{LessonItemView, LessonListView, NO_LESSONS_MESSAGE};

use crate::app::DashboardHandle;
use crate::components::status_badge::StatusBadge;

/// Lists the search results. One click handler on the container toggles
/// whichever row was clicked.
#[component]
pub fn LessonList(lessons: RwSignal<LessonListView>, dashboard: DashboardHandle) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(target) = crate::dom::click_target(&ev) {
                dashboard.get_value().lesson_clicked(&target);
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, dashboard);
        }
    };

    view! {
        <section>
            <h2>"📅 Lessons"</h2>
            <div class="lesson-list" on:click=on_click>
                {move || match lessons.get() {
                    LessonListView::Empty => {
                        view! { <p class="no-lessons">"❌ " {NO_LESSONS_MESSAGE}</p> }.into_any()
                    }
                    LessonListView::List(items) => {
                        items
                            .into_iter()
                            .map(|item| view! { <LessonItem item=item /> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn LessonItem(item: LessonItemView) -> impl IntoView {
    let time = item.time_label().to_string();
    let name = item.name_label().to_string();
    let (class, border) = if item.selected {
        ("lesson-item selected", "2px solid #007bff")
    } else {
        ("lesson-item", "1px solid #dee2e6")
    };
    let style = format!(
        "display: flex; gap: 1rem; align-items: center; padding: 0.5rem; \
         margin-bottom: 0.25rem; cursor: pointer; border: {};",
        border
    );
    let lesson = item.lesson;

    view! {
        <div
            class=class
            style=style
            data-lesson-id=lesson.id
            data-lesson-name=lesson.name
            data-lesson-time=lesson.time
            data-lesson-status=lesson.status
        >
            <span class="lesson-time">"⏰ " {time}</span>
            <span class="lesson-name">"📚 " {name}</span>
            <StatusBadge badge=item.badge />
        </div>
    }
}
