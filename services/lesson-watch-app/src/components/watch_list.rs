//! Watch list component

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use lesson_watch::render::{SelectionView, NOTHING_SELECTED_MESSAGE};

use crate::app::DashboardHandle;

/// Lessons being watched, each with a remove button
#[component]
pub fn WatchList(selection: RwSignal<SelectionView>, dashboard: DashboardHandle) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(target) = crate::dom::click_target(&ev) {
                dashboard.get_value().remove_clicked(&target);
            }
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, dashboard);
        }
    };

    view! {
        <section>
            <h2>"👀 Watch list"</h2>
            <div class="selected-lessons" on:click=on_click>
                {move || match selection.get() {
                    SelectionView::Empty => {
                        view! { <p class="no-selection">"📝 " {NOTHING_SELECTED_MESSAGE}</p> }
                            .into_any()
                    }
                    SelectionView::List(lessons) => {
                        lessons
                            .into_iter()
                            .map(|lesson| {
                                let label = format!("⏰ {}  📚 {}", lesson.time, lesson.name);
                                view! {
                                    <div class="selected-lesson" style="display: flex; justify-content: space-between; padding: 0.25rem 0;">
                                        <span>{label}</span>
                                        <button
                                            class="remove-lesson-btn"
                                            data-lesson-id=lesson.id
                                            data-lesson-name=lesson.name
                                            data-lesson-time=lesson.time
                                            data-lesson-status=lesson.status
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
