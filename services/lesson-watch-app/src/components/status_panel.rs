//! Monitoring status panel component

use leptos::prelude::*;
use lesson_watch::render::StatusView;

#[component]
pub fn StatusPanel(status: RwSignal<StatusView>) -> impl IntoView {
    view! {
        <section>
            <h2>"Status"</h2>
            {move || {
                let status = status.get();
                let class = status.class();
                let title = status.title();
                let body = match status {
                    StatusView::Stopped => {
                        view! { <p>"No lessons are being watched."</p> }.into_any()
                    }
                    StatusView::Running { lesson_count, next_check, last_check } => {
                        view! {
                            <ul style="list-style: none; padding: 0;">
                                <li>"📊 Watching " {lesson_count} " lessons"</li>
                                <li>"⏱️ Next check: " {next_check}</li>
                                <li>"📧 Last check: " {last_check}</li>
                            </ul>
                        }
                            .into_any()
                    }
                };
                view! {
                    <div class=class>
                        <h3>{title}</h3>
                        {body}
                    </div>
                }
            }}
        </section>
    }
}
