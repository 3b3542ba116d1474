//! Toast banner component

use leptos::prelude::*;
use lesson_watch::toast::{Severity, Toast};

/// Shows the current toast, if any, pinned to the top right
#[component]
pub fn ToastBanner(toast: RwSignal<Option<Toast>>) -> impl IntoView {
    move || {
        toast.get().map(|toast| {
            let bg = match toast.severity {
                Severity::Info => "#d1ecf1",
                Severity::Success => "#d4edda",
                Severity::Error => "#f8d7da",
            };
            let style = format!(
                "position: fixed; top: 1rem; right: 1rem; padding: 0.75rem 1rem; \
                 border-radius: 0.25rem; background-color: {};",
                bg
            );
            view! {
                <div class=format!("toast {} show", toast.severity.class()) style=style>
                    {toast.to_string()}
                </div>
            }
        })
    }
}
