//! Start, stop and clear buttons

use leptos::prelude::*;
use lesson_watch::render::ControlsView;

use crate::app::{DashboardHandle, FormState};

fn display(visible: bool) -> &'static str {
    if visible {
        "inline-block"
    } else {
        "none"
    }
}

#[component]
pub fn MonitorControls(
    form: FormState,
    controls: RwSignal<ControlsView>,
    dashboard: DashboardHandle,
) -> impl IntoView {
    let on_start = move |_| {
        let dashboard = dashboard.get_value();
        let request = form.monitor_form();
        leptos::task::spawn_local(async move {
            dashboard.start_monitoring(request).await;
        });
    };

    let on_stop = move |_| {
        let dashboard = dashboard.get_value();
        leptos::task::spawn_local(async move {
            dashboard.stop_monitoring().await;
        });
    };

    let on_clear = move |_| dashboard.get_value().clear_selection();

    view! {
        <section style="display: flex; gap: 0.5rem; margin: 1rem 0;">
            <button
                id="startMonitoring"
                style:display=move || display(controls.get().start.visible)
                disabled=move || !controls.get().start.enabled
                on:click=on_start
            >
                {move || controls.get().start.label}
            </button>
            <button
                id="stopMonitoring"
                style:display=move || display(controls.get().stop.visible)
                disabled=move || !controls.get().stop.enabled
                on:click=on_stop
            >
                {move || controls.get().stop.label}
            </button>
            <button id="clearSelection" on:click=on_clear>
                "🗑️ Clear"
            </button>
        </section>
    }
}
