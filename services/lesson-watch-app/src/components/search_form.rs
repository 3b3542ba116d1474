//! Credentials, date and the search button

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use lesson_watch::render::ButtonView;

use crate::app::{DashboardHandle, FormState};

#[component]
pub fn SearchPanel(
    form: FormState,
    button: RwSignal<ButtonView>,
    dashboard: DashboardHandle,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let dashboard = dashboard.get_value();
        let search = form.search_form();
        leptos::task::spawn_local(async move {
            dashboard.search(search).await;
        });
    };

    view! {
        <section>
            <h2>"🔍 Search"</h2>
            <form on:submit=on_submit style="display: flex; flex-wrap: wrap; gap: 0.5rem;">
                <input
                    type="text"
                    placeholder="User ID"
                    prop:value=move || form.user_id.get()
                    on:input=move |ev| form.user_id.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.password.get()
                    on:input=move |ev| form.password.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || form.date.get()
                    on:input=move |ev| form.date.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || !button.get().enabled>
                    {move || button.get().label}
                </button>
            </form>
        </section>
    }
}
