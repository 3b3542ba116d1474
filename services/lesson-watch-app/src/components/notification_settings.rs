//! Notification method, its address or token, and the check interval

use leptos::prelude::*;
use lesson_watch::render::NotificationFieldsView;
use lesson_watch::NotifyMethod;

use crate::app::{DashboardHandle, FormState};

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn NotificationSettings(
    form: FormState,
    fields: RwSignal<NotificationFieldsView>,
    dashboard: DashboardHandle,
) -> impl IntoView {
    let on_method = move |ev| {
        let method = event_target_value(&ev)
            .parse::<NotifyMethod>()
            .unwrap_or_default();
        form.method.set(method);
        dashboard.get_value().notification_method_changed(method);
    };

    view! {
        <section>
            <h2>"🔔 Notifications"</h2>
            <select id="notificationMethod" on:change=on_method>
                <option value={NotifyMethod::Email.as_str()} selected=move || form.method.get() == NotifyMethod::Email>
                    "Email"
                </option>
                <option value={NotifyMethod::Webhook.as_str()} selected=move || form.method.get() == NotifyMethod::Webhook>
                    "LINE Notify"
                </option>
            </select>
            <div id="emailSettings" style:display=move || display(fields.get().email_visible)>
                <input
                    type="email"
                    placeholder="Email address"
                    prop:value=move || form.email.get()
                    on:input=move |ev| form.email.set(event_target_value(&ev))
                />
            </div>
            <div id="lineSettings" style:display=move || display(fields.get().webhook_visible)>
                <input
                    type="text"
                    placeholder="LINE Notify token"
                    prop:value=move || form.webhook_token.get()
                    on:input=move |ev| form.webhook_token.set(event_target_value(&ev))
                />
            </div>
            <label>
                "Check every "
                <input
                    type="number"
                    min="1"
                    style="width: 4em;"
                    prop:value=move || form.interval.get()
                    on:input=move |ev| form.interval.set(event_target_value(&ev))
                />
                " minutes"
            </label>
        </section>
    }
}
