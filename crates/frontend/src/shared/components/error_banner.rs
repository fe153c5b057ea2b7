use leptos::prelude::*;

/// Inline error above a form or table; renders nothing without a message
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <div class="alert alert--error" role="alert">{text}</div>
        })
    }
}
