use leptos::prelude::*;

/// Placeholder shown when a list loaded successfully but has no rows
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__message">{message}</div>
            {children.map(|children| view! {
                <div class="empty-state__actions">{children()}</div>
            })}
        </div>
    }
}
