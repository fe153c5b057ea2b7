use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous/next pager. The backend does not report a total, so "next" is
/// offered whenever the last page came back full.
#[component]
pub fn PaginationControls(
    /// 1-based page number
    #[prop(into)]
    page: Signal<u32>,
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=move || is_disabled() || !has_previous.get()
                on:click=move |_| on_previous.run(())
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || format!("Page {}", page.get())}</span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=move || is_disabled() || !has_next.get()
                on:click=move |_| on_next.run(())
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
