use crate::shared::icons::icon;
use leptos::prelude::*;

/// Header row of a tab page: title, optional subtitle, optional back
/// button and right-aligned actions passed as children.
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Renders a back arrow before the title
    #[prop(optional)]
    on_back: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {on_back.map(|on_back| view! {
                    <button
                        class="page-header__back"
                        title="Back"
                        on:click=move |_| on_back.run(())
                    >
                        {icon("back")}
                    </button>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{move || title.get()}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
