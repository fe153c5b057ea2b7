use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only for users with an administrative role
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| view! {
                <div class="alert alert--error">"Access denied. Administrator role required."</div>
            }
        >
            {children()}
        </Show>
    }
}
