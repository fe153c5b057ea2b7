//! Top bar: sidebar toggle, product name, signed-in user and sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_label = move || {
        session
            .user()
            .map(|user| user.display_name().to_string())
            .unwrap_or_default()
    };

    let logout = move |_| {
        log::info!("signing out");
        ctx.close_all();
        session.sign_out();
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("chevron-left")
                    } else {
                        icon("chevron-right")
                    }}
                </button>
                <span class="top-header__title">"BI Management"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{user_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
