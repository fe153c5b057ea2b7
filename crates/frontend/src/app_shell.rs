//! Application shell
//!
//! - `AppShell`: auth gate, shows `LoginPage` or `MainLayout`
//! - `MainLayout`: sidebar, tab bar and the open tabs

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{TabBar, TabPage};
use crate::layout::Shell;
use crate::shared::components::EmptyState;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Main console layout. Syncs the active tab with `?active=` in the URL.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    // Tabs of a previous session must not survive into the next sign-in.
    on_cleanup(move || tabs_store.close_all());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <Show
                        when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                        fallback=|| view! { <EmptyState message="Pick a section in the sidebar" /> }
                    >
                        <div class="tabs">
                            <For
                                each=move || tabs_store.opened.get()
                                key=|tab| tab.key.clone()
                                children=move |tab: TabData| {
                                    view! { <TabPage tab=tab tabs_store=tabs_store /> }
                                }
                            />
                        </div>
                    </Show>
                }
                .into_any()
            }
        />
    }
}

/// Auth gate
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_auth();

    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
    }
}
