use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{NoticeHost, NoticeService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(NoticeService::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
        <NoticeHost />
    }
}
