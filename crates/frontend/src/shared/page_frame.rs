//! Root wrapper for every page rendered inside a tab.
//!
//! ```text
//! <PageFrame page_id="a001_branch--list" category=PAGE_CAT_LIST>
//!     <PageHeader title="Branches">...</PageHeader>
//!     <div class="page__content">...</div>
//! </PageFrame>
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a004_supplier--detail"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
