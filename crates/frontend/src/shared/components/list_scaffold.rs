//! Frame shared by every list page: header with count and actions, search,
//! errors, empty state, pager and the delete confirmation.

use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use super::{use_notices, ConfirmDelete, EmptyState, ErrorBanner, PageHeader, PaginationControls};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::resource::{EmptyView, ListViewModel, Resource};

#[component]
pub fn ListScaffold<R>(
    vm: ListViewModel<R>,
    /// `{entity}--{category}` id of the page root
    page_id: &'static str,
    category: &'static str,
    /// Key of the tab showing this list; the list reloads whenever it is activated
    tab_key: &'static str,
    #[prop(into)] title: String,
    /// Shown when the collection has no records at all
    #[prop(into)] empty_message: String,
    on_create: Callback<()>,
    /// Extra controls next to the search box
    #[prop(optional)]
    filters: Option<Children>,
    /// The table; replaced by the empty state when no row is left to show
    children: ChildrenFn,
) -> impl IntoView
where
    R: Resource + Identified + Searchable + Send + Sync,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notices = use_notices();

    Effect::new(move |_| {
        if ctx.active.get().as_deref() == Some(tab_key) {
            vm.refresh();
        }
    });

    let loading = Signal::derive(move || vm.state.with(|state| state.loading));
    let empty_view = Memo::new(move |_| vm.empty_view());

    let pending_label = Signal::derive(move || {
        vm.state.with(|state| {
            let id = state.pending_delete.as_ref()?;
            let label = state
                .items
                .iter()
                .find(|item| item.id() == id)
                .map(Identified::display_name)
                .unwrap_or_else(|| id.clone());
            Some(label)
        })
    });

    let confirm_delete = Callback::new(move |_| {
        vm.confirm_delete(Callback::new(move |_| {
            notices.success(format!("{} deleted", R::NOUN));
        }));
    });

    view! {
        <PageFrame page_id=page_id category=category>
            <PageHeader
                title=title
                subtitle=Signal::derive(move || {
                    Some(format!("{} shown", vm.state.with(|state| state.items.len())))
                })
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create.run(())>
                    {icon("plus")}
                    " New"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=loading
                    on_click=move |_| vm.refresh()
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <SearchInput value=vm.search on_submit=Callback::new(move |_| vm.apply_search()) />
                        {filters.map(|filters| filters())}
                    </Flex>
                    <PaginationControls
                        page=Signal::derive(move || vm.query.with(|query| query.page))
                        has_previous=Signal::derive(move || vm.has_previous_page())
                        has_next=Signal::derive(move || vm.has_next_page())
                        on_previous=Callback::new(move |_| vm.previous_page())
                        on_next=Callback::new(move |_| vm.next_page())
                        disabled=loading
                    />
                </div>

                <ErrorBanner message=Signal::derive(move || vm.state.with(|state| state.visible_error())) />

                <Show when=move || loading.get() && vm.state.with(|state| !state.loaded)>
                    <div class="list-loading"><Spinner /></div>
                </Show>

                {move || match empty_view.get() {
                    Some(EmptyView::FirstRecord) => view! {
                        <EmptyState message=empty_message.clone()>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_create.run(())>
                                {icon("plus")}
                                " Create the first one"
                            </Button>
                        </EmptyState>
                    }
                    .into_any(),
                    Some(EmptyView::NoMatches) => view! {
                        <EmptyState message="No matching records. Try another search or filter." />
                    }
                    .into_any(),
                    None => view! { <div class="table-wrapper">{children()}</div> }.into_any(),
                }}
            </div>

            <ConfirmDelete
                pending=pending_label
                busy=Signal::derive(move || vm.state.with(|state| state.deleting))
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </PageFrame>
    }
}
