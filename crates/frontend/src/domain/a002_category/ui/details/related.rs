//! Read-only sections under an existing category: its subcategories and products.

use contracts::domain::a002_category::aggregate::{child_categories, Category, CategoryProduct, ProductSummary};
use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_category::api::fetch_products;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::A002_CATEGORY};
use crate::shared::components::table::{format_amount, format_count};
use crate::shared::components::{ActiveBadge, EmptyState, ErrorBanner};
use crate::shared::list_utils::filter_list;
use crate::shared::resource::view_model::browser_client;
use crate::shared::resource::{ListState, ListViewModel};
use crate::system::auth::context::use_auth;

#[component]
pub fn CategoryChildren(category_id: String, all: ListViewModel<Category>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let children = Memo::new(move |_| {
        all.state.with(|state| {
            child_categories(&state.items, &category_id)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let open = move |id: String| {
        let key = detail_tab_key(A002_CATEGORY, Some(&id));
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <Show when=move || children.with(|c| !c.is_empty())>
            <section class="details-section">
                <h3 class="details-section__title">
                    {move || format!("Subcategories ({})", children.with(Vec::len))}
                </h3>
                <div class="chip-list">
                    <For
                        each=move || children.get()
                        key=|child| child.id.clone()
                        children=move |child| {
                            let name = child.display_name();
                            let products = format_count(child.counts.map(|c| c.products));
                            let is_active = child.is_active();
                            let id = child.id;
                            view! {
                                <button class="chip" on:click=move |_| open(id.clone())>
                                    <span class="chip__label">{name}</span>
                                    <span class="chip__meta">{format!("{} products", products)}</span>
                                    <ActiveBadge is_active=is_active />
                                </button>
                            }
                        }
                    />
                </div>
            </section>
        </Show>
    }
}

#[component]
pub fn CategoryProducts(category_id: String) -> impl IntoView {
    let session = use_auth();
    let rows = RwSignal::new(ListState::<CategoryProduct>::default());
    let search = RwSignal::new(String::new());

    rows.update(|state| state.loading = true);
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_products(&browser_client(session), &category_id).await;
        if let Err(err) = &result {
            log::warn!("Failed to load products of category '{}': {}", category_id, err);
        }
        rows.try_update(|state| {
            state.loading = false;
            state.loaded = result.is_ok();
            match result {
                Ok(items) => state.items = items,
                Err(err) => state.error = Some(err),
            }
        });
    });

    let summary = Memo::new(move |_| rows.with(|state| ProductSummary::collect(&state.items)));
    let visible = move || rows.with(|state| filter_list(&state.items, &search.get()));

    view! {
        <section class="details-section">
            <h3 class="details-section__title">
                {move || format!("Products ({})", summary.get().total)}
            </h3>

            <div class="stats-row">
                <div class="stats-row__item">
                    <span class="stats-row__label">"Active"</span>
                    <span class="stats-row__value">{move || summary.get().active}</span>
                </div>
                <div class="stats-row__item">
                    <span class="stats-row__label">"Total value"</span>
                    <span class="stats-row__value">{move || format_amount(summary.get().total_value)}</span>
                </div>
            </div>

            <ErrorBanner message=Signal::derive(move || rows.with(|state| state.visible_error())) />

            <input
                class="form__input"
                placeholder="Filter by name or SKU"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Show when=move || rows.with(|state| state.loading)>
                <div class="list-loading"><Spinner /></div>
            </Show>

            <Show
                when=move || rows.with(|state| !state.loaded || !state.items.is_empty())
                fallback=|| view! { <EmptyState message="No products in this category" /> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=100.0>"SKU"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=visible
                            key=|product| product.id.clone()
                            children=move |product| {
                                let sku = product.sku.clone();
                                let name = product.display_name();
                                let price = product.unit_price.map(format_amount).unwrap_or_else(|| "-".to_string());
                                let is_active = product.is_active();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{sku}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{price}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <ActiveBadge is_active=is_active />
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </section>
    }
}
