use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::A002_CATEGORY};
use crate::shared::components::table::format_count;
use crate::shared::components::{ActiveBadge, ListScaffold, RowActions};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ListViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ListViewModel::<Category>::new(use_auth());

    let open_detail = move |id: Option<String>| {
        let key = detail_tab_key(A002_CATEGORY, id.as_deref());
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <ListScaffold
            vm=vm
            page_id="a002_category--list"
            category=PAGE_CAT_LIST
            tab_key=A002_CATEGORY
            title="Categories"
            empty_message="No categories yet"
            on_create=Callback::new(move |_| open_detail(None))
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Code"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Parent"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Products"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.visible_rows()
                        key=|(generation, category)| (*generation, category.id.clone())
                        children=move |(_, category)| {
                            let row_class = if category.is_top_level() { "" } else { "table__row--nested" };
                            let name = category.display_name();
                            let code = category.code.clone().unwrap_or_default();
                            let parent = category.parent_label().unwrap_or_else(|| "-".to_string());
                            let products = format_count(category.counts.map(|counts| counts.products));
                            let is_active = category.is_active();
                            let edit_id = category.id.clone();
                            let delete_id = category.id;
                            view! {
                                <TableRow class=row_class>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="table__primary">{name}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{code}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{parent}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{products}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <ActiveBadge is_active=is_active />
                                    </TableCell>
                                    <RowActions
                                        on_edit=Callback::new(move |_| open_detail(Some(edit_id.clone())))
                                        on_delete=Callback::new(move |_| vm.request_delete(&delete_id))
                                    />
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </ListScaffold>
    }
}
