use contracts::domain::a001_branch::aggregate::{Branch, BranchStats};
use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::A001_BRANCH};
use crate::shared::components::{ActiveBadge, ListScaffold, RowActions, StatusBadge, StatusTone};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ListViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn BranchList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ListViewModel::<Branch>::new(use_auth());

    let open_detail = move |id: Option<String>| {
        let key = detail_tab_key(A001_BRANCH, id.as_deref());
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    let stats = Memo::new(move |_| vm.state.with(|state| BranchStats::collect(&state.items)));

    view! {
        <ListScaffold
            vm=vm
            page_id="a001_branch--list"
            category=PAGE_CAT_LIST
            tab_key=A001_BRANCH
            title="Branches"
            empty_message="No branches yet"
            on_create=Callback::new(move |_| open_detail(None))
        >
            <div class="stats-row">
                <div class="stats-row__item">
                    <span class="stats-row__label">"Total"</span>
                    <span class="stats-row__value">{move || stats.get().total}</span>
                </div>
                <div class="stats-row__item">
                    <span class="stats-row__label">"Active"</span>
                    <span class="stats-row__value">{move || stats.get().active}</span>
                </div>
                <div class="stats-row__item">
                    <span class="stats-row__label">"Main branch"</span>
                    <span class="stats-row__value">
                        {move || stats.get().main_branch.unwrap_or_else(|| "-".to_string())}
                    </span>
                </div>
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=80.0>"Code"</TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"City"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.visible_rows()
                        key=|(generation, branch)| (*generation, branch.id.clone())
                        children=move |(_, branch)| {
                            let code = branch.code.clone();
                            let name = branch.display_name();
                            let is_main = branch.is_main();
                            let city = branch.city.clone().unwrap_or_default();
                            let phone = branch.phone.clone().unwrap_or_default();
                            let is_active = branch.is_active();
                            let edit_id = branch.id.clone();
                            let delete_id = branch.id;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{code}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="table__primary">{name}</span>
                                            {is_main.then(|| view! {
                                                " "
                                                <StatusBadge tone=StatusTone::Brand label="Main" />
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{city}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{phone}</TableCellLayout>
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
