use contracts::domain::a005_return_request::aggregate::{ReturnRequest, RETURN_STATUSES};
use contracts::shared::form::non_empty;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_return_request::api::{
    alert_tone, days_pending_label, return_type_label, status_tone,
};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::A005_RETURN_REQUEST};
use crate::shared::components::table::format_count;
use crate::shared::components::ui::Select;
use crate::shared::components::{ListScaffold, RowActions, StatusBadge};
use crate::shared::date_utils::format_optional_date;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ListViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn ReturnList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ListViewModel::<ReturnRequest>::new(use_auth());

    let open_detail = move |id: Option<String>| {
        let key = detail_tab_key(A005_RETURN_REQUEST, id.as_deref());
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    let status_options: Vec<(String, String)> = RETURN_STATUSES
        .iter()
        .map(|status| (status.as_str().to_string(), status.label().to_string()))
        .collect();
    let status_value =
        Signal::derive(move || vm.query.with(|query| query.status.clone().unwrap_or_default()));

    view! {
        <ListScaffold
            vm=vm
            page_id="a005_return_request--list"
            category=PAGE_CAT_LIST
            tab_key=A005_RETURN_REQUEST
            title="Supplier returns"
            empty_message="No returns found"
            on_create=Callback::new(move |_| open_detail(None))
            filters=Box::new(move || {
                view! {
                    <Select
                        label="Status"
                        value=status_value
                        on_change=Callback::new(move |value: String| vm.set_status(non_empty(&value)))
                        options=status_options
                        empty_label="All statuses"
                    />
                }
                .into_any()
            })
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=130.0>"Number"</TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Supplier"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Items"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Waiting"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.visible_rows()
                        key=|(generation, request)| (*generation, request.id.clone())
                        children=move |(_, request)| {
                            let number = request.return_number.clone();
                            let created = format_optional_date(request.created_at.as_deref());
                            let supplier = request.supplier_label();
                            let kind = return_type_label(request.return_type.as_deref());
                            let tone = status_tone(request.status);
                            let status = request.status.label();
                            let items = format_count(request.total_items);
                            let alert = alert_tone(request.alert_level());
                            let waiting = days_pending_label(request.days_pending);
                            let edit_id = request.id;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <span class="table__primary">{number}</span>
                                        <div class="table__secondary">{created}</div>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{supplier}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{kind}</TableCell>
                                    <TableCell>
                                        <StatusBadge tone=tone label=status />
                                    </TableCell>
                                    <TableCell class="text-right">{items}</TableCell>
                                    <TableCell>
                                        <StatusBadge tone=alert label=waiting />
                                    </TableCell>
                                    <RowActions on_edit=Callback::new(move |_| open_detail(Some(edit_id.clone()))) />
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </ListScaffold>
    }
}
