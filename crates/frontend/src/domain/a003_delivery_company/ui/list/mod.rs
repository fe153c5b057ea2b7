use contracts::domain::a003_delivery_company::aggregate::DeliveryCompany;
use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_delivery_company::api::{fee_label, kind_label, kind_tone};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::A003_DELIVERY_COMPANY};
use crate::shared::components::table::format_count;
use crate::shared::components::{ActiveBadge, ListScaffold, RowActions, StatusBadge};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ListViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn DeliveryCompanyList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ListViewModel::<DeliveryCompany>::new(use_auth());

    let open_detail = move |id: Option<String>| {
        let key = detail_tab_key(A003_DELIVERY_COMPANY, id.as_deref());
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <ListScaffold
            vm=vm
            page_id="a003_delivery_company--list"
            category=PAGE_CAT_LIST
            tab_key=A003_DELIVERY_COMPANY
            title="Delivery companies"
            empty_message="No delivery companies yet"
            on_create=Callback::new(move |_| open_detail(None))
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=200.0>"Company"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Contact"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Fee"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Pending"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.visible_rows()
                        key=|(generation, company)| (*generation, company.id.clone())
                        children=move |(_, company)| {
                            let name = company.display_name();
                            let code = company.code.clone().unwrap_or_default();
                            let tone = kind_tone(company.kind());
                            let kind = kind_label(&company);
                            let contact = company.contact_person.clone().unwrap_or_default();
                            let phone = company.phone.clone().unwrap_or_default();
                            let fee = fee_label(&company);
                            let pending = company.pending_count.filter(|count| *count > 0);
                            let has_pending = pending.is_some();
                            let pending = format_count(pending);
                            let is_active = company.is_active();
                            let edit_id = company.id;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="table__primary">{name}</span>
                                            <div class="table__secondary">{code}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <StatusBadge tone=tone label=kind />
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {contact}
                                            <div class="table__secondary">{phone}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell class="text-right">{fee}</TableCell>
                                    <TableCell class="text-right">
                                        <span class:table__value--attention=has_pending>{pending}</span>
                                    </TableCell>
                                    <TableCell>
                                        <ActiveBadge is_active=is_active />
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
