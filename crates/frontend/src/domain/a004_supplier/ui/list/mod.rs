use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::A004_SUPPLIER};
use crate::shared::components::{ActiveBadge, ListScaffold, RowActions};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource::ListViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn SupplierList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ListViewModel::<Supplier>::new(use_auth());

    let open_detail = move |id: Option<String>| {
        let key = detail_tab_key(A004_SUPPLIER, id.as_deref());
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <ListScaffold
            vm=vm
            page_id="a004_supplier--list"
            category=PAGE_CAT_LIST
            tab_key=A004_SUPPLIER
            title="Suppliers"
            empty_message="No suppliers yet"
            on_create=Callback::new(move |_| open_detail(None))
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=220.0>"Supplier"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Contact"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.visible_rows()
                        key=|(generation, supplier)| (*generation, supplier.id.clone())
                        children=move |(_, supplier)| {
                            let name = supplier.display_name();
                            let code = supplier.code.clone().unwrap_or_default();
                            let contact = supplier.contact_person.clone().unwrap_or_default();
                            let phone = supplier.phone.clone().unwrap_or_default();
                            let email = supplier.email.clone().unwrap_or_default();
                            let is_active = supplier.is_active();
                            let edit_id = supplier.id.clone();
                            let delete_id = supplier.id;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="table__primary">{name}</span>
                                            <div class="table__secondary">{code}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{contact}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>{phone}</TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{email}</TableCellLayout>
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
