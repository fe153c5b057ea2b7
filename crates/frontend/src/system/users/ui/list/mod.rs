use contracts::domain::common::Identified;
use contracts::system::users::{role_label, User};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key, tab_labels::SYS_USERS};
use crate::shared::components::{ActiveBadge, ListScaffold, RowActions, StatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::resource::ListViewModel;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api::role_tone;

#[component]
pub fn UsersList() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersTable />
        </RequireAdmin>
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let vm = ListViewModel::<User>::new(session);
    let current_user_id = StoredValue::new(session.user().map(|user| user.id));

    let open_detail = move |id: Option<String>| {
        let key = detail_tab_key(SYS_USERS, id.as_deref());
        ctx.open_tab(&key, &tab_label_for_key(&key));
    };

    view! {
        <ListScaffold
            vm=vm
            page_id="sys_users--list"
            category=PAGE_CAT_SYSTEM
            tab_key=SYS_USERS
            title="Users"
            empty_message="No users yet"
            on_create=Callback::new(move |_| open_detail(None))
        >
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=200.0>"User"</TableHeaderCell>
                        <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Role"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Last login"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || vm.visible_rows()
                        key=|(generation, user)| (*generation, user.id.clone())
                        children=move |(_, user)| {
                            // Nobody deletes their own account from here
                            let is_self = current_user_id
                                .with_value(|current| current.as_deref() == Some(user.id.as_str()));
                            let name = user.display_name();
                            let username = user.username.clone();
                            let email = user.email.clone().unwrap_or_default();
                            let tone = role_tone(user.role.as_deref());
                            let role = role_label(user.role.as_deref().unwrap_or_default()).to_string();
                            let last_login = user
                                .last_login
                                .as_deref()
                                .map(format_datetime)
                                .unwrap_or_else(|| "Never".to_string());
                            let is_active = user.is_active();
                            let edit_id = user.id.clone();
                            let delete_id = user.id;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <span class="table__primary">{name}</span>
                                            <div class="table__secondary">{username}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{email}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <StatusBadge tone=tone label=role />
                                    </TableCell>
                                    <TableCell>{last_login}</TableCell>
                                    <TableCell>
                                        <ActiveBadge is_active=is_active />
                                    </TableCell>
                                    <RowActions
                                        on_edit=Callback::new(move |_| open_detail(Some(edit_id.clone())))
                                        on_delete=Callback::new(move |_| vm.request_delete(&delete_id))
                                        delete_hidden=is_self
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
