use contracts::system::users::{User, MIN_PASSWORD_LEN, USER_ROLES};
use leptos::prelude::*;

use crate::layout::tabs::{detail_tab_key, tab_labels::SYS_USERS};
use crate::shared::components::ui::{bind, Checkbox, Input, Select};
use crate::shared::components::DetailsScaffold;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::resource::DetailsViewModel;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;

#[component]
pub fn UserDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <RequireAdmin>
            <UserEditor id=id.clone() on_close=on_close />
        </RequireAdmin>
    }
}

#[component]
fn UserEditor(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<User>::new(use_auth());
    let tab_key = detail_tab_key(SYS_USERS, id.as_deref());
    let creating = id.is_none();
    vm.load_if_needed(id);

    let read_only = Signal::derive(move || vm.is_read_only());
    let role_options = Signal::stored(
        USER_ROLES
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );
    let password_hint = if creating {
        format!("At least {} characters", MIN_PASSWORD_LEN)
    } else {
        "Leave empty to keep the current password".to_string()
    };

    let (username, set_username) = bind(vm.form, |f| f.username.clone(), |f, v| f.username = v);
    let (password, set_password) = bind(vm.form, |f| f.password.clone(), |f, v| f.password = v);
    let (full_name, set_full_name) =
        bind(vm.form, |f| f.full_name.clone(), |f, v| f.full_name = v);
    let (email, set_email) = bind(vm.form, |f| f.email.clone(), |f, v| f.email = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (role, set_role) = bind(vm.form, |f| f.role.clone(), |f, v| f.role = v);
    let (is_active, set_is_active) = bind(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    view! {
        <PageFrame page_id="sys_users--detail" category=PAGE_CAT_SYSTEM>
            <DetailsScaffold
                vm=vm
                entity=SYS_USERS
                tab_key=tab_key
                allow_delete=true
                on_close=on_close
            >
                <div class="form__grid">
                    <Input
                        label="Username"
                        value=username
                        on_input=set_username
                        autocomplete="off"
                        required=true
                        disabled=read_only
                    />
                    <Input label="Full name" value=full_name on_input=set_full_name required=true disabled=read_only />
                    <Input label="Email" value=email on_input=set_email input_type="email" disabled=read_only />
                    <Input label="Phone" value=phone on_input=set_phone input_type="tel" disabled=read_only />
                    <Select
                        label="Role"
                        value=role
                        on_change=set_role
                        options=role_options
                        required=true
                        disabled=read_only
                    />
                    <Input
                        label="Password"
                        value=password
                        on_input=set_password
                        input_type="password"
                        autocomplete="new-password"
                        placeholder=password_hint.clone()
                        required=creating
                        disabled=read_only
                    />
                </div>
                <div class="form__flags">
                    <Checkbox label="Active" checked=is_active on_change=set_is_active disabled=read_only />
                </div>
            </DetailsScaffold>
        </PageFrame>
    }
}
