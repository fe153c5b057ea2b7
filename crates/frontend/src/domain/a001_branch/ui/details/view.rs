use contracts::domain::a001_branch::aggregate::Branch;
use leptos::prelude::*;

use crate::layout::tabs::{detail_tab_key, tab_labels::A001_BRANCH};
use crate::shared::components::ui::{bind, Checkbox, Input};
use crate::shared::components::DetailsScaffold;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::DetailsViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn BranchDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<Branch>::new(use_auth());
    let tab_key = detail_tab_key(A001_BRANCH, id.as_deref());
    vm.load_if_needed(id);

    let read_only = Signal::derive(move || vm.is_read_only());

    let (code, set_code) = bind(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (name_ar, set_name_ar) = bind(vm.form, |f| f.name_ar.clone(), |f, v| f.name_ar = v);
    let (city, set_city) = bind(vm.form, |f| f.city.clone(), |f, v| f.city = v);
    let (address, set_address) = bind(vm.form, |f| f.address.clone(), |f, v| f.address = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (email, set_email) = bind(vm.form, |f| f.email.clone(), |f, v| f.email = v);
    let (is_main, set_is_main) = bind(vm.form, |f| f.is_main, |f, v| f.is_main = v);
    let (is_active, set_is_active) = bind(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    view! {
        <PageFrame page_id="a001_branch--detail" category=PAGE_CAT_DETAIL>
            <DetailsScaffold
                vm=vm
                entity=A001_BRANCH
                tab_key=tab_key
                allow_delete=true
                on_close=on_close
            >
                <div class="form__grid">
                    <Input label="Code" value=code on_input=set_code required=true disabled=read_only />
                    <Input label="Name" value=name on_input=set_name required=true disabled=read_only />
                    <Input label="Name (Arabic)" value=name_ar on_input=set_name_ar disabled=read_only />
                    <Input label="City" value=city on_input=set_city disabled=read_only />
                    <Input label="Address" value=address on_input=set_address disabled=read_only />
                    <Input label="Phone" value=phone on_input=set_phone input_type="tel" disabled=read_only />
                    <Input label="Email" value=email on_input=set_email input_type="email" disabled=read_only />
                </div>
                <div class="form__flags">
                    <Checkbox label="Main branch" checked=is_main on_change=set_is_main disabled=read_only />
                    <Checkbox label="Active" checked=is_active on_change=set_is_active disabled=read_only />
                </div>
            </DetailsScaffold>
        </PageFrame>
    }
}
