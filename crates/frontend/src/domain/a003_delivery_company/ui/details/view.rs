use contracts::domain::a003_delivery_company::aggregate::{DeliveryCompany, COMPANY_KINDS};
use leptos::prelude::*;

use crate::domain::a003_delivery_company::api::FEE_TYPES;
use crate::layout::tabs::{detail_tab_key, tab_labels::A003_DELIVERY_COMPANY};
use crate::shared::components::ui::{bind, Checkbox, Input, Select};
use crate::shared::components::DetailsScaffold;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::DetailsViewModel;
use crate::system::auth::context::use_auth;

#[component]
pub fn DeliveryCompanyDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<DeliveryCompany>::new(use_auth());
    let tab_key = detail_tab_key(A003_DELIVERY_COMPANY, id.as_deref());
    vm.load_if_needed(id);

    let read_only = Signal::derive(move || vm.is_read_only());

    let kind_options = Signal::stored(
        COMPANY_KINDS
            .iter()
            .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
            .collect::<Vec<_>>(),
    );
    let fee_options = Signal::stored(
        FEE_TYPES
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );

    let (code, set_code) = bind(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (name_ar, set_name_ar) = bind(vm.form, |f| f.name_ar.clone(), |f, v| f.name_ar = v);
    let (kind, set_kind) = bind(vm.form, |f| f.kind.clone(), |f, v| f.kind = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (contact, set_contact) =
        bind(vm.form, |f| f.contact_person.clone(), |f, v| f.contact_person = v);
    let (fee_type, set_fee_type) = bind(vm.form, |f| f.fee_type.clone(), |f, v| f.fee_type = v);
    let (fee_amount, set_fee_amount) =
        bind(vm.form, |f| f.fee_amount.clone(), |f, v| f.fee_amount = v);
    let (is_active, set_is_active) = bind(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    let fee_label = move || {
        if fee_type.get() == "fixed" {
            "Fee (IQD)".to_string()
        } else {
            "Fee (%)".to_string()
        }
    };

    view! {
        <PageFrame page_id="a003_delivery_company--detail" category=PAGE_CAT_DETAIL>
            <DetailsScaffold
                vm=vm
                entity=A003_DELIVERY_COMPANY
                tab_key=tab_key
                on_close=on_close
            >
                <div class="form__grid">
                    <Input label="Name" value=name on_input=set_name required=true disabled=read_only />
                    <Input label="Name (Arabic)" value=name_ar on_input=set_name_ar disabled=read_only />
                    <Input label="Code" value=code on_input=set_code disabled=read_only />
                    <Select
                        label="Type"
                        value=kind
                        on_change=set_kind
                        options=kind_options
                        required=true
                        disabled=read_only
                    />
                    <Input label="Phone" value=phone on_input=set_phone input_type="tel" disabled=read_only />
                    <Input label="Contact person" value=contact on_input=set_contact disabled=read_only />
                    <Select
                        label="Fee type"
                        value=fee_type
                        on_change=set_fee_type
                        options=fee_options
                        empty_label="Not set"
                        disabled=read_only
                    />
                    {move || view! {
                        <Input
                            label=fee_label()
                            value=fee_amount
                            on_input=set_fee_amount
                            input_type="number"
                            disabled=read_only
                        />
                    }}
                </div>
                <div class="form__flags">
                    <Checkbox label="Active" checked=is_active on_change=set_is_active disabled=read_only />
                </div>
            </DetailsScaffold>
        </PageFrame>
    }
}
