use contracts::system::settings::{CompanySettings, COMPANY_SETTINGS_ID};
use leptos::prelude::*;

use crate::layout::tabs::tab_labels::SYS_SETTINGS;
use crate::shared::components::ui::{bind, Input, Textarea};
use crate::shared::components::DetailsScaffold;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::resource::DetailsViewModel;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAdmin;

/// Company profile printed on invoices and receipts. A single record that
/// always exists, so it can be saved but never created or deleted.
#[component]
pub fn CompanySettingsPage(on_close: Callback<()>) -> impl IntoView {
    view! {
        <RequireAdmin>
            <CompanyProfileForm on_close=on_close />
        </RequireAdmin>
    }
}

#[component]
fn CompanyProfileForm(on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::<CompanySettings>::new(use_auth());
    vm.load_if_needed(Some(COMPANY_SETTINGS_ID.to_string()));

    let read_only = Signal::derive(move || vm.is_read_only());

    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (name_ar, set_name_ar) = bind(vm.form, |f| f.name_ar.clone(), |f, v| f.name_ar = v);
    let (tagline, set_tagline) = bind(vm.form, |f| f.tagline.clone(), |f, v| f.tagline = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (phone2, set_phone2) = bind(vm.form, |f| f.phone2.clone(), |f, v| f.phone2 = v);
    let (email, set_email) = bind(vm.form, |f| f.email.clone(), |f, v| f.email = v);
    let (website, set_website) = bind(vm.form, |f| f.website.clone(), |f, v| f.website = v);
    let (city, set_city) = bind(vm.form, |f| f.city.clone(), |f, v| f.city = v);
    let (address, set_address) = bind(vm.form, |f| f.address.clone(), |f, v| f.address = v);
    let (address_ar, set_address_ar) =
        bind(vm.form, |f| f.address_ar.clone(), |f, v| f.address_ar = v);
    let (tax_number, set_tax_number) =
        bind(vm.form, |f| f.tax_number.clone(), |f, v| f.tax_number = v);
    let (register, set_register) = bind(
        vm.form,
        |f| f.commercial_register.clone(),
        |f, v| f.commercial_register = v,
    );

    view! {
        <PageFrame page_id="sys_settings--detail" category=PAGE_CAT_SYSTEM>
            <DetailsScaffold vm=vm entity=SYS_SETTINGS on_close=on_close>
                <h3 class="form__section-title">"Company"</h3>
                <div class="form__grid">
                    <Input label="Company name" value=name on_input=set_name required=true disabled=read_only />
                    <Input label="Company name (Arabic)" value=name_ar on_input=set_name_ar disabled=read_only />
                    <Input label="Tagline" value=tagline on_input=set_tagline disabled=read_only />
                    <Input label="Website" value=website on_input=set_website input_type="url" disabled=read_only />
                </div>

                <h3 class="form__section-title">"Contact"</h3>
                <div class="form__grid">
                    <Input label="Phone" value=phone on_input=set_phone input_type="tel" disabled=read_only />
                    <Input label="Second phone" value=phone2 on_input=set_phone2 input_type="tel" disabled=read_only />
                    <Input label="Email" value=email on_input=set_email input_type="email" disabled=read_only />
                    <Input label="City" value=city on_input=set_city disabled=read_only />
                </div>
                <Textarea label="Address" value=address on_input=set_address rows=2 disabled=read_only />
                <Textarea label="Address (Arabic)" value=address_ar on_input=set_address_ar rows=2 disabled=read_only />

                <h3 class="form__section-title">"Registration"</h3>
                <div class="form__grid">
                    <Input label="Tax number" value=tax_number on_input=set_tax_number disabled=read_only />
                    <Input label="Commercial register" value=register on_input=set_register disabled=read_only />
                </div>
            </DetailsScaffold>
        </PageFrame>
    }
}
