use contracts::domain::a002_category::aggregate::Category;
use contracts::shared::form::non_empty;
use leptos::prelude::*;

use super::related::{CategoryChildren, CategoryProducts};
use crate::domain::a002_category::api::parent_select_options;
use crate::layout::tabs::{detail_tab_key, tab_labels::A002_CATEGORY};
use crate::shared::components::ui::{bind, Checkbox, Input, Select, Textarea};
use crate::shared::components::DetailsScaffold;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::{DetailsViewModel, ListViewModel};
use crate::system::auth::context::use_auth;

#[component]
pub fn CategoryDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let session = use_auth();
    let vm = DetailsViewModel::<Category>::new(session);
    let parents = ListViewModel::<Category>::for_options(session);
    let tab_key = detail_tab_key(A002_CATEGORY, id.as_deref());
    let existing_id = id.clone();
    vm.load_if_needed(id);
    parents.refresh();

    let read_only = Signal::derive(move || vm.is_read_only());

    let parent_choices = Signal::derive(move || {
        let editing_id = vm.form.with(|f| f.id.clone());
        parents
            .state
            .with(|state| parent_select_options(&state.items, editing_id.as_deref()))
    });

    let (code, set_code) = bind(vm.form, |f| f.code.clone(), |f, v| f.code = v);
    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (name_ar, set_name_ar) = bind(vm.form, |f| f.name_ar.clone(), |f, v| f.name_ar = v);
    let (parent, set_parent) = bind(
        vm.form,
        |f| f.parent_id.clone().unwrap_or_default(),
        |f, v| f.parent_id = non_empty(&v),
    );
    let (description, set_description) =
        bind(vm.form, |f| f.description.clone(), |f, v| f.description = v);
    let (is_active, set_is_active) = bind(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    view! {
        <PageFrame page_id="a002_category--detail" category=PAGE_CAT_DETAIL>
            <DetailsScaffold
                vm=vm
                entity=A002_CATEGORY
                tab_key=tab_key
                allow_delete=true
                on_close=on_close
            >
                <div class="form__grid">
                    <Input label="Name" value=name on_input=set_name required=true disabled=read_only />
                    <Input label="Name (Arabic)" value=name_ar on_input=set_name_ar disabled=read_only />
                    <Input label="Code" value=code on_input=set_code disabled=read_only />
                    <Select
                        label="Parent category"
                        value=parent
                        on_change=set_parent
                        options=parent_choices
                        empty_label="None (top level)"
                        disabled=read_only
                    />
                </div>
                <Textarea label="Description" value=description on_input=set_description disabled=read_only />
                <div class="form__flags">
                    <Checkbox label="Active" checked=is_active on_change=set_is_active disabled=read_only />
                </div>
                {existing_id.clone().map(|category_id| view! {
                    <CategoryChildren category_id=category_id.clone() all=parents />
                    <CategoryProducts category_id=category_id />
                })}
            </DetailsScaffold>
        </PageFrame>
    }
}
