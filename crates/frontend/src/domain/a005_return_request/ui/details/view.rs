use contracts::domain::a004_supplier::aggregate::Supplier;
use contracts::domain::a005_return_request::aggregate::{ReturnRequest, RETURN_TYPES};
use contracts::shared::form::non_empty;
use leptos::prelude::*;

use super::history::ReturnHistory;
use super::items::ReturnItems;
use super::lines::ReturnLines;
use super::workflow::ReturnWorkflow;
use crate::domain::a004_supplier::api::supplier_select_options;
use crate::domain::a005_return_request::api::status_tone;
use crate::layout::tabs::{detail_tab_key, tab_labels::A005_RETURN_REQUEST};
use crate::shared::components::table::format_amount;
use crate::shared::components::ui::{bind, Select, Textarea};
use crate::shared::components::{DetailsScaffold, StatusBadge};
use crate::shared::date_utils::format_optional_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::{DetailsViewModel, ListViewModel};
use crate::system::auth::context::use_auth;

#[component]
pub fn ReturnDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let session = use_auth();
    let vm = DetailsViewModel::<ReturnRequest>::new(session);
    let suppliers = ListViewModel::<Supplier>::for_options(session);
    let tab_key = detail_tab_key(A005_RETURN_REQUEST, id.as_deref());
    vm.load_if_needed(id);
    suppliers.refresh();

    let read_only = Signal::derive(move || vm.is_read_only());
    // The backend keeps the supplier of an existing return
    let supplier_fixed = Signal::derive(move || vm.is_read_only() || vm.is_edit_mode());

    let supplier_choices = Signal::derive(move || {
        let selected = vm.form.with(|f| f.supplier_id.clone());
        suppliers
            .state
            .with(|state| supplier_select_options(&state.items, selected.as_deref()))
    });
    let type_options = Signal::stored(
        RETURN_TYPES
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );

    let (supplier, set_supplier) = bind(
        vm.form,
        |f| f.supplier_id.clone().unwrap_or_default(),
        |f, v| f.supplier_id = non_empty(&v),
    );
    let (return_type, set_return_type) =
        bind(vm.form, |f| f.return_type.clone(), |f, v| f.return_type = v);
    let (notes, set_notes) = bind(vm.form, |f| f.notes.clone(), |f, v| f.notes = v);
    let (internal_notes, set_internal_notes) =
        bind(vm.form, |f| f.internal_notes.clone(), |f, v| f.internal_notes = v);

    let status = move || vm.form.with(|f| f.status);
    let fact = move |describe: fn(&ReturnRequest) -> String| {
        vm.state
            .with(|state| state.entity.as_ref().map(describe))
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="a005_return_request--detail" category=PAGE_CAT_DETAIL>
            <DetailsScaffold
                vm=vm
                entity=A005_RETURN_REQUEST
                tab_key=tab_key
                on_close=on_close
            >
                <Show when=move || vm.is_edit_mode()>
                    <div class="form__summary">
                        <span class="form__summary-number">
                            {move || vm.form.with(|f| f.return_number.clone())}
                        </span>
                        {move || view! {
                            <StatusBadge tone=status_tone(status()) label=status().label() />
                        }}
                    </div>
                    <dl class="form__facts">
                        <dt>"Created"</dt>
                        <dd>{move || fact(|r| format_optional_date(r.created_at.as_deref()))}</dd>
                        <dt>"Sent"</dt>
                        <dd>{move || fact(|r| format_optional_date(r.sent_at.as_deref()))}</dd>
                        <dt>"Received"</dt>
                        <dd>{move || fact(|r| format_optional_date(r.received_at.as_deref()))}</dd>
                        <dt>"Resolved"</dt>
                        <dd>{move || fact(|r| format_optional_date(r.resolved_at.as_deref()))}</dd>
                        <dt>"Shipping"</dt>
                        <dd>
                            {move || fact(|r| {
                                let method = r.shipping_method.clone().unwrap_or_else(|| "-".to_string());
                                match &r.tracking_number {
                                    Some(tracking) if !tracking.is_empty() => format!("{} / {}", method, tracking),
                                    _ => method,
                                }
                            })}
                        </dd>
                        <dt>"Shipping cost"</dt>
                        <dd>{move || fact(|r| r.shipping_cost.map(format_amount).unwrap_or_else(|| "-".to_string()))}</dd>
                        <dt>"Reminders"</dt>
                        <dd>{move || fact(|r| r.reminder_count.unwrap_or(0).to_string())}</dd>
                    </dl>
                    <ReturnWorkflow vm=vm />
                </Show>
                <div class="form__grid">
                    <Select
                        label="Supplier"
                        value=supplier
                        on_change=set_supplier
                        options=supplier_choices
                        empty_label="Select a supplier"
                        required=true
                        disabled=supplier_fixed
                    />
                    <Select
                        label="Return type"
                        value=return_type
                        on_change=set_return_type
                        options=type_options
                        required=true
                        disabled=read_only
                    />
                </div>
                <Textarea
                    label="Notes for the supplier"
                    value=notes
                    on_input=set_notes
                    disabled=read_only
                />
                <Textarea
                    label="Internal notes"
                    value=internal_notes
                    on_input=set_internal_notes
                    placeholder="Visible to staff only"
                    disabled=read_only
                />
                <Show
                    when=move || vm.is_edit_mode()
                    fallback=move || view! { <ReturnLines form=vm.form disabled=read_only /> }
                >
                    <ReturnItems vm=vm />
                    <ReturnHistory vm=vm />
                </Show>
            </DetailsScaffold>
        </PageFrame>
    }
}
