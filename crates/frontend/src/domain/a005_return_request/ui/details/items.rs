use contracts::domain::a005_return_request::aggregate::{
    label_of, ItemResolutionForm, ReturnAction, ReturnRequest, RESOLUTIONS, RETURN_REASONS,
};
use leptos::prelude::*;
use thaw::*;

use super::workflow::{offers, ActionDialog};
use crate::domain::a005_return_request::api::item_status_tone;
use crate::domain::a005_return_request::commands::ReturnCommand;
use crate::shared::components::table::format_amount;
use crate::shared::components::ui::{bind, Input, Select, Textarea};
use crate::shared::components::{use_notices, EmptyState, StatusBadge};
use crate::shared::resource::DetailsViewModel;

#[component]
pub fn ReturnItems(vm: DetailsViewModel<ReturnRequest>) -> impl IntoView {
    let notices = use_notices();
    let items = Memo::new(move |_| {
        vm.state
            .with(|state| state.entity.as_ref().map(|e| e.items.clone()).unwrap_or_default())
    });

    let resolving = RwSignal::new(None::<String>);
    let dialog_open = RwSignal::new(false);
    let resolution = RwSignal::new(ItemResolutionForm::default());

    Effect::new(move |_| {
        if !dialog_open.get() {
            resolving.set(None);
        }
    });

    let (outcome, set_outcome) = bind(resolution, |f| f.resolution.clone(), |f, v| f.resolution = v);
    let (notes, set_notes) = bind(resolution, |f| f.resolution_notes.clone(), |f, v| f.resolution_notes = v);
    let (serial, set_serial) = bind(
        resolution,
        |f| f.replacement_serial_number.clone(),
        |f, v| f.replacement_serial_number = v,
    );
    let (cost, set_cost) = bind(resolution, |f| f.repair_cost.clone(), |f, v| f.repair_cost = v);
    let outcomes = Signal::stored(
        RESOLUTIONS
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );

    let resolve = Callback::new(move |_| {
        let Some(item_id) = resolving.get_untracked() else {
            return;
        };
        let command = ReturnCommand::ResolveItem {
            item_id,
            form: resolution.get_untracked(),
        };
        vm.perform_command(
            command,
            Callback::new(move |_| {
                dialog_open.set(false);
                notices.success("Item resolved");
            }),
        );
    });

    view! {
        <section class="details-section">
            <h3 class="details-section__title">{move || format!("Items ({})", items.with(Vec::len))}</h3>
            <Show
                when=move || items.with(|items| !items.is_empty())
                fallback=|| view! { <EmptyState message="This return has no items" /> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=200.0>"Product"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Serial"</TableHeaderCell>
                            <TableHeaderCell min_width=60.0>"Qty"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Reason"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Resolution"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|item| (item.id.clone(), item.item_status.clone(), item.resolution.clone())
                            children=move |item| {
                                let product = item.product_label();
                                let serial = item.serial_number.clone().unwrap_or_else(|| "-".to_string());
                                let quantity = item.quantity.unwrap_or(1);
                                let reason = item
                                    .return_reason
                                    .as_deref()
                                    .map(|r| label_of(&RETURN_REASONS, r))
                                    .unwrap_or_else(|| "-".to_string());
                                let tone = item_status_tone(item.item_status.as_deref());
                                let status = item.item_status.clone().unwrap_or_else(|| "pending".to_string());
                                let outcome = match (&item.resolution, item.repair_cost) {
                                    (Some(r), Some(cost)) => {
                                        format!("{} ({})", label_of(&RESOLUTIONS, r), format_amount(cost))
                                    }
                                    (Some(r), None) => label_of(&RESOLUTIONS, r),
                                    (None, _) => "-".to_string(),
                                };
                                let resolvable = !item.is_resolved();
                                let item_id = item.id;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{product}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>{serial}</TableCell>
                                        <TableCell class="text-right">{quantity}</TableCell>
                                        <TableCell>{reason}</TableCell>
                                        <TableCell>
                                            <StatusBadge tone=tone label=status />
                                        </TableCell>
                                        <TableCell>{outcome}</TableCell>
                                        <TableCell>
                                            <Show when=move || resolvable && offers(vm, ReturnAction::ResolveItem)>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    size=ButtonSize::Small
                                                    on_click={
                                                        let item_id = item_id.clone();
                                                        move |_| {
                                                            resolution.set(ItemResolutionForm::default());
                                                            resolving.set(Some(item_id.clone()));
                                                            dialog_open.set(true);
                                                        }
                                                    }
                                                >
                                                    "Resolve"
                                                </Button>
                                            </Show>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </section>

        <ActionDialog vm=vm open=dialog_open title="Resolve item" confirm_label="Save resolution" on_confirm=resolve>
            <Select label="Outcome" value=outcome on_change=set_outcome options=outcomes required=true />
            <Input label="Replacement serial" value=serial on_input=set_serial />
            <Input label="Repair cost" value=cost on_input=set_cost input_type="number" />
            <Textarea label="Notes" value=notes on_input=set_notes />
        </ActionDialog>
    }
}
