//! Item lines of a new return. Existing returns show their items read-only.

use contracts::domain::a005_return_request::aggregate::{ReturnForm, ReturnLineForm, RETURN_REASONS};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;

/// Read/write pair for one field of line `index`
fn line_field(
    form: RwSignal<ReturnForm>,
    index: usize,
    get: fn(&ReturnLineForm) -> String,
    set: fn(&mut ReturnLineForm, String),
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || form.with(|f| f.lines.get(index).map(get).unwrap_or_default()));
    let on_change = Callback::new(move |new_value: String| {
        form.update(|f| {
            if let Some(line) = f.lines.get_mut(index) {
                set(line, new_value);
            }
        })
    });
    (value, on_change)
}

#[component]
pub fn ReturnLines(form: RwSignal<ReturnForm>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let reasons = Signal::stored(
        RETURN_REASONS
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>(),
    );
    let count = move || form.with(|f| f.lines.len());

    view! {
        <section class="details-section">
            <h3 class="details-section__title">{move || format!("Items ({})", count())}</h3>
            <For
                each=move || 0..count()
                key=|index| *index
                children=move |index| {
                    let (product, set_product) =
                        line_field(form, index, |l| l.product_name.clone(), |l, v| l.product_name = v);
                    let (model, set_model) =
                        line_field(form, index, |l| l.product_model.clone(), |l, v| l.product_model = v);
                    let (serial, set_serial) =
                        line_field(form, index, |l| l.serial_number.clone(), |l, v| l.serial_number = v);
                    let (quantity, set_quantity) =
                        line_field(form, index, |l| l.quantity.clone(), |l, v| l.quantity = v);
                    let (reason, set_reason) =
                        line_field(form, index, |l| l.return_reason.clone(), |l, v| l.return_reason = v);
                    let (details, set_details) =
                        line_field(form, index, |l| l.reason_details.clone(), |l, v| l.reason_details = v);
                    view! {
                        <div class="form__line">
                            <Input label="Product" value=product on_input=set_product required=true disabled=disabled />
                            <Input label="Model" value=model on_input=set_model disabled=disabled />
                            <Input label="Serial number" value=serial on_input=set_serial disabled=disabled />
                            <Input
                                label="Quantity"
                                value=quantity
                                on_input=set_quantity
                                input_type="number"
                                required=true
                                disabled=disabled
                            />
                            <Select label="Reason" value=reason on_change=set_reason options=reasons disabled=disabled />
                            <Input label="Reason details" value=details on_input=set_details disabled=disabled />
                            <button
                                class="table__action table__action--danger"
                                title="Remove line"
                                disabled=move || disabled.get() || count() <= 1
                                on:click=move |_| form.update(|f| {
                                    if f.lines.len() > 1 && index < f.lines.len() {
                                        f.lines.remove(index);
                                    }
                                })
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=disabled
                on_click=move |_| form.update(|f| f.lines.push(ReturnLineForm::default()))
            >
                {icon("plus")}
                " Add item"
            </Button>
        </section>
    }
}
