//! Status transitions of an existing return: send, confirm receipt, remind.

use contracts::domain::a005_return_request::aggregate::{ReturnAction, ReturnRequest, ShipmentForm};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_return_request::commands::ReturnCommand;
use crate::shared::components::ui::{bind, Input, Textarea};
use crate::shared::components::{use_notices, ErrorBanner};
use crate::shared::resource::DetailsViewModel;

/// Whether the loaded return currently offers `action`
pub fn offers(vm: DetailsViewModel<ReturnRequest>, action: ReturnAction) -> bool {
    vm.state
        .with(|state| state.entity.as_ref().is_some_and(|entity| entity.allows(action)))
}

/// Modal form of one workflow step. Errors of the step show inside it.
#[component]
pub fn ActionDialog(
    vm: DetailsViewModel<ReturnRequest>,
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    children: Children,
) -> impl IntoView {
    let busy = Signal::derive(move || vm.is_busy());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        <ErrorBanner message=Signal::derive(move || vm.visible_error()) />
                        {children()}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            loading=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[component]
pub fn ReturnWorkflow(vm: DetailsViewModel<ReturnRequest>) -> impl IntoView {
    let notices = use_notices();
    let busy = Signal::derive(move || vm.is_busy());

    let sending = RwSignal::new(false);
    let receiving = RwSignal::new(false);
    let reminding = RwSignal::new(false);

    let shipment = RwSignal::new(ShipmentForm::default());
    let receipt_notes = RwSignal::new(String::new());
    let reminder = RwSignal::new(String::new());

    let (method, set_method) = bind(shipment, |f| f.shipping_method.clone(), |f, v| f.shipping_method = v);
    let (tracking, set_tracking) = bind(shipment, |f| f.tracking_number.clone(), |f, v| f.tracking_number = v);
    let (cost, set_cost) = bind(shipment, |f| f.shipping_cost.clone(), |f, v| f.shipping_cost = v);

    let run = move |command: ReturnCommand, dialog: RwSignal<bool>| {
        let done = command.action().label();
        vm.perform_command(
            command,
            Callback::new(move |_| {
                dialog.set(false);
                notices.success(format!("{}: done", done));
            }),
        );
    };

    let send = Callback::new(move |_| run(ReturnCommand::Send(shipment.get_untracked()), sending));
    let receive = Callback::new(move |_| {
        run(ReturnCommand::Receive { notes: receipt_notes.get_untracked() }, receiving)
    });
    let remind = Callback::new(move |_| {
        run(ReturnCommand::Remind { message: reminder.get_untracked() }, reminding)
    });

    view! {
        <div class="form__actions">
            <Show when=move || offers(vm, ReturnAction::Send)>
                <Button appearance=ButtonAppearance::Primary disabled=busy on_click=move |_| sending.set(true)>
                    {ReturnAction::Send.label()}
                </Button>
            </Show>
            <Show when=move || offers(vm, ReturnAction::Receive)>
                <Button appearance=ButtonAppearance::Primary disabled=busy on_click=move |_| receiving.set(true)>
                    {ReturnAction::Receive.label()}
                </Button>
            </Show>
            <Show when=move || offers(vm, ReturnAction::Remind)>
                <Button appearance=ButtonAppearance::Secondary disabled=busy on_click=move |_| reminding.set(true)>
                    {ReturnAction::Remind.label()}
                </Button>
            </Show>
        </div>

        <ActionDialog vm=vm open=sending title="Send to supplier" confirm_label="Mark as sent" on_confirm=send>
            <Input label="Shipping method" value=method on_input=set_method />
            <Input label="Tracking number" value=tracking on_input=set_tracking />
            <Input label="Shipping cost" value=cost on_input=set_cost input_type="number" />
        </ActionDialog>

        <ActionDialog vm=vm open=receiving title="Confirm receipt" confirm_label="Confirm" on_confirm=receive>
            <Textarea
                label="Notes"
                value=Signal::derive(move || receipt_notes.get())
                on_input=Callback::new(move |v| receipt_notes.set(v))
                placeholder="Replaces the internal notes"
            />
        </ActionDialog>

        <ActionDialog vm=vm open=reminding title="Remind the supplier" confirm_label="Send" on_confirm=remind>
            <Textarea
                label="Message"
                value=Signal::derive(move || reminder.get())
                on_input=Callback::new(move |v| reminder.set(v))
            />
        </ActionDialog>
    }
}
