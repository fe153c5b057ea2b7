use leptos::prelude::*;
use thaw::*;

/// Confirmation dialog for a row delete.
///
/// Opens while `pending` holds the label of the record awaiting confirmation.
/// Closing the dialog any other way than "Delete" cancels the request.
#[component]
pub fn ConfirmDelete(
    #[prop(into)] pending: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    Effect::new(move |_| open.set(pending.get().is_some()));
    Effect::new(move |_| {
        if !open.get() && pending.get_untracked().is_some() {
            on_cancel.run(());
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Delete record"</DialogTitle>
                    <DialogContent>
                        {move || {
                            let label = pending.get().unwrap_or_default();
                            format!("Delete \"{}\"? This cannot be undone.", label)
                        }}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            loading=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            "Delete"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
