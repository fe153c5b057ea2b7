//! Frame shared by every create/edit page: header with save and delete,
//! load/submit errors, the locked banner and the blocked "back" panel.

use contracts::domain::common::Identified;
use leptos::prelude::*;
use thaw::*;

use super::{use_notices, ConfirmDelete, ErrorBanner, PageHeader};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::icons::icon;
use crate::shared::resource::{DetailsViewModel, Resource, ResourceError};

#[component]
pub fn DetailsScaffold<R>(
    vm: DetailsViewModel<R>,
    /// Entity part of the tab key, e.g. `"a001_branch"`
    entity: &'static str,
    /// When set, this tab is renamed to the record's display name once loaded
    #[prop(optional)]
    tab_key: Option<String>,
    /// Shows the delete action in edit mode when the collection supports it
    #[prop(optional)]
    allow_delete: bool,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView
where
    R: Resource + Identified + Send + Sync,
    R::Form: Send + Sync + 'static,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notices = use_notices();
    let confirm = RwSignal::new(None::<String>);

    if let Some(tab_key) = tab_key {
        Effect::new(move |_| {
            let name = vm
                .state
                .with(|state| state.entity.as_ref().map(Identified::display_name));
            if let Some(name) = name {
                ctx.update_tab_title(&tab_key, &detail_tab_label(entity, &name));
            }
        });
    }

    let title = Signal::derive(move || {
        let name = vm
            .state
            .with(|state| state.entity.as_ref().map(Identified::display_name));
        match name {
            Some(name) if vm.is_edit_mode() => name,
            _ if vm.is_edit_mode() => R::NOUN.to_string(),
            _ => format!("New {}", R::NOUN.to_lowercase()),
        }
    });

    let save = move |_| {
        vm.save_command(Callback::new(move |saved_id: Option<String>| {
            log::info!("{} saved: {:?}", R::NOUN, saved_id);
            notices.success(format!("{} saved", R::NOUN));
            on_close.run(());
        }));
    };

    let delete = Callback::new(move |_| {
        confirm.set(None);
        vm.delete_command(Callback::new(move |_| {
            notices.success(format!("{} deleted", R::NOUN));
            on_close.run(());
        }));
    });

    view! {
        <div class="details-container">
            <PageHeader title=title on_back=on_close>
                <Show when=move || !vm.is_blocked()>
                    <Show when=move || allow_delete && R::DELETABLE && vm.is_edit_mode() && !vm.is_locked()>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || vm.is_busy())
                            on_click=move |_| confirm.set(Some(title.get_untracked()))
                        >
                            {icon("delete")}
                            " Delete"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.is_read_only())
                        on_click=save
                    >
                        {icon("save")}
                        {move || if vm.is_edit_mode() { " Save" } else { " Create" }}
                    </Button>
                </Show>
            </PageHeader>

            <ErrorBanner message=Signal::derive(move || vm.visible_error()) />

            <Show when=move || vm.state.with(|state| state.is_loading())>
                <div class="details-loading"><Spinner /></div>
            </Show>

            <Show when=move || vm.is_locked()>
                <div class="alert alert--info">
                    {icon("lock")}
                    " "
                    {ResourceError::Locked.to_string()}
                </div>
            </Show>

            <Show
                when=move || !vm.is_blocked()
                fallback=move || view! {
                    <div class="details-blocked">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                            {icon("back")}
                            " Back"
                        </Button>
                    </div>
                }
            >
                <div class="details-form">{children()}</div>
            </Show>

            <ConfirmDelete
                pending=confirm
                busy=Signal::derive(move || vm.is_busy())
                on_confirm=delete
                on_cancel=Callback::new(move |_| confirm.set(None))
            />
        </div>
    }
}
