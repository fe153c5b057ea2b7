use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Edit/delete buttons at the end of a table row
#[component]
pub fn RowActions(
    on_edit: Callback<()>,
    /// Omitted for collections the backend cannot delete from
    #[prop(optional)]
    on_delete: Option<Callback<()>>,
    /// Hides the delete button, e.g. for locked records
    #[prop(optional, into)]
    delete_hidden: MaybeProp<bool>,
) -> impl IntoView {
    let delete = move || on_delete.filter(|_| !delete_hidden.get().unwrap_or(false));

    view! {
        <TableCell>
            <div class="table__row-actions">
                <button class="table__action" title="Edit" on:click=move |_| on_edit.run(())>
                    {icon("edit")}
                </button>
                {move || delete().map(|on_delete| view! {
                    <button
                        class="table__action table__action--danger"
                        title="Delete"
                        on:click=move |_| on_delete.run(())
                    >
                        {icon("delete")}
                    </button>
                })}
            </div>
        </TableCell>
    }
}
