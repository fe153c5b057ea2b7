use contracts::domain::a005_return_request::aggregate::ReturnRequest;
use leptos::prelude::*;

use crate::domain::a005_return_request::api::history_event_label;
use crate::shared::date_utils::format_datetime;
use crate::shared::resource::DetailsViewModel;

/// Audit trail of a return, newest first as the backend sends it
#[component]
pub fn ReturnHistory(vm: DetailsViewModel<ReturnRequest>) -> impl IntoView {
    let history = Memo::new(move |_| {
        vm.state
            .with(|state| state.entity.as_ref().map(|e| e.history.clone()).unwrap_or_default())
    });

    view! {
        <Show when=move || history.with(|entries| !entries.is_empty())>
            <section class="details-section">
                <h3 class="details-section__title">"History"</h3>
                <ul class="timeline">
                    <For
                        each=move || history.get()
                        key=|entry| entry.id.clone()
                        children=|entry| {
                            let title = history_event_label(&entry.event_type);
                            let transition = match (&entry.from_status, &entry.to_status) {
                                (Some(from), Some(to)) => format!("{} → {}", from, to),
                                (None, Some(to)) => to.clone(),
                                _ => String::new(),
                            };
                            let when = entry.performed_at.as_deref().map(format_datetime).unwrap_or_default();
                            let who = entry.performed_by_name.clone().unwrap_or_default();
                            let details = entry.details.clone().unwrap_or_default();
                            view! {
                                <li class="timeline__entry">
                                    <div class="timeline__title">
                                        {title}
                                        <span class="timeline__transition">{transition}</span>
                                    </div>
                                    <div class="timeline__meta">{when}" "{who}</div>
                                    <div class="timeline__details">{details}</div>
                                </li>
                            }
                        }
                    />
                </ul>
            </section>
        </Show>
    }
}
