use leptos::prelude::*;

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <label
            class="form__checkbox-wrapper"
            class:form__checkbox-wrapper--disabled=is_disabled
        >
            <input
                type="checkbox"
                class="form__checkbox"
                disabled=is_disabled
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
