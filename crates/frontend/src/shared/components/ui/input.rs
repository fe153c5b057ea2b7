use leptos::prelude::*;

/// Labelled text input bound to a value signal
#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "password", "email", "tel", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    /// Marks the label; validation itself happens in the form binding
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_type = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_type
                placeholder=move || placeholder.get().unwrap_or_default()
                autocomplete=move || autocomplete.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
