use leptos::prelude::*;

/// Labelled select. An optional `empty_label` adds a first option with the
/// value `""`, which form bindings read as "no selection".
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// `(value, label)` pairs in display order
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] empty_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {empty_label.map(|text| view! {
                    <option value="" selected=move || value.get().is_empty()>{text}</option>
                })}
                <For
                    each=move || options.get()
                    key=|(option, _)| option.clone()
                    children=move |(option, text)| {
                        let current = option.clone();
                        view! {
                            <option value=option selected=move || value.get() == current>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
