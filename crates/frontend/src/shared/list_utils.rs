//! Shared list helpers: narrowing the loaded page and the search box.
use leptos::prelude::*;

/// Rows that can be narrowed by the text typed into the search box
pub trait Searchable {
    /// Texts the search box is matched against (names, codes, phones)
    fn search_fields(&self) -> Vec<&str>;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Rows of the loaded page that match `filter`, keeping backend order
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Search box: typing narrows the loaded rows, Enter asks the backend.
/// The clear button commits an empty search.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="search-input">
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_submit.run(());
                    }
                }
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| {
                        value.set(String::new());
                        on_submit.run(());
                    }
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn test_filter_keeps_backend_order() {
        let rows = vec![Row("s1", "Baghdad Tools"), Row("s2", "Erbil Parts"), Row("s3", "Basra Tools")];
        let found = filter_list(&rows, "tools");
        assert_eq!(found, vec![rows[0].clone(), rows[2].clone()]);
    }

    #[test]
    fn test_blank_filter_matches_everything() {
        let rows = vec![Row("s1", "A"), Row("s2", "B")];
        assert_eq!(filter_list(&rows, "  ").len(), 2);
        assert!(Row("S7", "x").matches_filter("s7"));
    }
}
