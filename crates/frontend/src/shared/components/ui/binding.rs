//! Two-way binding between one field of a form signal and an input.
use leptos::prelude::*;

/// Read/write pair for one field of a form held in `RwSignal<F>`.
///
/// ```ignore
/// let (value, on_input) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
/// ```
pub fn bind<F, T>(form: RwSignal<F>, get: fn(&F) -> T, set: fn(&mut F, T)) -> (Signal<T>, Callback<T>)
where
    F: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    let value = Signal::derive(move || form.with(get));
    let on_change = Callback::new(move |new_value: T| form.update(|f| set(f, new_value)));
    (value, on_change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Form {
        name: String,
    }

    #[test]
    fn test_binding_reads_and_writes_field() {
        let owner = Owner::new();
        owner.with(|| {
            let form = RwSignal::new(Form::default());
            let (value, on_change) = bind(form, |f| f.name.clone(), |f, v| f.name = v);

            on_change.run("North".to_string());

            assert_eq!(value.get_untracked(), "North");
            assert_eq!(form.get_untracked().name, "North");
        });
    }
}
