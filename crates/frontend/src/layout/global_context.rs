use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

/// Open tabs of the console and sidebar state, provided at the app root.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.open_tab(active_key, &tab_label_for_key(active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    /// Closing the active tab activates the last remaining one.
    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Close every tab, e.g. on sign-out
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_is_idempotent_and_close_activates_last() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.open_tab("a001_branch", "Branches");
            ctx.open_tab("a004_supplier", "Suppliers");
            ctx.open_tab("a001_branch", "Branches");

            assert_eq!(ctx.opened.get_untracked().len(), 2);
            assert_eq!(ctx.active.get_untracked().as_deref(), Some("a001_branch"));

            ctx.close_tab("a001_branch");
            assert_eq!(ctx.active.get_untracked().as_deref(), Some("a004_supplier"));

            ctx.close_tab("a004_supplier");
            assert_eq!(ctx.active.get_untracked(), None);
        });
    }

    #[test]
    fn test_closing_background_tab_keeps_active() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            ctx.open_tab("a001_branch", "Branches");
            ctx.open_tab("a001_branch_detail_b1", "Main Branch");
            ctx.close_tab("a001_branch");
            assert_eq!(
                ctx.active.get_untracked().as_deref(),
                Some("a001_branch_detail_b1")
            );
        });
    }
}
