//! Reactive glue between the generic controllers and Leptos views.
//!
//! View models hold only signals, so they are `Copy` and can be moved into
//! any number of closures. Controllers are built per command.

use std::rc::Rc;

use contracts::domain::common::Identified;
use contracts::shared::form::FormBinding;
use contracts::shared::list::ListQuery;
use leptos::prelude::*;

use super::client::{ApiClient, Resource};
use super::command::Command;
use super::controller::ResourceController;
use super::list::ListController;
use super::state::{EmptyView, ListState, Phase, ResourceState};
use super::transport::GlooTransport;
use crate::shared::config::config;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::system::auth::context::AuthSession;

const OPTIONS_LIMIT: u32 = 500;

/// Client over the real browser transport for the signed-in session
pub(crate) fn browser_client(session: AuthSession) -> ApiClient {
    ApiClient::new(Rc::new(GlooTransport), Rc::new(session))
}

// ============================================================================
// Details
// ============================================================================

pub struct DetailsViewModel<R: Resource> {
    pub form: RwSignal<R::Form>,
    pub state: RwSignal<ResourceState<R>>,
    session: AuthSession,
}

impl<R: Resource> Clone for DetailsViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for DetailsViewModel<R> {}

impl<R> DetailsViewModel<R>
where
    R: Resource + Send + Sync,
    R::Form: Send + Sync + 'static,
{
    pub fn new(session: AuthSession) -> Self {
        Self {
            form: RwSignal::new(R::Form::default()),
            state: RwSignal::new(ResourceState::default()),
            session,
        }
    }

    fn controller(&self) -> ResourceController<R, RwSignal<ResourceState<R>>> {
        ResourceController::new(browser_client(self.session), self.state)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|form| form.id().is_some())
    }

    pub fn is_locked(&self) -> bool {
        self.form.with(|form| form.is_locked())
    }

    pub fn is_busy(&self) -> bool {
        self.state
            .with(|state| matches!(state.phase, Phase::Loading | Phase::Submitting))
    }

    /// Fields are read-only while locked or while a request is running
    pub fn is_read_only(&self) -> bool {
        self.is_locked() || self.is_busy()
    }

    pub fn is_blocked(&self) -> bool {
        self.state.with(|state| state.is_blocked())
    }

    pub fn visible_error(&self) -> Option<String> {
        self.state.with(|state| state.visible_error())
    }

    /// Load the record into the form; `None` starts a blank create form.
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            self.form.set(R::Form::default());
            self.state.set(ResourceState::default());
            return;
        };

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if vm.controller().load(&existing_id).await.is_err() {
                return;
            }
            // The state only holds the newest load, so the form follows it.
            let entity = vm.state.try_with_untracked(|state| state.entity.clone()).flatten();
            if let Some(entity) = entity {
                vm.form.try_set(R::Form::from_entity(&entity));
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<Option<String>>) {
        let Some(form) = self.form.try_get_untracked() else {
            return;
        };

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let _ = vm
                .controller()
                .submit(&form, move |saved_id| on_saved.run(saved_id))
                .await;
        });
    }

    pub fn delete_command(&self, on_removed: Callback<()>) {
        let Some(id) = self
            .form
            .with_untracked(|form| form.id().map(str::to_string))
        else {
            return;
        };

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let _ = vm.controller().remove(&id, move || on_removed.run(())).await;
        });
    }

    /// Run a workflow step; the form follows the reloaded record.
    pub fn perform_command<C>(&self, command: C, on_done: Callback<()>)
    where
        C: Command<R> + 'static,
        R: Identified,
    {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(entity) = vm.controller().perform(&command).await {
                vm.form.try_set(R::Form::from_entity(&entity));
                on_done.run(());
            }
        });
    }
}

// ============================================================================
// List
// ============================================================================

pub struct ListViewModel<R: Resource> {
    pub state: RwSignal<ListState<R>>,
    pub query: RwSignal<ListQuery>,
    /// Search box text; applied to the query on submit
    pub search: RwSignal<String>,
    session: AuthSession,
}

impl<R: Resource> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListViewModel<R> {}

impl<R> ListViewModel<R>
where
    R: Resource + Send + Sync,
{
    pub fn new(session: AuthSession) -> Self {
        Self {
            state: RwSignal::new(ListState::default()),
            query: RwSignal::new(ListQuery::with_limit(config().lists.page_size)),
            search: RwSignal::new(String::new()),
            session,
        }
    }

    /// One large page for select options (parent category, supplier)
    pub fn for_options(session: AuthSession) -> Self {
        let vm = Self::new(session);
        vm.query.set(ListQuery::with_limit(OPTIONS_LIMIT));
        vm
    }

    fn controller(&self) -> ListController<R, RwSignal<ListState<R>>> {
        ListController::new(browser_client(self.session), self.state)
    }

    pub fn refresh(&self) {
        let Some(query) = self.query.try_get_untracked() else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let _ = vm.controller().refresh(&query).await;
        });
    }

    pub fn apply_search(&self) {
        let search = self.search.get_untracked();
        self.query.update(|query| {
            query.page = 1;
            query.search = contracts::shared::form::non_empty(&search);
        });
        self.refresh();
    }

    pub fn set_status(&self, status: Option<String>) {
        self.query.update(|query| {
            query.page = 1;
            query.status = status;
        });
        self.refresh();
    }

    pub fn next_page(&self) {
        self.query.update(|query| query.page += 1);
        self.refresh();
    }

    pub fn previous_page(&self) {
        self.query.update(|query| query.page = query.page.saturating_sub(1).max(1));
        self.refresh();
    }

    pub fn has_next_page(&self) -> bool {
        let received = self.state.with(|state| state.items.len());
        self.query.with(|query| query.has_next_page(received))
    }

    pub fn has_previous_page(&self) -> bool {
        self.query.with(|query| query.has_previous_page())
    }

    /// Rows narrowed by the search box. Each row carries the load generation
    /// so `<For>` re-renders rows that kept their id across a reload.
    pub fn visible_rows(&self) -> Vec<(u64, R)>
    where
        R: Searchable,
    {
        let search = self.search.get();
        self.state.with(|state| {
            let generation = state.generation;
            filter_list(&state.items, &search)
                .into_iter()
                .map(|item| (generation, item))
                .collect()
        })
    }

    pub fn empty_view(&self) -> Option<EmptyView>
    where
        R: Searchable,
    {
        let visible = self.visible_rows().len();
        let query = self.query.get();
        self.state.with(|state| state.empty_view(&query, visible))
    }

    pub fn request_delete(&self, id: &str) {
        self.controller().request_delete(id);
    }

    pub fn cancel_delete(&self) {
        self.controller().cancel_delete();
    }

    pub fn confirm_delete(&self, on_deleted: Callback<()>) {
        let pending = self
            .state
            .try_with_untracked(|state| state.pending_delete.is_some())
            .unwrap_or(false);
        let Some(query) = self.query.try_get_untracked().filter(|_| pending) else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            if vm.controller().confirm_delete(&query).await.is_ok() {
                on_deleted.run(());
            }
        });
    }
}
