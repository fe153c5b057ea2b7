//! Collection loading and confirmed delete for list pages.

use std::marker::PhantomData;

use contracts::shared::list::ListQuery;

use super::client::{ApiClient, Resource};
use super::error::ResourceError;
use super::state::{ListState, StateStore};

pub struct ListController<R, S> {
    client: ApiClient,
    store: S,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S> ListController<R, S>
where
    R: Resource,
    S: StateStore<ListState<R>>,
{
    pub fn new(client: ApiClient, store: S) -> Self {
        Self {
            client,
            store,
            _resource: PhantomData,
        }
    }

    /// Reload the rows. On failure the previous rows stay and the error is shown.
    pub async fn refresh(&self, query: &ListQuery) -> Result<(), ResourceError> {
        let mut generation = 0;
        self.store.write(|state| {
            state.generation += 1;
            generation = state.generation;
            state.loading = true;
        });

        let result = self.client.fetch_list::<R>(query).await;

        self.store.write(|state| {
            if state.generation != generation {
                return;
            }
            state.loading = false;
            match &result {
                Ok(rows) => {
                    state.items = rows.clone();
                    state.loaded = true;
                    state.error = None;
                }
                Err(err) => state.error = Some(err.clone()),
            }
        });

        match result {
            Ok(rows) => {
                log::info!("Loaded {} {} rows (page {})", rows.len(), R::NOUN, query.page);
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to load {} list: {}", R::NOUN, err);
                Err(err)
            }
        }
    }

    /// First step of a delete: remember the row and let the view ask for confirmation.
    pub fn request_delete(&self, id: &str) {
        let id = id.to_string();
        self.store.write(|state| state.pending_delete = Some(id));
    }

    pub fn cancel_delete(&self) {
        self.store.write(|state| state.pending_delete = None);
    }

    /// Delete the confirmed row, then reload. Does nothing unless a delete
    /// was requested; a failed delete leaves the rows untouched.
    pub async fn confirm_delete(&self, query: &ListQuery) -> Result<(), ResourceError> {
        let Some(id) = self.store.read().and_then(|state| state.pending_delete) else {
            return Ok(());
        };

        self.store.write(|state| state.deleting = true);

        match self.client.remove::<R>(&id).await {
            Ok(()) => {
                log::info!("{} '{}' deleted", R::NOUN, id);
                self.store.write(|state| {
                    state.pending_delete = None;
                    state.deleting = false;
                });
                self.refresh(query).await
            }
            Err(err) => {
                log::warn!("Failed to delete {} '{}': {}", R::NOUN, id, err);
                self.store.write(|state| {
                    state.pending_delete = None;
                    state.deleting = false;
                    state.error = Some(err.clone());
                });
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::state::EmptyView;
    use crate::shared::resource::test_support::{client, CountingSession, MemoryStore, ScriptedTransport};
    use crate::shared::resource::transport::{ApiResponse, HttpMethod};
    use contracts::domain::a004_supplier::aggregate::Supplier;
    use futures::executor::block_on;

    const THREE_SUPPLIERS: &str =
        r#"{"data": [{"id": "s1", "name": "A"}, {"id": "s2", "name": "B"}, {"id": "s3", "name": "C"}]}"#;

    fn ids(state: &ListState<Supplier>) -> Vec<&str> {
        state.items.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_confirmed_delete_reloads_remaining_rows() {
        let transport = ScriptedTransport::new(vec![
            ApiResponse::new(200, THREE_SUPPLIERS),
            ApiResponse::new(200, r#"{"success": true}"#),
            ApiResponse::new(200, r#"{"data": [{"id": "s1", "name": "A"}, {"id": "s3", "name": "C"}]}"#),
        ]);
        let store = MemoryStore::<ListState<Supplier>>::new();
        let controller = ListController::new(client(transport.clone(), CountingSession::new()), store.clone());
        let query = ListQuery::default();

        block_on(controller.refresh(&query)).unwrap();
        assert_eq!(ids(&store.snapshot()), vec!["s1", "s2", "s3"]);

        controller.request_delete("s2");
        block_on(controller.confirm_delete(&query)).unwrap();

        let state = store.snapshot();
        assert_eq!(ids(&state), vec!["s1", "s3"]);
        assert_eq!(state.pending_delete, None);
        assert_eq!(transport.requests()[1].method, HttpMethod::Delete);
        assert_eq!(transport.requests()[1].path, "/api/suppliers/s2");
    }

    #[test]
    fn test_failed_delete_keeps_rows() {
        let transport = ScriptedTransport::new(vec![
            ApiResponse::new(200, THREE_SUPPLIERS),
            ApiResponse::new(409, r#"{"error": "Supplier has open returns"}"#),
        ]);
        let store = MemoryStore::<ListState<Supplier>>::new();
        let controller = ListController::new(client(transport.clone(), CountingSession::new()), store.clone());
        let query = ListQuery::default();

        block_on(controller.refresh(&query)).unwrap();
        controller.request_delete("s1");
        let err = block_on(controller.confirm_delete(&query)).unwrap_err();

        let state = store.snapshot();
        assert_eq!(err, ResourceError::Delete("Supplier has open returns".into()));
        assert_eq!(ids(&state), vec!["s1", "s2", "s3"]);
        assert_eq!(state.visible_error().as_deref(), Some("Supplier has open returns"));
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let transport = ScriptedTransport::new(vec![]);
        let store = MemoryStore::<ListState<Supplier>>::new();
        let controller = ListController::new(client(transport.clone(), CountingSession::new()), store.clone());

        controller.request_delete("s1");
        controller.cancel_delete();
        block_on(controller.confirm_delete(&ListQuery::default())).unwrap();

        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_empty_list_shows_empty_state() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(200, r#"{"data": []}"#)]);
        let store = MemoryStore::<ListState<Supplier>>::new();
        let controller = ListController::new(client(transport, CountingSession::new()), store.clone());

        block_on(controller.refresh(&ListQuery::default())).unwrap();

        assert_eq!(
            store.snapshot().empty_view(&ListQuery::default(), 0),
            Some(EmptyView::FirstRecord)
        );
    }

    #[test]
    fn test_failed_load_is_not_empty_state() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(500, "")]);
        let store = MemoryStore::<ListState<Supplier>>::new();
        let controller = ListController::new(client(transport, CountingSession::new()), store.clone());

        let err = block_on(controller.refresh(&ListQuery::default())).unwrap_err();

        assert_eq!(err, ResourceError::LoadFailed("Failed to load the list".into()));
        assert_eq!(store.snapshot().empty_view(&ListQuery::default(), 0), None);
    }
}
