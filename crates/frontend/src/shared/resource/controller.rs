//! Generic load/submit/remove for one record of a [`Resource`].

use std::marker::PhantomData;

use contracts::domain::common::Identified;
use contracts::shared::form::FormBinding;

use super::client::{ApiClient, Resource};
use super::command::Command;
use super::error::ResourceError;
use super::state::{Phase, ResourceState, StateStore};

pub struct ResourceController<R, S> {
    client: ApiClient,
    store: S,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S> ResourceController<R, S>
where
    R: Resource,
    S: StateStore<ResourceState<R>>,
{
    pub fn new(client: ApiClient, store: S) -> Self {
        Self {
            client,
            store,
            _resource: PhantomData,
        }
    }

    /// Fetch the record into the state. When loads overlap, only the most
    /// recently started one is applied.
    pub async fn load(&self, id: &str) -> Result<R, ResourceError> {
        let mut generation = 0;
        self.store.write(|state| {
            state.generation += 1;
            generation = state.generation;
            state.phase = Phase::Loading;
            state.error = None;
        });

        let result = self.client.fetch_one::<R>(id).await;

        let applied = self.store.write(|state| {
            if state.generation != generation {
                return;
            }
            match &result {
                Ok(entity) => {
                    state.phase = Phase::Ready;
                    state.entity = Some(entity.clone());
                    state.error = None;
                }
                Err(err) => {
                    state.phase = Phase::Failed;
                    state.error = Some(err.clone());
                }
            }
        });

        match &result {
            Ok(_) if applied => log::info!("{} '{}' loaded", R::NOUN, id),
            Ok(_) => log::debug!("{} '{}' loaded after its view closed", R::NOUN, id),
            Err(err) => log::warn!("Failed to load {} '{}': {}", R::NOUN, id, err),
        }
        result
    }

    /// Validate and save the form. Locked or invalid forms never reach the
    /// backend. `on_saved` receives the saved id and is skipped when the
    /// view closed while the request was in flight.
    pub async fn submit<F>(&self, form: &R::Form, on_saved: F) -> Result<(), ResourceError>
    where
        F: FnOnce(Option<String>),
    {
        if form.is_locked() {
            self.fail_submit(ResourceError::Locked, false);
            return Err(ResourceError::Locked);
        }

        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(field_error) => {
                let err = ResourceError::from(field_error);
                self.fail_submit(err.clone(), false);
                return Err(err);
            }
        };

        self.store.write(|state| {
            state.phase = Phase::Submitting;
            state.error = None;
        });

        match self.client.save::<R, _>(form.id(), &payload).await {
            Ok(saved_id) => {
                let saved_id = saved_id.or_else(|| form.id().map(str::to_string));
                log::info!("{} saved ({})", R::NOUN, saved_id.as_deref().unwrap_or("-"));

                let alive = self.store.write(|state| {
                    state.phase = Phase::Ready;
                    state.error = None;
                });
                if alive {
                    on_saved(saved_id);
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to save {}: {}", R::NOUN, err);
                self.fail_submit(err.clone(), true);
                Err(err)
            }
        }
    }

    pub async fn remove<F>(&self, id: &str, on_removed: F) -> Result<(), ResourceError>
    where
        F: FnOnce(),
    {
        self.store.write(|state| {
            state.phase = Phase::Submitting;
            state.error = None;
        });

        match self.client.remove::<R>(id).await {
            Ok(()) => {
                log::info!("{} '{}' deleted", R::NOUN, id);
                let alive = self.store.write(|state| {
                    state.phase = Phase::Ready;
                    state.entity = None;
                });
                if alive {
                    on_removed();
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to delete {} '{}': {}", R::NOUN, id, err);
                self.fail_submit(err.clone(), true);
                Err(err)
            }
        }
    }

    /// Run a workflow step on the loaded record and reload it. Steps the
    /// record's state does not offer never reach the backend.
    pub async fn perform<C>(&self, command: &C) -> Result<R, ResourceError>
    where
        C: Command<R>,
        R: Identified,
    {
        let Some(entity) = self.store.read().and_then(|state| state.entity) else {
            let err = ResourceError::NotFound(format!("{} is not loaded", R::NOUN));
            self.fail_submit(err.clone(), false);
            return Err(err);
        };

        let body = match command
            .check(&entity)
            .and_then(|()| command.body().map_err(ResourceError::from))
        {
            Ok(body) => body,
            Err(err) => {
                self.fail_submit(err.clone(), false);
                return Err(err);
            }
        };

        self.store.write(|state| {
            state.phase = Phase::Submitting;
            state.error = None;
        });

        if let Err(err) = self.client.post_command(&command.path(&entity), &body).await {
            log::warn!("{} '{}': {} failed: {}", R::NOUN, entity.id(), command.name(), err);
            self.fail_submit(err.clone(), true);
            return Err(err);
        }

        log::info!("{} '{}': {}", R::NOUN, entity.id(), command.name());
        self.load(entity.id()).await
    }

    /// Local failures keep the current phase; backend failures move to `SubmitFailed`.
    fn fail_submit(&self, err: ResourceError, from_backend: bool) {
        self.store.write(|state| {
            if from_backend {
                state.phase = Phase::SubmitFailed;
            }
            state.error = Some(err);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::test_support::{
        client, CountingSession, GatedTransport, MemoryStore, ScriptedTransport,
    };
    use crate::shared::resource::transport::{ApiResponse, HttpMethod};
    use contracts::domain::a001_branch::aggregate::{Branch, BranchForm};
    use contracts::domain::a005_return_request::aggregate::{ReturnForm, ReturnRequest};
    use crate::shared::resource::transport::Transport;
    use futures::executor::block_on;
    use futures::future::{join, join3};
    use std::cell::RefCell;
    use std::rc::Rc;

    type BranchStore = MemoryStore<ResourceState<Branch>>;

    fn branch_controller(
        transport: Rc<dyn Transport>,
    ) -> (ResourceController<Branch, BranchStore>, BranchStore, Rc<CountingSession>) {
        let session = CountingSession::new();
        let store = MemoryStore::new();
        let controller = ResourceController::new(client(transport, session.clone()), store.clone());
        (controller, store, session)
    }

    #[test]
    fn test_load_edit_save_round_trip() {
        let transport = ScriptedTransport::new(vec![
            ApiResponse::new(
                200,
                r#"{"id": "b1", "code": "B01", "name": "Main", "nameAr": null, "isMain": 1, "isActive": 1}"#,
            ),
            ApiResponse::new(200, r#"{"id": "b1"}"#),
        ]);
        let (controller, store, _) = branch_controller(transport.clone());

        let branch = block_on(controller.load("b1")).unwrap();
        assert_eq!(store.snapshot().phase, Phase::Ready);

        let mut form = BranchForm::from_entity(&branch);
        assert_eq!(form.name_ar, "");
        assert!(form.is_main && form.is_active);
        form.name = "Main Branch".into();

        let saved = RefCell::new(None);
        block_on(controller.submit(&form, |id| *saved.borrow_mut() = id)).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[1].method, HttpMethod::Put);
        assert_eq!(requests[1].path, "/api/branches/b1");
        let body: serde_json::Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "code": "B01", "name": "Main Branch", "nameAr": null, "address": null,
                "city": null, "phone": null, "email": null, "isMain": 1, "isActive": 1
            })
        );
        assert_eq!(saved.into_inner(), Some("b1".to_string()));
        assert_eq!(store.snapshot().phase, Phase::Ready);
    }

    #[test]
    fn test_unauthorized_notifies_session_once() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(401, "")]);
        let (controller, store, session) = branch_controller(transport);

        let err = block_on(controller.load("b1")).unwrap_err();

        assert_eq!(err, ResourceError::SessionExpired);
        assert_eq!(session.expired_count(), 1);
        assert_eq!(store.snapshot().visible_error(), None);
    }

    #[test]
    fn test_missing_record_blocks_form() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(404, r#"{"error": "Branch not found"}"#)]);
        let (controller, store, _) = branch_controller(transport);

        block_on(controller.load("gone")).unwrap_err();

        let state = store.snapshot();
        assert!(state.is_blocked());
        assert_eq!(state.visible_error().as_deref(), Some("Branch not found"));
    }

    #[test]
    fn test_invalid_form_sends_nothing() {
        let transport = ScriptedTransport::new(vec![]);
        let (controller, store, _) = branch_controller(transport.clone());
        let form = BranchForm {
            code: "B02".into(),
            ..BranchForm::default()
        };

        let err = block_on(controller.submit(&form, |_| panic!("must not navigate"))).unwrap_err();

        assert!(matches!(err, ResourceError::Validation(_)));
        assert!(transport.requests().is_empty());
        assert_eq!(store.snapshot().phase, Phase::Idle);
    }

    #[test]
    fn test_locked_return_sends_nothing() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(
            200,
            r#"{"return": {"id": "r1", "returnNumber": "RET-0001", "status": "sent", "supplierId": "s1"}}"#,
        )]);
        let session = CountingSession::new();
        let store = MemoryStore::<ResourceState<ReturnRequest>>::new();
        let controller = ResourceController::new(client(transport.clone(), session), store.clone());

        let request = block_on(controller.load("r1")).unwrap();
        let form = ReturnForm::from_entity(&request);

        let err = block_on(controller.submit(&form, |_| panic!("must not navigate"))).unwrap_err();

        assert_eq!(err, ResourceError::Locked);
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(store.snapshot().visible_error().as_deref(), Some("This record is locked and can no longer be edited"));
    }

    #[test]
    fn test_backend_rejection_keeps_form_editable() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(400, r#"{"message": "Code taken"}"#)]);
        let (controller, store, _) = branch_controller(transport);
        let form = BranchForm {
            code: "B01".into(),
            name: "North".into(),
            ..BranchForm::default()
        };

        block_on(controller.submit(&form, |_| panic!("must not navigate"))).unwrap_err();

        let state = store.snapshot();
        assert_eq!(state.phase, Phase::SubmitFailed);
        assert!(!state.is_submitting());
        assert_eq!(state.visible_error().as_deref(), Some("Code taken"));
    }

    #[test]
    fn test_latest_load_wins() {
        let (transport, mut gates) = GatedTransport::new(2);
        let (controller, store, _) = branch_controller(transport);
        let second_gate = gates.pop().unwrap();
        let first_gate = gates.pop().unwrap();

        let release = async move {
            second_gate
                .send(ApiResponse::new(200, r#"{"id": "b2", "name": "Second"}"#))
                .unwrap();
            first_gate
                .send(ApiResponse::new(200, r#"{"id": "b1", "name": "First"}"#))
                .unwrap();
        };

        let (first, second, _) = block_on(join3(controller.load("b1"), controller.load("b2"), release));

        assert!(first.is_ok() && second.is_ok());
        assert_eq!(store.snapshot().entity.map(|b| b.id), Some("b2".to_string()));
    }

    #[test]
    fn test_closed_view_ignores_late_result() {
        let (transport, mut gates) = GatedTransport::new(1);
        let (controller, store, _) = branch_controller(transport);
        let gate = gates.pop().unwrap();
        let closing_store = store.clone();

        let release = async move {
            closing_store.dispose();
            gate.send(ApiResponse::new(200, r#"{"id": "b1"}"#)).unwrap();
        };

        let (loaded, _) = block_on(join(controller.load("b1"), release));

        assert!(loaded.is_ok());
        assert!(store.read().is_none());
    }

    #[test]
    fn test_remove_clears_entity() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(204, "")]);
        let (controller, store, _) = branch_controller(transport.clone());
        let removed = RefCell::new(false);

        block_on(controller.remove("b1", || *removed.borrow_mut() = true)).unwrap();

        assert!(removed.into_inner());
        assert_eq!(transport.requests()[0].method, HttpMethod::Delete);
        assert!(store.snapshot().entity.is_none());
    }
}
