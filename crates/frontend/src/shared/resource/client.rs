//! Typed REST calls shared by the detail and list controllers.

use std::rc::Rc;

use contracts::shared::form::FormBinding;
use contracts::shared::list::{ApiErrorBody, ListEnvelope, ListQuery, SavedRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ResourceError;
use super::session::SessionListener;
use super::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};

/// A backend collection (`/api/branches`, `/api/returns`, ...) and its record type.
pub trait Resource: DeserializeOwned + Clone + 'static {
    type Form: FormBinding<Entity = Self>;

    /// Collection path, e.g. `/api/branches`
    const COLLECTION: &'static str;

    /// Singular noun used in log lines and notices
    const NOUN: &'static str;

    /// Verb of `{collection}/{id}` updates
    const UPDATE_METHOD: HttpMethod = HttpMethod::Put;

    /// False when the backend has no `DELETE {collection}/{id}` route
    const DELETABLE: bool = true;

    /// Decode a detail response. Override for endpoints that wrap the record.
    fn decode(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION, urlencoding::encode(id))
    }
}

fn backend_message(response: &ApiResponse, fallback: &str) -> String {
    ApiErrorBody::message_from(&response.body).unwrap_or_else(|| fallback.to_string())
}

fn decode_error(err: serde_json::Error) -> ResourceError {
    ResourceError::Network(format!("Failed to parse response: {}", err))
}

/// Executes requests and classifies responses into [`ResourceError`]s.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    session: Rc<dyn SessionListener>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, session: Rc<dyn SessionListener>) -> Self {
        Self { transport, session }
    }

    /// Send one request. A 401 notifies the session listener and fails with
    /// `SessionExpired`; every other status is returned to the caller.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ResourceError> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            ResourceError::Network(e)
        })?;

        if response.is_unauthorized() {
            log::warn!("{} {}: session expired", method.as_str(), path);
            self.session.session_expired();
            return Err(ResourceError::SessionExpired);
        }
        if !response.is_success() {
            log::warn!("{} {} returned {}", method.as_str(), path, response.status);
        }

        Ok(response)
    }

    pub async fn fetch_one<R: Resource>(&self, id: &str) -> Result<R, ResourceError> {
        if id.trim().is_empty() {
            return Err(ResourceError::NotFound(format!("{} not found", R::NOUN)));
        }

        let response = self.execute(ApiRequest::get(R::item_path(id))).await?;
        if !response.is_success() {
            let fallback = format!("{} not found", R::NOUN);
            return Err(ResourceError::NotFound(backend_message(&response, &fallback)));
        }

        let value: serde_json::Value = serde_json::from_str(&response.body).map_err(decode_error)?;
        R::decode(value).map_err(decode_error)
    }

    pub async fn fetch_list<R: Resource>(&self, query: &ListQuery) -> Result<Vec<R>, ResourceError> {
        self.fetch_rows(R::COLLECTION, query).await
    }

    /// Rows of any collection endpoint, including read-only ones that have
    /// no [`Resource`] of their own (products of a category).
    pub async fn fetch_rows<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &ListQuery,
    ) -> Result<Vec<T>, ResourceError> {
        let query_string = serde_qs::to_string(query)
            .map_err(|e| ResourceError::LoadFailed(format!("Invalid query: {}", e)))?;
        let separator = if collection.contains('?') { '&' } else { '?' };
        let path = if query_string.is_empty() {
            collection.to_string()
        } else {
            format!("{}{}{}", collection, separator, query_string)
        };

        let response = self.execute(ApiRequest::get(path)).await?;
        if !response.is_success() {
            return Err(ResourceError::LoadFailed(backend_message(
                &response,
                "Failed to load the list",
            )));
        }

        serde_json::from_str::<ListEnvelope<T>>(&response.body)
            .map(ListEnvelope::into_items)
            .map_err(decode_error)
    }

    /// Create (`POST`) when `id` is `None`, update with `R::UPDATE_METHOD` otherwise.
    /// Returns the id reported by the backend, if any.
    pub async fn save<R: Resource, P: Serialize>(
        &self,
        id: Option<&str>,
        payload: &P,
    ) -> Result<Option<String>, ResourceError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ResourceError::Validation(format!("Failed to serialize form: {}", e)))?;
        let request = match id {
            Some(id) => ApiRequest::with_json(R::UPDATE_METHOD, R::item_path(id), body),
            None => ApiRequest::with_json(HttpMethod::Post, R::COLLECTION, body),
        };

        let response = self.execute(request).await?;
        if !response.is_success() {
            return Err(ResourceError::Validation(backend_message(&response, "Save failed")));
        }

        let saved = serde_json::from_str::<SavedRecord>(&response.body).unwrap_or_default();
        Ok(saved.id)
    }

    pub async fn remove<R: Resource>(&self, id: &str) -> Result<(), ResourceError> {
        if !R::DELETABLE {
            return Err(ResourceError::NotAllowed(format!(
                "{} records cannot be deleted",
                R::NOUN
            )));
        }

        let response = self.execute(ApiRequest::delete(R::item_path(id))).await?;
        if !response.is_success() {
            return Err(ResourceError::Delete(backend_message(&response, "Delete failed")));
        }
        Ok(())
    }

    /// `POST` a workflow step (`/api/returns/r1/send`, ...). Rejections carry
    /// the backend message.
    pub async fn post_command<P: Serialize>(&self, path: &str, body: &P) -> Result<(), ResourceError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ResourceError::Validation(format!("Failed to serialize request: {}", e)))?;

        let response = self
            .execute(ApiRequest::with_json(HttpMethod::Post, path, body))
            .await?;
        if !response.is_success() {
            return Err(ResourceError::Validation(backend_message(&response, "Request failed")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::test_support::{client, CountingSession, ScriptedTransport};
    use contracts::domain::a001_branch::aggregate::Branch;
    use contracts::domain::a003_delivery_company::aggregate::DeliveryCompany;
    use contracts::domain::a005_return_request::aggregate::{ReturnRequest, ReturnStatus};
    use futures::executor::block_on;

    #[test]
    fn test_list_accepts_both_envelopes() {
        let transport = ScriptedTransport::new(vec![
            ApiResponse::new(200, r#"{"data": [{"id": "b1"}, {"id": "b2"}]}"#),
            ApiResponse::new(200, r#"{"items": [{"id": "b3"}]}"#),
        ]);
        let api = client(transport.clone(), CountingSession::new());

        let first = block_on(api.fetch_list::<Branch>(&ListQuery::default())).unwrap();
        let second = block_on(api.fetch_list::<Branch>(&ListQuery::default())).unwrap();

        assert_eq!(first.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(), vec!["b1", "b2"]);
        assert_eq!(second[0].id, "b3");
        assert_eq!(transport.requests()[0].path, "/api/branches?page=1&limit=20");
    }

    #[test]
    fn test_list_query_carries_search() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(200, "[]")]);
        let api = client(transport.clone(), CountingSession::new());
        let query = ListQuery {
            search: Some("north".into()),
            ..ListQuery::default()
        };

        block_on(api.fetch_list::<Branch>(&query)).unwrap();
        assert_eq!(
            transport.requests()[0].path,
            "/api/branches?page=1&limit=20&search=north"
        );
    }

    #[test]
    fn test_identifiers_are_percent_encoded() {
        assert_eq!(Branch::item_path("a/b c"), "/api/branches/a%2Fb%20c");
    }

    #[test]
    fn test_return_detail_is_unwrapped() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(
            200,
            r#"{"return": {"id": "r1", "status": "sent"}, "items": [], "history": []}"#,
        )]);
        let api = client(transport, CountingSession::new());

        let request = block_on(api.fetch_one::<ReturnRequest>("r1")).unwrap();
        assert_eq!(request.status, ReturnStatus::Sent);
    }

    #[test]
    fn test_backend_message_surfaces_verbatim() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(
            409,
            r#"{"error": "Branch code already exists"}"#,
        )]);
        let api = client(transport, CountingSession::new());

        let err = block_on(api.save::<Branch, _>(Some("b1"), &serde_json::json!({}))).unwrap_err();
        assert_eq!(err, ResourceError::Validation("Branch code already exists".into()));
    }

    #[test]
    fn test_blank_id_fails_without_request() {
        let transport = ScriptedTransport::new(vec![]);
        let api = client(transport.clone(), CountingSession::new());

        let err = block_on(api.fetch_one::<Branch>("  ")).unwrap_err();
        assert!(matches!(err, ResourceError::NotFound(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_update_uses_the_collection_verb() {
        let transport = ScriptedTransport::new(vec![
            ApiResponse::new(200, r#"{"success": true}"#),
            ApiResponse::new(200, r#"{"success": true}"#),
        ]);
        let api = client(transport.clone(), CountingSession::new());
        let body = serde_json::json!({});

        block_on(api.save::<DeliveryCompany, _>(Some("dc_1"), &body)).unwrap();
        block_on(api.save::<Branch, _>(Some("b1"), &body)).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Patch);
        assert_eq!(requests[0].path, "/api/delivery/companies/dc_1");
        assert_eq!(requests[1].method, HttpMethod::Put);
    }

    #[test]
    fn test_undeletable_collection_sends_nothing() {
        let transport = ScriptedTransport::new(vec![]);
        let api = client(transport.clone(), CountingSession::new());

        let err = block_on(api.remove::<ReturnRequest>("r1")).unwrap_err();

        assert!(matches!(err, ResourceError::NotAllowed(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_command_rejection_surfaces_backend_message() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(
            400,
            r#"{"error": "Return cannot be sent"}"#,
        )]);
        let api = client(transport.clone(), CountingSession::new());

        let err = block_on(api.post_command("/api/returns/r1/send", &serde_json::json!({}))).unwrap_err();

        assert_eq!(err, ResourceError::Validation("Return cannot be sent".into()));
        assert_eq!(transport.requests()[0].method, HttpMethod::Post);
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let transport = ScriptedTransport::failing("offline");
        let api = client(transport, CountingSession::new());

        let err = block_on(api.remove::<Branch>("b1")).unwrap_err();
        assert_eq!(err, ResourceError::Network("offline".into()));
    }
}
