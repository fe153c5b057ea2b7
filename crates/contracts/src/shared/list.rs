//! Wire shapes shared by every collection endpoint.

use serde::{Deserialize, Serialize};

/// Default page size used by the backend when `limit` is omitted
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Collection response. Endpoints disagree on the envelope key, so all
/// observed shapes are accepted and normalized with [`ListEnvelope::into_items`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Data { data: Vec<T> },
    Items { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Data { data } => data,
            ListEnvelope::Items { items } => items,
            ListEnvelope::Bare(items) => items,
        }
    }
}

/// Query parameters of a collection request (`?page=1&limit=20&search=...`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: None,
            status: None,
        }
    }
}

impl ListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    /// A full page suggests there may be a next one
    pub fn has_next_page(&self, received: usize) -> bool {
        received >= self.limit as usize
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// True when the request asks for less than the whole collection
    /// (a later page, a search term, a status filter).
    pub fn is_narrowed(&self) -> bool {
        self.page > 1
            || self.search.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.status.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Error body returned with 4xx/5xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Parse a raw body; returns the backend message if one is present
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or(parsed.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Body of a successful create/update response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavedRecord {
    #[serde(default, alias = "returnId")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
    }

    fn ids(json: &str) -> Vec<String> {
        serde_json::from_str::<ListEnvelope<Row>>(json)
            .unwrap()
            .into_items()
            .into_iter()
            .map(|row| row.id)
            .collect()
    }

    #[test]
    fn test_envelope_shapes_normalize() {
        assert_eq!(ids(r#"{"data": [{"id": "a"}, {"id": "b"}]}"#), vec!["a", "b"]);
        assert_eq!(ids(r#"{"items": [{"id": "c"}]}"#), vec!["c"]);
        assert_eq!(ids(r#"[{"id": "d"}]"#), vec!["d"]);
        assert!(ids(r#"{"data": []}"#).is_empty());
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"error": "Code already exists"}"#),
            Some("Code already exists".to_string())
        );
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message": "Forbidden"}"#),
            Some("Forbidden".to_string())
        );
        assert_eq!(ApiErrorBody::message_from(r#"{"error": ""}"#), None);
        assert_eq!(ApiErrorBody::message_from("<html>"), None);
    }

    #[test]
    fn test_pagination_hints() {
        let query = ListQuery::with_limit(2);
        assert!(!query.has_previous_page());
        assert!(query.has_next_page(2));
        assert!(!query.has_next_page(1));
        assert_eq!(ListQuery::with_limit(0).limit, 1);
    }

    #[test]
    fn test_narrowed_query() {
        assert!(!ListQuery::default().is_narrowed());
        assert!(ListQuery { page: 2, ..ListQuery::default() }.is_narrowed());
        assert!(ListQuery { search: Some("acme".into()), ..ListQuery::default() }.is_narrowed());
        assert!(!ListQuery { search: Some("  ".into()), ..ListQuery::default() }.is_narrowed());
        assert!(ListQuery { status: Some("sent".into()), ..ListQuery::default() }.is_narrowed());
    }

    #[test]
    fn test_saved_record_reads_return_id() {
        let saved: SavedRecord =
            serde_json::from_str(r#"{"success": true, "returnId": "r9", "returnNumber": "RET-9"}"#).unwrap();
        assert_eq!(saved.id.as_deref(), Some("r9"));
    }
}
