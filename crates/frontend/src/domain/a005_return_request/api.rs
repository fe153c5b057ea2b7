use contracts::domain::a005_return_request::aggregate::{
    label_of, AlertLevel, ReturnDetailEnvelope, ReturnForm, ReturnRequest, ReturnStatus, RETURN_TYPES,
};

use crate::shared::components::StatusTone;
use crate::shared::list_utils::Searchable;
use crate::shared::resource::Resource;

impl Resource for ReturnRequest {
    type Form = ReturnForm;
    const COLLECTION: &'static str = "/api/returns";
    const NOUN: &'static str = "Return";
    const DELETABLE: bool = false;

    /// The detail endpoint answers `{ "return": {...}, "items": [...], "history": [...] }`
    fn decode(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<ReturnDetailEnvelope>(value).map(ReturnDetailEnvelope::into_request)
    }
}

impl Searchable for ReturnRequest {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.return_number.as_str()];
        fields.extend(self.supplier_name.as_deref());
        fields.extend(self.tracking_number.as_deref());
        fields
    }
}

pub fn status_tone(status: ReturnStatus) -> StatusTone {
    match status {
        ReturnStatus::Pending => StatusTone::Warning,
        ReturnStatus::Sent => StatusTone::Info,
        ReturnStatus::Received => StatusTone::Brand,
        ReturnStatus::Resolved => StatusTone::Success,
        ReturnStatus::Cancelled => StatusTone::Neutral,
    }
}

pub fn alert_tone(level: Option<AlertLevel>) -> StatusTone {
    match level {
        Some(AlertLevel::Green) => StatusTone::Success,
        Some(AlertLevel::Yellow) | Some(AlertLevel::Orange) => StatusTone::Warning,
        Some(AlertLevel::Red) => StatusTone::Danger,
        None => StatusTone::Neutral,
    }
}

pub fn return_type_label(value: Option<&str>) -> String {
    value.map_or_else(|| "-".to_string(), |value| label_of(&RETURN_TYPES, value))
}

/// Timeline caption of a history entry
pub fn history_event_label(event_type: &str) -> String {
    match event_type {
        "created" => "Return created",
        "updated" => "Details updated",
        "sent" => "Sent to supplier",
        "reminder_sent" => "Reminder sent",
        "received" => "Received by supplier",
        "item_resolved" => "Item resolved",
        "resolved" => "All items resolved",
        "cancelled" => "Cancelled",
        "note_added" => "Note added",
        other => return other.replace('_', " "),
    }
    .to_string()
}

/// Tone of an item's own status (pending, sent, received, resolved, rejected)
pub fn item_status_tone(item_status: Option<&str>) -> StatusTone {
    match item_status {
        Some("sent") => StatusTone::Info,
        Some("received") => StatusTone::Brand,
        Some("resolved") => StatusTone::Success,
        Some("rejected") => StatusTone::Danger,
        _ => StatusTone::Warning,
    }
}

/// `12 days`, `1 day`, or `-` when the backend sent nothing
pub fn days_pending_label(days: Option<i64>) -> String {
    match days {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{} days", days),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;
    use serde_json::json;

    #[test]
    fn test_detail_envelope_decodes() {
        let request = ReturnRequest::decode(json!({
            "return": {"id": "r7", "returnNumber": "RET-0007", "status": "resolved"},
            "items": [{"id": "i1", "productName": "Switch", "resolution": "replaced"}],
            "history": [{"id": "h1", "eventType": "resolved"}]
        }))
        .unwrap();
        assert_eq!(request.return_number, "RET-0007");
        assert_eq!(request.status, ReturnStatus::Resolved);
        assert!(request.items[0].is_resolved());
        assert_eq!(request.history.len(), 1);
    }

    #[test]
    fn test_bare_record_is_rejected() {
        assert!(ReturnRequest::decode(json!({"id": "r7"})).is_err());
    }

    #[test]
    fn test_tones() {
        assert_eq!(status_tone(ReturnStatus::Pending), StatusTone::Warning);
        assert_eq!(status_tone(ReturnStatus::Cancelled), StatusTone::Neutral);
        assert_eq!(alert_tone(Some(AlertLevel::Red)), StatusTone::Danger);
        assert_eq!(alert_tone(None), StatusTone::Neutral);
    }

    #[test]
    fn test_labels() {
        assert_eq!(return_type_label(Some("warranty")), "Warranty");
        assert_eq!(return_type_label(Some("unknown")), "unknown");
        assert_eq!(days_pending_label(Some(1)), "1 day");
        assert_eq!(days_pending_label(Some(9)), "9 days");
        assert_eq!(days_pending_label(None), "-");
        assert_eq!(history_event_label("reminder_sent"), "Reminder sent");
        assert_eq!(history_event_label("photo_added"), "photo added");
        assert_eq!(item_status_tone(Some("rejected")), StatusTone::Danger);
        assert_eq!(item_status_tone(None), StatusTone::Warning);
    }

    #[test]
    fn test_search_by_supplier_name() {
        let items: Vec<ReturnRequest> = serde_json::from_value(json!([
            {"id": "r1", "returnNumber": "RET-0001", "supplierName": "Baghdad Parts"},
            {"id": "r2", "returnNumber": "RET-0002", "supplierName": "Erbil Supply"}
        ]))
        .unwrap();
        let found = filter_list(&items, "erbil");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "r2");
    }
}
