use serde::{Deserialize, Serialize};

use crate::domain::common::Identified;
use crate::shared::form::{
    deserialize_decimal, non_empty, optional_decimal, optional_select, required_text, text_or_empty, FieldError, FormBinding,
};

// ============================================================================
// Status
// ============================================================================

/// Lifecycle of a supplier return: pending → sent → received → resolved, or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnStatus {
    #[default]
    Pending,
    Sent,
    Received,
    Resolved,
    Cancelled,
}

pub const RETURN_STATUSES: [ReturnStatus; 5] = [
    ReturnStatus::Pending,
    ReturnStatus::Sent,
    ReturnStatus::Received,
    ReturnStatus::Resolved,
    ReturnStatus::Cancelled,
];

impl ReturnStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "pending",
            ReturnStatus::Sent => "sent",
            ReturnStatus::Received => "received",
            ReturnStatus::Resolved => "resolved",
            ReturnStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Pending => "Pending",
            ReturnStatus::Sent => "Sent",
            ReturnStatus::Received => "Received",
            ReturnStatus::Resolved => "Resolved",
            ReturnStatus::Cancelled => "Cancelled",
        }
    }

    /// Once goods have left for the supplier the request is no longer editable.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReturnStatus::Pending)
    }
}

/// Alert colour assigned by the backend from the number of days pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Green,
    Yellow,
    Orange,
    Red,
}

impl AlertLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "green" => Some(AlertLevel::Green),
            "yellow" => Some(AlertLevel::Yellow),
            "orange" => Some(AlertLevel::Orange),
            "red" => Some(AlertLevel::Red),
            _ => None,
        }
    }
}

/// Return types accepted by the backend
pub const RETURN_TYPES: [(&str, &str); 4] = [
    ("defective", "Defective"),
    ("warranty", "Warranty"),
    ("exchange", "Exchange"),
    ("other", "Other"),
];

/// Why a single item goes back
pub const RETURN_REASONS: [(&str, &str); 5] = [
    ("defective", "Defective"),
    ("wrong_item", "Wrong item"),
    ("damaged", "Damaged"),
    ("warranty", "Warranty"),
    ("other", "Other"),
];

pub fn label_of(options: &[(&'static str, &'static str)], value: &str) -> String {
    options
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| value.to_string())
}

// ============================================================================
// Entity
// ============================================================================

/// Return request sent back to a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub id: String,
    #[serde(default)]
    pub return_number: String,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub status: ReturnStatus,
    #[serde(default)]
    pub color_code: Option<String>,
    #[serde(default)]
    pub total_items: Option<i64>,
    #[serde(default)]
    pub days_pending: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub shipping_method: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub shipping_cost: Option<f64>,
    #[serde(default)]
    pub reminder_count: Option<i64>,
    #[serde(default)]
    pub last_reminder_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub sent_at: Option<String>,
    #[serde(default)]
    pub received_at: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    /// Filled from the detail envelope; list rows leave it empty
    #[serde(default)]
    pub items: Vec<ReturnItem>,
    #[serde(default)]
    pub history: Vec<ReturnHistoryEntry>,
}

impl Identified for ReturnRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        if self.return_number.is_empty() {
            self.id.clone()
        } else {
            self.return_number.clone()
        }
    }
}

impl ReturnRequest {
    pub fn alert_level(&self) -> Option<AlertLevel> {
        self.color_code.as_deref().and_then(AlertLevel::parse)
    }

    pub fn supplier_label(&self) -> String {
        self.supplier_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| "-".to_string())
    }

    /// Workflow steps the backend accepts in the current status
    pub fn allows(&self, action: ReturnAction) -> bool {
        match action {
            ReturnAction::Send => self.status == ReturnStatus::Pending,
            ReturnAction::Receive | ReturnAction::Remind => self.status == ReturnStatus::Sent,
            ReturnAction::ResolveItem => self.status == ReturnStatus::Received,
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&ReturnItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// One product line of a return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    pub id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub return_reason: Option<String>,
    #[serde(default)]
    pub reason_details: Option<String>,
    #[serde(default)]
    pub item_status: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub resolution_notes: Option<String>,
    #[serde(default)]
    pub replacement_serial_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub repair_cost: Option<f64>,
}

impl ReturnItem {
    pub fn is_resolved(&self) -> bool {
        self.resolution.as_deref().is_some_and(|r| !r.is_empty())
            || matches!(self.item_status.as_deref(), Some("resolved" | "rejected"))
    }

    pub fn product_label(&self) -> String {
        let name = self.product_name.as_deref().unwrap_or("-");
        match self.product_model.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(model) => format!("{} ({})", name, model),
            None => name.to_string(),
        }
    }
}

/// Audit entry of a return, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnHistoryEntry {
    pub id: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub from_status: Option<String>,
    #[serde(default)]
    pub to_status: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub performed_at: Option<String>,
    #[serde(default)]
    pub performed_by_name: Option<String>,
}

/// `GET /api/returns/{id}` wraps the request together with its items and history.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnDetailEnvelope {
    #[serde(rename = "return")]
    pub request: ReturnRequest,
    #[serde(default)]
    pub items: Vec<ReturnItem>,
    #[serde(default)]
    pub history: Vec<ReturnHistoryEntry>,
}

impl ReturnDetailEnvelope {
    pub fn into_request(self) -> ReturnRequest {
        ReturnRequest {
            items: self.items,
            history: self.history,
            ..self.request
        }
    }
}

// ============================================================================
// Workflow
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnAction {
    Send,
    Receive,
    Remind,
    ResolveItem,
}

impl ReturnAction {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnAction::Send => "Mark as sent",
            ReturnAction::Receive => "Confirm receipt",
            ReturnAction::Remind => "Send reminder",
            ReturnAction::ResolveItem => "Resolve item",
        }
    }
}

/// Outcomes of an item once the supplier has handled it
pub const RESOLUTIONS: [(&str, &str); 4] = [
    ("repaired", "Repaired"),
    ("replaced", "Replaced"),
    ("refunded", "Refunded"),
    ("rejected", "Rejected"),
];

/// Shipping details entered when the goods leave
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentForm {
    pub shipping_method: String,
    pub tracking_number: String,
    pub shipping_cost: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPayload {
    pub shipping_method: Option<String>,
    pub tracking_number: Option<String>,
    pub shipping_cost: Option<f64>,
}

impl ShipmentForm {
    pub fn to_payload(&self) -> Result<ShipmentPayload, FieldError> {
        let shipping_cost = optional_decimal(&self.shipping_cost, "shipping_cost", "Shipping cost")?;
        if shipping_cost.is_some_and(|cost| cost < 0.0) {
            return Err(FieldError::invalid("shipping_cost", "Shipping cost", "must not be negative"));
        }
        Ok(ShipmentPayload {
            shipping_method: non_empty(&self.shipping_method),
            tracking_number: non_empty(&self.tracking_number),
            shipping_cost,
        })
    }
}

/// `POST /{id}/receive`; the notes replace the internal notes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptPayload {
    pub notes: Option<String>,
}

/// `POST /{id}/reminder`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderPayload {
    pub message: Option<String>,
    pub channel: &'static str,
}

impl ReminderPayload {
    pub fn system(message: &str) -> Self {
        Self {
            message: non_empty(message),
            channel: "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemResolutionForm {
    pub resolution: String,
    pub resolution_notes: String,
    pub replacement_serial_number: String,
    pub repair_cost: String,
}

impl Default for ItemResolutionForm {
    fn default() -> Self {
        Self {
            resolution: RESOLUTIONS[0].0.to_string(),
            resolution_notes: String::new(),
            replacement_serial_number: String::new(),
            repair_cost: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResolutionPayload {
    pub resolution: String,
    pub resolution_notes: Option<String>,
    pub replacement_serial_number: Option<String>,
    pub repair_cost: Option<f64>,
}

impl ItemResolutionForm {
    pub fn to_payload(&self) -> Result<ItemResolutionPayload, FieldError> {
        let resolution = required_text(&self.resolution, "resolution", "Resolution")?;
        if !RESOLUTIONS.iter().any(|(key, _)| *key == resolution) {
            return Err(FieldError::invalid("resolution", "Resolution", "unknown outcome"));
        }
        let repair_cost = optional_decimal(&self.repair_cost, "repair_cost", "Repair cost")?;
        Ok(ItemResolutionPayload {
            resolution,
            resolution_notes: non_empty(&self.resolution_notes),
            replacement_serial_number: non_empty(&self.replacement_serial_number),
            repair_cost,
        })
    }
}

// ============================================================================
// Form
// ============================================================================

/// One item line of a new return
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnLineForm {
    pub product_name: String,
    pub product_model: String,
    pub serial_number: String,
    pub quantity: String,
    pub return_reason: String,
    pub reason_details: String,
}

impl Default for ReturnLineForm {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_model: String::new(),
            serial_number: String::new(),
            quantity: "1".to_string(),
            return_reason: RETURN_REASONS[0].0.to_string(),
            reason_details: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLinePayload {
    pub product_name: String,
    pub product_model: Option<String>,
    pub serial_number: Option<String>,
    pub quantity: u32,
    pub return_reason: String,
    pub reason_details: Option<String>,
}

impl ReturnLineForm {
    fn to_payload(&self, line: usize) -> Result<ReturnLinePayload, FieldError> {
        let product_name = non_empty(&self.product_name).ok_or_else(|| {
            FieldError::invalid("items", "Items", format!("line {} needs a product name", line))
        })?;
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| {
                FieldError::invalid("items", "Items", format!("line {} needs a positive quantity", line))
            })?;

        Ok(ReturnLinePayload {
            product_name,
            product_model: non_empty(&self.product_model),
            serial_number: non_empty(&self.serial_number),
            quantity,
            return_reason: required_text(&self.return_reason, "items", "Return reason")?,
            reason_details: non_empty(&self.reason_details),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnForm {
    pub id: Option<String>,
    pub return_number: String,
    /// Read-only: drives the lock, never submitted
    pub status: ReturnStatus,
    pub return_type: String,
    /// Fixed once the return exists
    pub supplier_id: Option<String>,
    pub notes: String,
    pub internal_notes: String,
    /// Only submitted on create
    pub lines: Vec<ReturnLineForm>,
}

impl Default for ReturnForm {
    fn default() -> Self {
        Self {
            id: None,
            return_number: String::new(),
            status: ReturnStatus::Pending,
            return_type: RETURN_TYPES[0].0.to_string(),
            supplier_id: None,
            notes: String::new(),
            internal_notes: String::new(),
            lines: vec![ReturnLineForm::default()],
        }
    }
}

/// `POST /api/returns`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReturnPayload {
    pub supplier_id: String,
    pub return_type: String,
    pub notes: Option<String>,
    pub items: Vec<ReturnLinePayload>,
}

/// `PUT /api/returns/{id}`; the backend applies only these fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnUpdatePayload {
    pub return_type: String,
    pub notes: Option<String>,
    pub internal_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReturnPayload {
    Create(NewReturnPayload),
    Update(ReturnUpdatePayload),
}

impl FormBinding for ReturnForm {
    type Entity = ReturnRequest;
    type Payload = ReturnPayload;

    fn from_entity(entity: &ReturnRequest) -> Self {
        Self {
            id: Some(entity.id.clone()),
            return_number: entity.return_number.clone(),
            status: entity.status,
            return_type: text_or_empty(entity.return_type.as_deref()),
            supplier_id: optional_select(entity.supplier_id.as_deref()),
            notes: text_or_empty(entity.notes.as_deref()),
            internal_notes: text_or_empty(entity.internal_notes.as_deref()),
            lines: Vec::new(),
        }
    }

    fn to_payload(&self) -> Result<ReturnPayload, FieldError> {
        let return_type = required_text(&self.return_type, "return_type", "Return type")?;

        if self.id.is_some() {
            return Ok(ReturnPayload::Update(ReturnUpdatePayload {
                return_type,
                notes: non_empty(&self.notes),
                internal_notes: non_empty(&self.internal_notes),
            }));
        }

        let supplier_id = optional_select(self.supplier_id.as_deref())
            .ok_or(FieldError::required("supplier_id", "Supplier"))?;
        if self.lines.is_empty() {
            return Err(FieldError::invalid("items", "Items", "add at least one item"));
        }
        let items = self
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| line.to_payload(index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReturnPayload::Create(NewReturnPayload {
            supplier_id,
            return_type,
            notes: non_empty(&self.notes),
            items,
        }))
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn is_locked(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(json: serde_json::Value) -> ReturnRequest {
        serde_json::from_value(json).unwrap()
    }

    fn new_return() -> ReturnForm {
        ReturnForm {
            supplier_id: Some("s1".into()),
            lines: vec![ReturnLineForm {
                product_name: "Laptop X1".into(),
                serial_number: " SN-77 ".into(),
                quantity: "2".into(),
                ..ReturnLineForm::default()
            }],
            ..ReturnForm::default()
        }
    }

    #[test]
    fn test_sent_return_is_locked() {
        let form = ReturnForm::from_entity(&request(json!({
            "id": "r1", "returnNumber": "RET-0001", "status": "sent", "supplierId": "s1"
        })));
        assert!(form.is_locked());

        let pending = ReturnForm::from_entity(&request(json!({ "id": "r2", "status": "pending" })));
        assert!(!pending.is_locked());
        assert!(!ReturnForm::default().is_locked());
    }

    #[test]
    fn test_every_status_but_pending_is_terminal() {
        let terminal: Vec<&str> = RETURN_STATUSES
            .iter()
            .filter(|s| s.is_terminal())
            .map(ReturnStatus::as_str)
            .collect();
        assert_eq!(terminal, vec!["sent", "received", "resolved", "cancelled"]);
    }

    #[test]
    fn test_detail_envelope_keeps_items_and_history() {
        let envelope: ReturnDetailEnvelope = serde_json::from_value(json!({
            "return": { "id": "r1", "returnNumber": "RET-0001", "status": "received", "colorCode": "orange",
                        "shippingCost": "15.00" },
            "items": [{ "id": "i1", "productName": "Router", "itemStatus": "received", "repairCost": null }],
            "history": [{ "id": "h1", "eventType": "sent", "fromStatus": "pending", "toStatus": "sent" }]
        }))
        .unwrap();

        let request = envelope.into_request();
        assert_eq!(request.status, ReturnStatus::Received);
        assert_eq!(request.alert_level(), Some(AlertLevel::Orange));
        assert_eq!(request.shipping_cost, Some(15.0));
        assert_eq!(request.items.len(), 1);
        assert!(!request.items[0].is_resolved());
        assert_eq!(request.history[0].event_type, "sent");
    }

    #[test]
    fn test_actions_follow_status() {
        let at = |status: &str| request(json!({ "id": "r1", "status": status }));
        let offered = |status: &str| {
            [ReturnAction::Send, ReturnAction::Receive, ReturnAction::Remind, ReturnAction::ResolveItem]
                .into_iter()
                .filter(|action| at(status).allows(*action))
                .collect::<Vec<_>>()
        };

        assert_eq!(offered("pending"), vec![ReturnAction::Send]);
        assert_eq!(offered("sent"), vec![ReturnAction::Receive, ReturnAction::Remind]);
        assert_eq!(offered("received"), vec![ReturnAction::ResolveItem]);
        assert!(offered("resolved").is_empty());
        assert!(offered("cancelled").is_empty());
    }

    #[test]
    fn test_create_payload_carries_items() {
        let payload = serde_json::to_value(new_return().to_payload().unwrap()).unwrap();
        assert_eq!(
            payload,
            json!({
                "supplierId": "s1", "returnType": "defective", "notes": null,
                "items": [{
                    "productName": "Laptop X1", "productModel": null, "serialNumber": "SN-77",
                    "quantity": 2, "returnReason": "defective", "reasonDetails": null
                }]
            })
        );
    }

    #[test]
    fn test_create_needs_supplier_and_items() {
        let no_supplier = ReturnForm {
            supplier_id: None,
            ..new_return()
        };
        assert_eq!(no_supplier.to_payload().unwrap_err().field(), "supplier_id");

        let no_items = ReturnForm {
            lines: Vec::new(),
            ..new_return()
        };
        assert_eq!(no_items.to_payload().unwrap_err().field(), "items");

        let mut zero_quantity = new_return();
        zero_quantity.lines[0].quantity = "0".into();
        let err = zero_quantity.to_payload().unwrap_err();
        assert_eq!(err.to_string(), "Items: line 1 needs a positive quantity");

        let mut unnamed = new_return();
        unnamed.lines.push(ReturnLineForm::default());
        assert_eq!(
            unnamed.to_payload().unwrap_err().to_string(),
            "Items: line 2 needs a product name"
        );
    }

    #[test]
    fn test_update_payload_is_limited_to_editable_fields() {
        let entity = request(json!({
            "id": "r3", "returnNumber": "RET-0003", "status": "pending",
            "returnType": "warranty", "supplierId": "s2", "notes": " screen cracked ",
            "trackingNumber": "TRK-1"
        }));
        let payload = serde_json::to_value(ReturnForm::from_entity(&entity).to_payload().unwrap()).unwrap();

        assert_eq!(
            payload,
            json!({ "returnType": "warranty", "notes": "screen cracked", "internalNotes": null })
        );
    }

    #[test]
    fn test_binding_is_idempotent() {
        let entity = request(json!({
            "id": "r3", "returnNumber": "RET-0003", "status": "pending",
            "returnType": "warranty", "supplierId": "s2", "notes": " screen cracked "
        }));
        let first = ReturnForm::from_entity(&entity).to_payload().unwrap();

        let mut echoed = serde_json::to_value(&first).unwrap();
        echoed["id"] = json!("r3");
        echoed["status"] = json!("pending");
        let second = ReturnForm::from_entity(&request(echoed)).to_payload().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_shipment_cost_must_be_a_number() {
        let form = ShipmentForm {
            shipping_method: "DHL".into(),
            tracking_number: String::new(),
            shipping_cost: "ten".into(),
        };
        assert_eq!(form.to_payload().unwrap_err().field(), "shipping_cost");

        let negative = ShipmentForm {
            shipping_cost: "-5".into(),
            ..form.clone()
        };
        assert!(negative.to_payload().is_err());

        let valid = ShipmentForm {
            shipping_cost: "12.5".into(),
            ..form
        };
        assert_eq!(
            serde_json::to_value(valid.to_payload().unwrap()).unwrap(),
            json!({ "shippingMethod": "DHL", "trackingNumber": null, "shippingCost": 12.5 })
        );
    }

    #[test]
    fn test_resolution_must_be_known() {
        let form = ItemResolutionForm {
            resolution: "lost".into(),
            ..ItemResolutionForm::default()
        };
        assert_eq!(form.to_payload().unwrap_err().field(), "resolution");

        let replaced = ItemResolutionForm {
            resolution: "replaced".into(),
            replacement_serial_number: "SN-NEW".into(),
            ..ItemResolutionForm::default()
        };
        let payload = replaced.to_payload().unwrap();
        assert_eq!(payload.replacement_serial_number.as_deref(), Some("SN-NEW"));
        assert_eq!(payload.repair_cost, None);
    }

    #[test]
    fn test_reminder_goes_through_system_channel() {
        assert_eq!(
            serde_json::to_value(ReminderPayload::system("  ")).unwrap(),
            json!({ "message": null, "channel": "system" })
        );
    }
}
