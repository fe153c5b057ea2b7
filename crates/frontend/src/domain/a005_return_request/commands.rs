use contracts::domain::a005_return_request::aggregate::{
    ItemResolutionForm, ItemResolutionPayload, ReceiptPayload, ReminderPayload, ReturnAction, ReturnRequest,
    ShipmentForm, ShipmentPayload,
};
use contracts::shared::form::{non_empty, FieldError};
use serde::Serialize;

use crate::shared::resource::{Command, Resource, ResourceError};

/// Workflow steps of a supplier return
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnCommand {
    Send(ShipmentForm),
    Receive { notes: String },
    Remind { message: String },
    ResolveItem { item_id: String, form: ItemResolutionForm },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReturnCommandBody {
    Shipment(ShipmentPayload),
    Receipt(ReceiptPayload),
    Reminder(ReminderPayload),
    Resolution(ItemResolutionPayload),
}

impl ReturnCommand {
    pub fn action(&self) -> ReturnAction {
        match self {
            ReturnCommand::Send(_) => ReturnAction::Send,
            ReturnCommand::Receive { .. } => ReturnAction::Receive,
            ReturnCommand::Remind { .. } => ReturnAction::Remind,
            ReturnCommand::ResolveItem { .. } => ReturnAction::ResolveItem,
        }
    }
}

impl Command<ReturnRequest> for ReturnCommand {
    type Body = ReturnCommandBody;

    fn name(&self) -> &'static str {
        self.action().label()
    }

    fn check(&self, entity: &ReturnRequest) -> Result<(), ResourceError> {
        let action = self.action();
        if !entity.allows(action) {
            return Err(ResourceError::NotAllowed(format!(
                "{} is not possible while the return is {}",
                action.label(),
                entity.status.label().to_lowercase()
            )));
        }

        if let ReturnCommand::ResolveItem { item_id, .. } = self {
            let item = entity
                .item(item_id)
                .ok_or_else(|| ResourceError::NotFound("Return item not found".to_string()))?;
            if item.is_resolved() {
                return Err(ResourceError::NotAllowed(
                    "This item has already been resolved".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn path(&self, entity: &ReturnRequest) -> String {
        let base = ReturnRequest::item_path(&entity.id);
        match self {
            ReturnCommand::Send(_) => format!("{}/send", base),
            ReturnCommand::Receive { .. } => format!("{}/receive", base),
            ReturnCommand::Remind { .. } => format!("{}/reminder", base),
            ReturnCommand::ResolveItem { item_id, .. } => format!(
                "{}/items/{}/resolve",
                ReturnRequest::COLLECTION,
                urlencoding::encode(item_id)
            ),
        }
    }

    fn body(&self) -> Result<ReturnCommandBody, FieldError> {
        Ok(match self {
            ReturnCommand::Send(form) => ReturnCommandBody::Shipment(form.to_payload()?),
            ReturnCommand::Receive { notes } => ReturnCommandBody::Receipt(ReceiptPayload {
                notes: non_empty(notes),
            }),
            ReturnCommand::Remind { message } => ReturnCommandBody::Reminder(ReminderPayload::system(message)),
            ReturnCommand::ResolveItem { form, .. } => ReturnCommandBody::Resolution(form.to_payload()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::state::{Phase, ResourceState};
    use crate::shared::resource::test_support::{client, CountingSession, MemoryStore, ScriptedTransport};
    use crate::shared::resource::transport::{ApiResponse, HttpMethod};
    use crate::shared::resource::ResourceController;
    use contracts::domain::a005_return_request::aggregate::ReturnStatus;
    use futures::executor::block_on;
    use std::rc::Rc;

    type ReturnStore = MemoryStore<ResourceState<ReturnRequest>>;

    fn detail(status: &str, item_status: &str, resolution: Option<&str>) -> ApiResponse {
        let body = serde_json::json!({
            "return": {"id": "r1", "returnNumber": "RET-0001", "status": status, "supplierId": "s1"},
            "items": [{"id": "i1", "productName": "Router", "itemStatus": item_status, "resolution": resolution}],
            "history": []
        });
        ApiResponse::new(200, body.to_string())
    }

    fn loaded(
        responses: Vec<ApiResponse>,
    ) -> (ResourceController<ReturnRequest, ReturnStore>, ReturnStore, Rc<ScriptedTransport>) {
        let transport = ScriptedTransport::new(responses);
        let store = MemoryStore::new();
        let controller = ResourceController::new(client(transport.clone(), CountingSession::new()), store.clone());
        block_on(controller.load("r1")).unwrap();
        (controller, store, transport)
    }

    fn shipment(cost: &str) -> ReturnCommand {
        ReturnCommand::Send(ShipmentForm {
            shipping_method: "Courier".into(),
            tracking_number: "TRK-9".into(),
            shipping_cost: cost.into(),
        })
    }

    #[test]
    fn test_send_posts_shipment_and_reloads() {
        let (controller, store, transport) = loaded(vec![
            detail("pending", "pending", None),
            ApiResponse::new(200, r#"{"success": true}"#),
            detail("sent", "sent", None),
        ]);

        let reloaded = block_on(controller.perform(&shipment("20"))).unwrap();

        let requests = transport.requests();
        assert_eq!(requests[1].method, HttpMethod::Post);
        assert_eq!(requests[1].path, "/api/returns/r1/send");
        let body: serde_json::Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"shippingMethod": "Courier", "trackingNumber": "TRK-9", "shippingCost": 20.0})
        );
        assert_eq!(requests[2].method, HttpMethod::Get);
        assert_eq!(reloaded.status, ReturnStatus::Sent);
        assert_eq!(store.snapshot().phase, Phase::Ready);
    }

    #[test]
    fn test_receive_before_sending_is_rejected_locally() {
        let (controller, store, transport) = loaded(vec![detail("pending", "pending", None)]);

        let err = block_on(controller.perform(&ReturnCommand::Receive { notes: String::new() })).unwrap_err();

        assert!(matches!(err, ResourceError::NotAllowed(_)));
        assert_eq!(
            err.to_string(),
            "Confirm receipt is not possible while the return is pending"
        );
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(store.snapshot().phase, Phase::Ready);
    }

    #[test]
    fn test_invalid_shipping_cost_sends_nothing() {
        let (controller, store, transport) = loaded(vec![detail("pending", "pending", None)]);

        let err = block_on(controller.perform(&shipment("a lot"))).unwrap_err();

        assert!(matches!(err, ResourceError::Validation(_)));
        assert_eq!(transport.requests().len(), 1);
        assert_eq!(
            store.snapshot().visible_error().as_deref(),
            Some("Shipping cost: must be a number")
        );
    }

    #[test]
    fn test_resolve_targets_item_endpoint() {
        let (controller, _, transport) = loaded(vec![
            detail("received", "received", None),
            ApiResponse::new(200, r#"{"success": true}"#),
            detail("resolved", "resolved", Some("repaired")),
        ]);
        let command = ReturnCommand::ResolveItem {
            item_id: "i1".into(),
            form: ItemResolutionForm {
                resolution: "repaired".into(),
                repair_cost: "35".into(),
                ..ItemResolutionForm::default()
            },
        };

        let reloaded = block_on(controller.perform(&command)).unwrap();

        assert_eq!(transport.requests()[1].path, "/api/returns/items/i1/resolve");
        assert_eq!(reloaded.status, ReturnStatus::Resolved);
    }

    #[test]
    fn test_resolved_item_cannot_be_resolved_again() {
        let (controller, _, transport) = loaded(vec![detail("received", "resolved", Some("refunded"))]);
        let command = ReturnCommand::ResolveItem {
            item_id: "i1".into(),
            form: ItemResolutionForm::default(),
        };

        let err = block_on(controller.perform(&command)).unwrap_err();

        assert_eq!(err, ResourceError::NotAllowed("This item has already been resolved".into()));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_backend_refusal_surfaces_message() {
        let (controller, store, _) = loaded(vec![
            detail("sent", "sent", None),
            ApiResponse::new(400, r#"{"error": "Return cannot be confirmed"}"#),
        ]);

        block_on(controller.perform(&ReturnCommand::Remind { message: "Any news?".into() })).unwrap_err();

        let state = store.snapshot();
        assert_eq!(state.phase, Phase::SubmitFailed);
        assert_eq!(state.visible_error().as_deref(), Some("Return cannot be confirmed"));
    }
}
