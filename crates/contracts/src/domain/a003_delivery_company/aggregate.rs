use serde::{Deserialize, Serialize};

use crate::domain::common::{localized_label, Identified};
use crate::shared::form::{
    bool_to_flag, decimal_to_text, deserialize_flag, flag_to_bool, non_empty, optional_decimal,
    required_text, text_or_empty, FieldError, FormBinding,
};

/// Kinds of delivery partners
pub const COMPANY_KINDS: [CompanyKind; 4] = [
    CompanyKind::Company,
    CompanyKind::Platform,
    CompanyKind::Taxi,
    CompanyKind::Pickup,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyKind {
    Company,
    Platform,
    Taxi,
    Pickup,
}

impl CompanyKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "company" => Some(CompanyKind::Company),
            "platform" => Some(CompanyKind::Platform),
            "taxi" => Some(CompanyKind::Taxi),
            "pickup" => Some(CompanyKind::Pickup),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyKind::Company => "company",
            CompanyKind::Platform => "platform",
            CompanyKind::Taxi => "taxi",
            CompanyKind::Pickup => "pickup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyKind::Company => "Delivery company",
            CompanyKind::Platform => "Instalment platform",
            CompanyKind::Taxi => "Taxi",
            CompanyKind::Pickup => "Self pickup",
        }
    }
}

/// Delivery company / courier partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCompany {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub fee_type: Option<String>,
    #[serde(default)]
    pub fee_amount: Option<f64>,
    #[serde(default)]
    pub pending_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: Option<i64>,
}

impl Identified for DeliveryCompany {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        localized_label(&self.name, self.name_ar.as_deref())
    }
}

impl DeliveryCompany {
    pub fn kind(&self) -> Option<CompanyKind> {
        self.kind.as_deref().and_then(CompanyKind::parse)
    }

    pub fn is_active(&self) -> bool {
        flag_to_bool(self.is_active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryCompanyForm {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub name_ar: String,
    pub kind: String,
    pub phone: String,
    pub contact_person: String,
    pub fee_type: String,
    pub fee_amount: String,
    pub is_active: bool,
}

impl Default for DeliveryCompanyForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            name_ar: String::new(),
            kind: CompanyKind::Company.as_str().to_string(),
            phone: String::new(),
            contact_person: String::new(),
            fee_type: "fixed".to_string(),
            fee_amount: String::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryCompanyPayload {
    pub code: Option<String>,
    pub name: String,
    pub name_ar: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub phone: Option<String>,
    pub contact_person: Option<String>,
    pub fee_type: Option<String>,
    pub fee_amount: Option<f64>,
    pub is_active: i32,
}

impl FormBinding for DeliveryCompanyForm {
    type Entity = DeliveryCompany;
    type Payload = DeliveryCompanyPayload;

    fn from_entity(entity: &DeliveryCompany) -> Self {
        Self {
            id: Some(entity.id.clone()),
            code: text_or_empty(entity.code.as_deref()),
            name: entity.name.clone(),
            name_ar: text_or_empty(entity.name_ar.as_deref()),
            kind: text_or_empty(entity.kind.as_deref()),
            phone: text_or_empty(entity.phone.as_deref()),
            contact_person: text_or_empty(entity.contact_person.as_deref()),
            fee_type: text_or_empty(entity.fee_type.as_deref()),
            fee_amount: decimal_to_text(entity.fee_amount),
            is_active: flag_to_bool(entity.is_active),
        }
    }

    fn to_payload(&self) -> Result<DeliveryCompanyPayload, FieldError> {
        let kind = required_text(&self.kind, "kind", "Type")?;
        if CompanyKind::parse(&kind).is_none() {
            return Err(FieldError::invalid("kind", "Type", format!("unknown type '{}'", kind)));
        }

        Ok(DeliveryCompanyPayload {
            code: non_empty(&self.code),
            name: required_text(&self.name, "name", "Name")?,
            name_ar: non_empty(&self.name_ar),
            kind,
            phone: non_empty(&self.phone),
            contact_person: non_empty(&self.contact_person),
            fee_type: non_empty(&self.fee_type),
            fee_amount: optional_decimal(&self.fee_amount, "fee_amount", "Fee amount")?,
            is_active: bool_to_flag(self.is_active),
        })
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn company(json: serde_json::Value) -> DeliveryCompany {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_type_field_renamed_on_wire() {
        let entity = company(json!({ "id": "d1", "name": "Speedy", "type": "taxi", "feeAmount": 3000 }));
        assert_eq!(entity.kind(), Some(CompanyKind::Taxi));

        let payload = serde_json::to_value(DeliveryCompanyForm::from_entity(&entity).to_payload().unwrap()).unwrap();
        assert_eq!(payload["type"], json!("taxi"));
        assert_eq!(payload["feeAmount"], json!(3000.0));
    }

    #[test]
    fn test_fee_amount_must_be_numeric() {
        let form = DeliveryCompanyForm {
            name: "Speedy".to_string(),
            fee_amount: "3k".to_string(),
            ..DeliveryCompanyForm::default()
        };
        assert_eq!(form.to_payload().unwrap_err().field(), "fee_amount");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let form = DeliveryCompanyForm {
            name: "Speedy".to_string(),
            kind: "drone".to_string(),
            ..DeliveryCompanyForm::default()
        };
        assert_eq!(form.to_payload().unwrap_err().field(), "kind");
    }

    #[test]
    fn test_binding_is_idempotent() {
        let entity = company(json!({
            "id": "d2", "code": "DC2", "name": "Platform X", "type": "platform",
            "feeType": "percent", "feeAmount": 2.5, "isActive": 1, "contactPerson": ""
        }));
        let first = DeliveryCompanyForm::from_entity(&entity).to_payload().unwrap();

        let mut echoed = serde_json::to_value(&first).unwrap();
        echoed["id"] = json!("d2");
        let second = DeliveryCompanyForm::from_entity(&company(echoed)).to_payload().unwrap();
        assert_eq!(first, second);
    }
}
