use serde::{Deserialize, Serialize};

use crate::domain::common::{localized_label, Identified};
use crate::shared::form::{
    bool_to_flag, deserialize_flag, flag_to_bool, non_empty, required_text, text_or_empty,
    FieldError, FormBinding,
};

/// Supplier (vendor in the supply chain)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: Option<i64>,
}

impl Identified for Supplier {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        localized_label(&self.name, self.name_ar.as_deref())
    }
}

impl Supplier {
    pub fn is_active(&self) -> bool {
        flag_to_bool(self.is_active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierForm {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub name_ar: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub is_active: bool,
}

impl Default for SupplierForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            name_ar: String::new(),
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    pub code: Option<String>,
    pub name: String,
    pub name_ar: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub is_active: i32,
}

impl FormBinding for SupplierForm {
    type Entity = Supplier;
    type Payload = SupplierPayload;

    fn from_entity(entity: &Supplier) -> Self {
        Self {
            id: Some(entity.id.clone()),
            code: text_or_empty(entity.code.as_deref()),
            name: entity.name.clone(),
            name_ar: text_or_empty(entity.name_ar.as_deref()),
            contact_person: text_or_empty(entity.contact_person.as_deref()),
            phone: text_or_empty(entity.phone.as_deref()),
            email: text_or_empty(entity.email.as_deref()),
            address: text_or_empty(entity.address.as_deref()),
            is_active: flag_to_bool(entity.is_active),
        }
    }

    fn to_payload(&self) -> Result<SupplierPayload, FieldError> {
        let email = non_empty(&self.email);
        if let Some(address) = &email {
            if !address.contains('@') {
                return Err(FieldError::invalid("email", "Email", "invalid address"));
            }
        }

        Ok(SupplierPayload {
            code: non_empty(&self.code),
            name: required_text(&self.name, "name", "Name")?,
            name_ar: non_empty(&self.name_ar),
            contact_person: non_empty(&self.contact_person),
            phone: non_empty(&self.phone),
            email,
            address: non_empty(&self.address),
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

    #[test]
    fn test_invalid_email_rejected() {
        let form = SupplierForm {
            name: "Al-Noor Trading".to_string(),
            email: "sales.alnoor".to_string(),
            ..SupplierForm::default()
        };
        assert_eq!(form.to_payload().unwrap_err().field(), "email");
    }

    #[test]
    fn test_binding_is_idempotent() {
        let entity: Supplier = serde_json::from_value(json!({
            "id": "s1", "name": "Al-Noor Trading", "email": "sales@alnoor.iq",
            "phone": null, "isActive": true
        }))
        .unwrap();
        let first = SupplierForm::from_entity(&entity).to_payload().unwrap();
        assert_eq!(first.is_active, 1);

        let mut echoed = serde_json::to_value(&first).unwrap();
        echoed["id"] = json!("s1");
        let second = SupplierForm::from_entity(&serde_json::from_value(echoed).unwrap())
            .to_payload()
            .unwrap();
        assert_eq!(first, second);
    }
}
