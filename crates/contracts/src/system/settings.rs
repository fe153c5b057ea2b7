use serde::{Deserialize, Serialize};

use crate::domain::common::{localized_label, Identified};
use crate::shared::form::{non_empty, required_text, text_or_empty, FieldError, FormBinding};

/// Identifier of the single company-information record
pub const COMPANY_SETTINGS_ID: &str = "company";

/// Company information printed on invoices and receipts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone2: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_ar: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub commercial_register: Option<String>,
}

impl Identified for CompanySettings {
    fn id(&self) -> &str {
        COMPANY_SETTINGS_ID
    }

    fn display_name(&self) -> String {
        localized_label(self.name.as_deref().unwrap_or("Company"), self.name_ar.as_deref())
    }
}

/// `GET /api/settings/company` returns `{ "company": null }` before the first save.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanySettingsEnvelope {
    #[serde(default)]
    pub company: Option<CompanySettings>,
}

impl CompanySettingsEnvelope {
    pub fn into_settings(self) -> CompanySettings {
        self.company.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompanySettingsForm {
    /// Always the singleton id, so saves are updates
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub tagline: String,
    pub phone: String,
    pub phone2: String,
    pub email: String,
    pub website: String,
    pub city: String,
    pub address: String,
    pub address_ar: String,
    pub tax_number: String,
    pub commercial_register: String,
}

impl Default for CompanySettingsForm {
    fn default() -> Self {
        Self::from_entity(&CompanySettings::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettingsPayload {
    pub name: String,
    pub name_ar: Option<String>,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub address_ar: Option<String>,
    pub tax_number: Option<String>,
    pub commercial_register: Option<String>,
}

impl FormBinding for CompanySettingsForm {
    type Entity = CompanySettings;
    type Payload = CompanySettingsPayload;

    fn from_entity(entity: &CompanySettings) -> Self {
        Self {
            id: COMPANY_SETTINGS_ID.to_string(),
            name: text_or_empty(entity.name.as_deref()),
            name_ar: text_or_empty(entity.name_ar.as_deref()),
            tagline: text_or_empty(entity.tagline.as_deref()),
            phone: text_or_empty(entity.phone.as_deref()),
            phone2: text_or_empty(entity.phone2.as_deref()),
            email: text_or_empty(entity.email.as_deref()),
            website: text_or_empty(entity.website.as_deref()),
            city: text_or_empty(entity.city.as_deref()),
            address: text_or_empty(entity.address.as_deref()),
            address_ar: text_or_empty(entity.address_ar.as_deref()),
            tax_number: text_or_empty(entity.tax_number.as_deref()),
            commercial_register: text_or_empty(entity.commercial_register.as_deref()),
        }
    }

    fn to_payload(&self) -> Result<CompanySettingsPayload, FieldError> {
        Ok(CompanySettingsPayload {
            name: required_text(&self.name, "name", "Company name")?,
            name_ar: non_empty(&self.name_ar),
            tagline: non_empty(&self.tagline),
            phone: non_empty(&self.phone),
            phone2: non_empty(&self.phone2),
            email: non_empty(&self.email),
            website: non_empty(&self.website),
            city: non_empty(&self.city),
            address: non_empty(&self.address),
            address_ar: non_empty(&self.address_ar),
            tax_number: non_empty(&self.tax_number),
            commercial_register: non_empty(&self.commercial_register),
        })
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_company_becomes_empty_form() {
        let envelope: CompanySettingsEnvelope = serde_json::from_str(r#"{"company": null}"#).unwrap();
        let form = CompanySettingsForm::from_entity(&envelope.into_settings());
        assert_eq!(form.name, "");
        assert_eq!(form.id(), Some(COMPANY_SETTINGS_ID));
        assert_eq!(form.to_payload().unwrap_err().field(), "name");
    }

    #[test]
    fn test_binding_is_idempotent() {
        let envelope: CompanySettingsEnvelope = serde_json::from_str(
            r#"{"company": {"name": "BI Company", "nameAr": "شركة بي آي", "taxNumber": " ", "city": "Baghdad"}}"#,
        )
        .unwrap();
        let first = CompanySettingsForm::from_entity(&envelope.into_settings())
            .to_payload()
            .unwrap();
        assert_eq!(first.tax_number, None);

        let echoed: CompanySettings = serde_json::from_value(serde_json::to_value(&first).unwrap()).unwrap();
        let second = CompanySettingsForm::from_entity(&echoed).to_payload().unwrap();
        assert_eq!(first, second);
    }
}
