use contracts::system::settings::{CompanySettings, CompanySettingsEnvelope, CompanySettingsForm};

use crate::shared::resource::Resource;

impl Resource for CompanySettings {
    type Form = CompanySettingsForm;
    const COLLECTION: &'static str = "/api/settings";
    const NOUN: &'static str = "Company settings";
    const DELETABLE: bool = false;

    /// `{ "company": null }` before the first save decodes to empty settings
    fn decode(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value::<CompanySettingsEnvelope>(value).map(CompanySettingsEnvelope::into_settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::COMPANY_SETTINGS_ID;
    use serde_json::json;

    #[test]
    fn test_singleton_path() {
        assert_eq!(CompanySettings::item_path(COMPANY_SETTINGS_ID), "/api/settings/company");
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let settings = CompanySettings::decode(json!({"company": {"name": "BI Company"}})).unwrap();
        assert_eq!(settings.name.as_deref(), Some("BI Company"));

        let empty = CompanySettings::decode(json!({"company": null})).unwrap();
        assert_eq!(empty, CompanySettings::default());
    }
}
