use contracts::domain::a003_delivery_company::aggregate::{
    CompanyKind, DeliveryCompany, DeliveryCompanyForm,
};

use crate::shared::components::table::format_amount;
use crate::shared::components::StatusTone;
use crate::shared::list_utils::Searchable;
use crate::shared::resource::transport::HttpMethod;
use crate::shared::resource::Resource;

impl Resource for DeliveryCompany {
    type Form = DeliveryCompanyForm;
    const COLLECTION: &'static str = "/api/delivery/companies";
    const NOUN: &'static str = "Delivery company";
    const UPDATE_METHOD: HttpMethod = HttpMethod::Patch;
    const DELETABLE: bool = false;
}

impl Searchable for DeliveryCompany {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.code.as_deref());
        fields.extend(self.name_ar.as_deref());
        fields.extend(self.phone.as_deref());
        fields.extend(self.contact_person.as_deref());
        fields
    }
}

/// Fee types offered in the form
pub const FEE_TYPES: [(&str, &str); 2] = [("fixed", "Fixed amount"), ("percentage", "Percentage")];

pub fn kind_tone(kind: Option<CompanyKind>) -> StatusTone {
    match kind {
        Some(CompanyKind::Company) => StatusTone::Info,
        Some(CompanyKind::Platform) => StatusTone::Brand,
        Some(CompanyKind::Taxi) => StatusTone::Warning,
        Some(CompanyKind::Pickup) => StatusTone::Success,
        None => StatusTone::Neutral,
    }
}

/// Unknown kinds are shown as sent by the backend
pub fn kind_label(company: &DeliveryCompany) -> String {
    match company.kind() {
        Some(kind) => kind.label().to_string(),
        None => company.kind.clone().unwrap_or_else(|| "-".to_string()),
    }
}

/// `fixed` fees are an amount in dinars, anything else a percentage
pub fn fee_label(company: &DeliveryCompany) -> String {
    let Some(amount) = company.fee_amount else {
        return "-".to_string();
    };
    match company.fee_type.as_deref() {
        Some("fixed") | None => format!("{} IQD", format_amount(amount)),
        Some(_) => format!("{}%", amount),
    }
}
