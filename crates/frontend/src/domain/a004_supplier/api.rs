use contracts::domain::a004_supplier::aggregate::{Supplier, SupplierForm};
use contracts::domain::common::Identified;

use crate::shared::list_utils::Searchable;
use crate::shared::resource::Resource;

impl Resource for Supplier {
    type Form = SupplierForm;
    const COLLECTION: &'static str = "/api/suppliers";
    const NOUN: &'static str = "Supplier";
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.code.as_deref());
        fields.extend(self.name_ar.as_deref());
        fields.extend(self.contact_person.as_deref());
        fields.extend(self.phone.as_deref());
        fields.extend(self.email.as_deref());
        fields
    }
}

/// Options for supplier pickers, inactive suppliers are left out
/// unless currently selected.
pub fn supplier_select_options(suppliers: &[Supplier], selected: Option<&str>) -> Vec<(String, String)> {
    suppliers
        .iter()
        .filter(|s| s.is_active() || Some(s.id.as_str()) == selected)
        .map(|s| (s.id.clone(), s.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;
    use serde_json::json;

    fn suppliers() -> Vec<Supplier> {
        serde_json::from_value(json!([
            {"id": "s1", "name": "Baghdad Parts", "email": "sales@bparts.iq", "isActive": 1},
            {"id": "s2", "name": "Old Vendor", "isActive": 0},
            {"id": "s3", "name": "Erbil Supply", "nameAr": "أربيل", "isActive": true}
        ]))
        .unwrap()
    }

    #[test]
    fn test_search_matches_email() {
        let found = filter_list(&suppliers(), "BPARTS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "s1");
    }

    #[test]
    fn test_select_options_skip_inactive() {
        let options = supplier_select_options(&suppliers(), None);
        let ids: Vec<&str> = options.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3"]);

        let options = supplier_select_options(&suppliers(), Some("s2"));
        assert_eq!(options.len(), 3);
    }
}
