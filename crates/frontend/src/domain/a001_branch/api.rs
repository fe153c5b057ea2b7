use contracts::domain::a001_branch::aggregate::{Branch, BranchForm};

use crate::shared::list_utils::Searchable;
use crate::shared::resource::Resource;

impl Resource for Branch {
    type Form = BranchForm;
    const COLLECTION: &'static str = "/api/branches";
    const NOUN: &'static str = "Branch";
}

impl Searchable for Branch {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str(), self.name.as_str()];
        fields.extend(self.name_ar.as_deref());
        fields.extend(self.city.as_deref());
        fields.extend(self.phone.as_deref());
        fields
    }
}
