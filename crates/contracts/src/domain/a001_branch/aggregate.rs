use serde::{Deserialize, Serialize};

use crate::domain::common::{localized_label, Identified};
use crate::shared::form::{
    bool_to_flag, deserialize_flag, flag_to_bool, non_empty, required_text, text_or_empty,
    FieldError, FormBinding,
};

// ============================================================================
// Entity
// ============================================================================

/// Branch (physical location of the organization)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_main: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: Option<i64>,
}

impl Identified for Branch {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        localized_label(&self.name, self.name_ar.as_deref())
    }
}

impl Branch {
    pub fn is_main(&self) -> bool {
        flag_to_bool(self.is_main)
    }

    pub fn is_active(&self) -> bool {
        flag_to_bool(self.is_active)
    }
}

/// Header figures of the branches page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BranchStats {
    pub total: usize,
    pub active: usize,
    pub main_branch: Option<String>,
}

impl BranchStats {
    pub fn collect(branches: &[Branch]) -> Self {
        Self {
            total: branches.len(),
            active: branches.iter().filter(|b| b.is_active()).count(),
            main_branch: branches.iter().find(|b| b.is_main()).map(Branch::display_name),
        }
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct BranchForm {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub name_ar: String,
    pub address: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub is_main: bool,
    pub is_active: bool,
}

impl Default for BranchForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            name_ar: String::new(),
            address: String::new(),
            city: String::new(),
            phone: String::new(),
            email: String::new(),
            is_main: false,
            // new branches open active
            is_active: true,
        }
    }
}

/// Body of `POST /api/branches` and `PUT /api/branches/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPayload {
    pub code: String,
    pub name: String,
    pub name_ar: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_main: i32,
    pub is_active: i32,
}

impl FormBinding for BranchForm {
    type Entity = Branch;
    type Payload = BranchPayload;

    fn from_entity(entity: &Branch) -> Self {
        Self {
            id: Some(entity.id.clone()),
            code: entity.code.clone(),
            name: entity.name.clone(),
            name_ar: text_or_empty(entity.name_ar.as_deref()),
            address: text_or_empty(entity.address.as_deref()),
            city: text_or_empty(entity.city.as_deref()),
            phone: text_or_empty(entity.phone.as_deref()),
            email: text_or_empty(entity.email.as_deref()),
            is_main: flag_to_bool(entity.is_main),
            is_active: flag_to_bool(entity.is_active),
        }
    }

    fn to_payload(&self) -> Result<BranchPayload, FieldError> {
        Ok(BranchPayload {
            code: required_text(&self.code, "code", "Code")?,
            name: required_text(&self.name, "name", "Name")?,
            name_ar: non_empty(&self.name_ar),
            address: non_empty(&self.address),
            city: non_empty(&self.city),
            phone: non_empty(&self.phone),
            email: non_empty(&self.email),
            is_main: bool_to_flag(self.is_main),
            is_active: bool_to_flag(self.is_active),
        })
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
