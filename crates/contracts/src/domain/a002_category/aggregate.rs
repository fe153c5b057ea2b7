use serde::{Deserialize, Serialize};

use crate::domain::common::{localized_label, Identified};
use crate::shared::form::{
    bool_to_flag, deserialize_decimal, deserialize_flag, flag_to_bool, non_empty, optional_select, required_text,
    text_or_empty, FieldError, FormBinding,
};

/// Product category. Categories form a two-level tree through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: Option<i64>,
    /// Resolved parent, present on detail reads only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategoryRef>,
    #[serde(default, rename = "_count", skip_serializing_if = "Option::is_none")]
    pub counts: Option<CategoryCounts>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    #[serde(default)]
    pub products: i64,
    #[serde(default)]
    pub children: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
}

impl Identified for Category {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        localized_label(&self.name, self.name_ar.as_deref())
    }
}

impl Category {
    pub fn is_active(&self) -> bool {
        flag_to_bool(self.is_active)
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.as_deref().map_or(true, |id| id.trim().is_empty())
    }

    /// Parent label for list rows: resolved parent first, then the bare id
    pub fn parent_label(&self) -> Option<String> {
        match (&self.parent, &self.parent_id) {
            (Some(parent), _) => Some(localized_label(&parent.name, parent.name_ar.as_deref())),
            (None, Some(id)) if !id.is_empty() => Some(id.clone()),
            _ => None,
        }
    }
}

/// Direct subcategories of `parent_id`, in backend order
pub fn child_categories<'a>(all: &'a [Category], parent_id: &str) -> Vec<&'a Category> {
    all.iter()
        .filter(|c| c.parent_id.as_deref() == Some(parent_id))
        .collect()
}

// ============================================================================
// Products of a category
// ============================================================================

/// Row of `GET /api/products?categoryId=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProduct {
    pub id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: Option<i64>,
}

impl CategoryProduct {
    pub fn display_name(&self) -> String {
        localized_label(&self.name, self.name_ar.as_deref())
    }

    pub fn is_active(&self) -> bool {
        flag_to_bool(self.is_active)
    }
}

/// Header figures of the products section
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductSummary {
    pub total: usize,
    pub active: usize,
    pub total_value: f64,
}

impl ProductSummary {
    pub fn collect(products: &[CategoryProduct]) -> Self {
        Self {
            total: products.len(),
            active: products.iter().filter(|p| p.is_active()).count(),
            total_value: products.iter().filter_map(|p| p.unit_price).sum(),
        }
    }
}

/// Candidates for the parent select of the category being edited.
///
/// Only top-level categories may be parents, and a category is never offered
/// as its own parent. Backend order is preserved.
pub fn parent_options<'a>(candidates: &'a [Category], editing_id: Option<&str>) -> Vec<&'a Category> {
    candidates
        .iter()
        .filter(|c| c.is_top_level())
        .filter(|c| Some(c.id.as_str()) != editing_id)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub name_ar: String,
    pub description: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            name_ar: String::new(),
            description: String::new(),
            parent_id: None,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub name_ar: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub is_active: i32,
}

impl FormBinding for CategoryForm {
    type Entity = Category;
    type Payload = CategoryPayload;

    fn from_entity(entity: &Category) -> Self {
        Self {
            id: Some(entity.id.clone()),
            code: text_or_empty(entity.code.as_deref()),
            name: entity.name.clone(),
            name_ar: text_or_empty(entity.name_ar.as_deref()),
            description: text_or_empty(entity.description.as_deref()),
            parent_id: optional_select(entity.parent_id.as_deref()),
            is_active: flag_to_bool(entity.is_active),
        }
    }

    fn to_payload(&self) -> Result<CategoryPayload, FieldError> {
        let parent_id = optional_select(self.parent_id.as_deref());
        if parent_id.is_some() && parent_id.as_deref() == self.id.as_deref() {
            return Err(FieldError::invalid(
                "parent_id",
                "Parent category",
                "a category cannot be its own parent",
            ));
        }

        Ok(CategoryPayload {
            name: required_text(&self.name, "name", "Name")?,
            name_ar: non_empty(&self.name_ar),
            code: non_empty(&self.code),
            description: non_empty(&self.description),
            parent_id,
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

    fn category(json: serde_json::Value) -> Category {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_parent_options_exclude_self() {
        let all = vec![
            category(json!({ "id": "c1" })),
            category(json!({ "id": "c2" })),
            category(json!({ "id": "c3" })),
        ];
        let ids: Vec<&str> = parent_options(&all, Some("c2"))
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn test_parent_options_only_top_level() {
        let all = vec![
            category(json!({ "id": "c1" })),
            category(json!({ "id": "c4", "parentId": "c1" })),
            category(json!({ "id": "c5", "parentId": "" })),
        ];
        let ids: Vec<&str> = parent_options(&all, None)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c5"]);
    }

    #[test]
    fn test_self_parent_rejected_before_submit() {
        let mut form = CategoryForm::from_entity(&category(json!({ "id": "c2", "name": "Phones" })));
        form.parent_id = Some("c2".to_string());
        assert_eq!(form.to_payload().unwrap_err().field(), "parent_id");
    }

    #[test]
    fn test_absent_parent_is_unselected() {
        let form = CategoryForm::from_entity(&category(json!({ "id": "c1", "name": "Laptops", "parentId": null })));
        assert_eq!(form.parent_id, None);
        assert_eq!(form.code, "");
        let payload = serde_json::to_value(form.to_payload().unwrap()).unwrap();
        assert_eq!(payload["parentId"], serde_json::Value::Null);
    }

    #[test]
    fn test_name_required() {
        let form = CategoryForm::default();
        assert_eq!(form.to_payload().unwrap_err().field(), "name");
    }

    #[test]
    fn test_binding_is_idempotent() {
        let entity = category(json!({
            "id": "c4", "name": "Chargers ", "nameAr": "شواحن", "parentId": "c1",
            "description": "  ", "isActive": 1,
            "parent": { "id": "c1", "name": "Accessories" }
        }));
        let first = CategoryForm::from_entity(&entity).to_payload().unwrap();

        let mut echoed = serde_json::to_value(&first).unwrap();
        echoed["id"] = json!("c4");
        let second = CategoryForm::from_entity(&category(echoed)).to_payload().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parent_label() {
        let child = category(json!({
            "id": "c4", "name": "Chargers", "parentId": "c1",
            "parent": { "id": "c1", "name": "Accessories", "nameAr": "اكسسوارات" }
        }));
        assert_eq!(child.parent_label().as_deref(), Some("اكسسوارات"));
        assert_eq!(category(json!({ "id": "c1" })).parent_label(), None);
    }

    #[test]
    fn test_children_of_a_category() {
        let all = vec![
            category(json!({ "id": "c1" })),
            category(json!({ "id": "c4", "parentId": "c1", "_count": { "products": 7 } })),
            category(json!({ "id": "c5", "parentId": "c2" })),
            category(json!({ "id": "c6", "parentId": "c1" })),
        ];
        let children = child_categories(&all, "c1");
        let ids: Vec<&str> = children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c4", "c6"]);
        assert_eq!(children[0].counts, Some(CategoryCounts { products: 7, children: 0 }));
        assert_eq!(children[1].counts, None);
    }

    #[test]
    fn test_product_summary() {
        let products: Vec<CategoryProduct> = serde_json::from_value(json!([
            { "id": "p1", "sku": "LAP-1", "name": "Laptop", "unitPrice": "850.50", "isActive": 1 },
            { "id": "p2", "sku": "LAP-2", "name": "Laptop Pro", "unitPrice": 1200, "isActive": 0 },
            { "id": "p3", "sku": "BAG-1", "name": "Bag", "unitPrice": null }
        ]))
        .unwrap();

        let summary = ProductSummary::collect(&products);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.total_value, 2050.5);
    }
}
