use contracts::domain::a002_category::aggregate::{parent_options, Category, CategoryForm, CategoryProduct};
use contracts::domain::common::Identified;
use contracts::shared::list::ListQuery;

use crate::shared::list_utils::Searchable;
use crate::shared::resource::{ApiClient, Resource, ResourceError};

/// Products shown on a category page
pub const PRODUCTS_LIMIT: u32 = 50;

impl Resource for Category {
    type Form = CategoryForm;
    const COLLECTION: &'static str = "/api/categories";
    const NOUN: &'static str = "Category";
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.code.as_deref());
        fields.extend(self.name_ar.as_deref());
        fields
    }
}

impl Searchable for CategoryProduct {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.sku.as_str()];
        fields.extend(self.name_ar.as_deref());
        fields
    }
}

/// First page of the products filed under a category
pub async fn fetch_products(client: &ApiClient, category_id: &str) -> Result<Vec<CategoryProduct>, ResourceError> {
    let collection = format!("/api/products?categoryId={}", urlencoding::encode(category_id));
    client
        .fetch_rows(&collection, &ListQuery::with_limit(PRODUCTS_LIMIT))
        .await
}

/// `(id, label)` pairs for the parent select
pub fn parent_select_options(candidates: &[Category], editing_id: Option<&str>) -> Vec<(String, String)> {
    parent_options(candidates, editing_id)
        .into_iter()
        .map(|category| (category.id.clone(), category.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;
    use crate::shared::resource::test_support::{client, CountingSession, ScriptedTransport};
    use crate::shared::resource::transport::ApiResponse;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_products_are_read_by_category() {
        let transport = ScriptedTransport::new(vec![ApiResponse::new(
            200,
            r#"{"data": [{"id": "p1", "sku": "CASE-01", "name": "Silicone case", "unitPrice": "4500"}]}"#,
        )]);
        let api = client(transport.clone(), CountingSession::new());

        let products = block_on(fetch_products(&api, "c 1")).unwrap();

        assert_eq!(products[0].unit_price, Some(4500.0));
        assert_eq!(
            transport.requests()[0].path,
            "/api/products?categoryId=c%201&page=1&limit=50"
        );
        assert_eq!(filter_list(&products, "case-01").len(), 1);
    }

    #[test]
    fn test_parent_select_for_child_category() {
        let categories: Vec<Category> = serde_json::from_value(json!([
            {"id": "c1", "name": "Phones"},
            {"id": "c2", "name": "Cases", "parentId": "c1"},
            {"id": "c3", "name": "Laptops", "nameAr": "حواسيب"}
        ]))
        .unwrap();

        let options = parent_select_options(&categories, Some("c2"));
        assert_eq!(
            options,
            vec![
                ("c1".to_string(), "Phones".to_string()),
                ("c3".to_string(), "حواسيب".to_string()),
            ]
        );

        let ids: Vec<_> = parent_select_options(&categories, Some("c1"))
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["c3"]);
    }
}
