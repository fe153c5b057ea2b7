//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_branch--list"`) and a
//! `data-page-category` attribute with one of the constants below.

/// Table of records with search and paging
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Administration page (users, settings)
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `true` for ids shaped like `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_branch--list"));
        assert!(!is_valid_page_id("a001_branch"));
        assert!(!is_valid_page_id("--list"));
    }
}
