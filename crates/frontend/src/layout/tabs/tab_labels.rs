//! Tab keys and titles.
//!
//! List tabs are keyed by entity (`"a001_branch"`); detail tabs append
//! `_detail_{id}`, or `_detail_new` for a record being created.

const DETAIL_MARKER: &str = "_detail_";
const NEW_RECORD: &str = "new";

pub const A001_BRANCH: &str = "a001_branch";
pub const A002_CATEGORY: &str = "a002_category";
pub const A003_DELIVERY_COMPANY: &str = "a003_delivery_company";
pub const A004_SUPPLIER: &str = "a004_supplier";
pub const A005_RETURN_REQUEST: &str = "a005_return_request";
pub const SYS_USERS: &str = "sys_users";
pub const SYS_SETTINGS: &str = "sys_settings";

/// Key of the detail tab for `id`, or of the create form when `id` is `None`
pub fn detail_tab_key(entity: &str, id: Option<&str>) -> String {
    format!("{}{}{}", entity, DETAIL_MARKER, id.unwrap_or(NEW_RECORD))
}

/// `"a004_supplier_detail_s2"` → `("a004_supplier", Some("s2"))`,
/// `"a004_supplier_detail_new"` → `("a004_supplier", None)`
pub fn parse_detail_key(key: &str) -> Option<(&str, Option<String>)> {
    let (entity, id) = key.split_once(DETAIL_MARKER)?;
    if entity.is_empty() || id.is_empty() {
        return None;
    }
    let id = (id != NEW_RECORD).then(|| id.to_string());
    Some((entity, id))
}

fn list_label(entity: &str) -> Option<&'static str> {
    Some(match entity {
        A001_BRANCH => "Branches",
        A002_CATEGORY => "Categories",
        A003_DELIVERY_COMPANY => "Delivery companies",
        A004_SUPPLIER => "Suppliers",
        A005_RETURN_REQUEST => "Supplier returns",
        SYS_USERS => "Users",
        SYS_SETTINGS => "Company settings",
        _ => return None,
    })
}

fn record_noun(entity: &str) -> &'static str {
    match entity {
        A001_BRANCH => "Branch",
        A002_CATEGORY => "Category",
        A003_DELIVERY_COMPANY => "Delivery company",
        A004_SUPPLIER => "Supplier",
        A005_RETURN_REQUEST => "Return",
        SYS_USERS => "User",
        _ => "Record",
    }
}

/// Title of a detail tab once the record's display name is known
pub fn detail_tab_label(entity: &str, display_name: &str) -> String {
    format!("{}: {}", record_noun(entity), display_name)
}

/// Initial title for a key; detail tabs are renamed after their record loads.
/// Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(label) = list_label(key) {
        return label.to_string();
    }
    match parse_detail_key(key) {
        Some((entity, None)) => format!("New {}", record_noun(entity).to_lowercase()),
        Some((entity, Some(id))) => detail_tab_label(entity, &id),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_keys_round_trip_through_parse() {
        let key = detail_tab_key(A004_SUPPLIER, Some("s2"));
        assert_eq!(key, "a004_supplier_detail_s2");
        assert_eq!(parse_detail_key(&key), Some((A004_SUPPLIER, Some("s2".to_string()))));

        let key = detail_tab_key(A001_BRANCH, None);
        assert_eq!(parse_detail_key(&key), Some((A001_BRANCH, None)));
        assert_eq!(parse_detail_key(A001_BRANCH), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a005_return_request"), "Supplier returns");
        assert_eq!(tab_label_for_key("a001_branch_detail_new"), "New branch");
        assert_eq!(tab_label_for_key("a001_branch_detail_b1"), "Branch: b1");
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
