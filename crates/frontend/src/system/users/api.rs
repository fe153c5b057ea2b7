use contracts::system::users::{User, UserForm};

use crate::shared::components::StatusTone;
use crate::shared::list_utils::Searchable;
use crate::shared::resource::Resource;

impl Resource for User {
    type Form = UserForm;
    const COLLECTION: &'static str = "/api/users";
    const NOUN: &'static str = "User";
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str()];
        fields.extend(self.full_name.as_deref());
        fields.extend(self.email.as_deref());
        fields.extend(self.phone.as_deref());
        fields
    }
}

pub fn role_tone(role: Option<&str>) -> StatusTone {
    match role {
        Some("super_admin") | Some("owner") => StatusTone::Danger,
        Some("admin") => StatusTone::Brand,
        Some("manager") => StatusTone::Info,
        _ => StatusTone::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;
    use serde_json::json;

    #[test]
    fn test_search_covers_username_and_full_name() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"id": "u1", "username": "admin", "full_name": "System Admin", "role": "admin"},
            {"id": "u2", "username": "sara", "full_name": "Sara Ali", "role": "employee"}
        ]))
        .unwrap();

        assert_eq!(filter_list(&users, "SARA")[0].id, "u2");
        assert_eq!(filter_list(&users, "system").len(), 1);
    }

    #[test]
    fn test_role_tone() {
        assert_eq!(role_tone(Some("owner")), StatusTone::Danger);
        assert_eq!(role_tone(Some("manager")), StatusTone::Info);
        assert_eq!(role_tone(None), StatusTone::Neutral);
    }
}
