//! Common traits for backend-managed records

/// A record addressed by an opaque backend identifier.
pub trait Identified {
    /// Primary key used for read/update/delete
    fn id(&self) -> &str;

    /// Human readable label (localized name first when present)
    fn display_name(&self) -> String;
}

/// Pick the localized name when it is set, otherwise the primary name.
pub fn localized_label(name: &str, name_ar: Option<&str>) -> String {
    match name_ar.map(str::trim) {
        Some(localized) if !localized.is_empty() => localized.to_string(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_label_prefers_arabic() {
        assert_eq!(localized_label("Main", Some("الرئيسي")), "الرئيسي");
        assert_eq!(localized_label("Main", Some("  ")), "Main");
        assert_eq!(localized_label("Main", None), "Main");
    }
}
