//! Form bindings: conversion between backend records and editable form state.
//!
//! Every detail page works with three shapes of the same record:
//! - the entity as the backend returns it (nullable fields, 0/1 flags),
//! - the form, which is total (strings are never absent, flags are `bool`),
//! - the payload sent back on save (empty strings become `null`, flags 1/0).
//!
//! The helpers in this module are the only place where that coalescing happens.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Local validation failure. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { field: &'static str, label: &'static str },

    #[error("{label}: {message}")]
    Invalid {
        field: &'static str,
        label: &'static str,
        message: String,
    },
}

impl FieldError {
    pub fn required(field: &'static str, label: &'static str) -> Self {
        FieldError::Required { field, label }
    }

    pub fn invalid(field: &'static str, label: &'static str, message: impl Into<String>) -> Self {
        FieldError::Invalid {
            field,
            label,
            message: message.into(),
        }
    }

    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required { field, .. } | FieldError::Invalid { field, .. } => field,
        }
    }
}

// ============================================================================
// Binding trait
// ============================================================================

/// Two-way mapping between an entity and its editable form.
///
/// `Default` must produce the form for a brand new record (`id() == None`).
pub trait FormBinding: Clone + Default {
    type Entity;
    type Payload: Serialize;

    /// Populate the form from a fetched entity. Never fails.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Serialize the form into the submit payload, rejecting missing required fields.
    fn to_payload(&self) -> Result<Self::Payload, FieldError>;

    /// Identifier of the record being edited, `None` in create mode
    fn id(&self) -> Option<&str>;

    /// Read-only forms suppress the submit action entirely
    fn is_locked(&self) -> bool {
        false
    }
}

// ============================================================================
// Field conversions
// ============================================================================

/// Present a stored 0/1 flag as a boolean. Absent means `false`.
pub fn flag_to_bool(flag: Option<i64>) -> bool {
    matches!(flag, Some(value) if value != 0)
}

/// Store a presented boolean as a 0/1 flag.
pub fn bool_to_flag(value: bool) -> i32 {
    if value {
        1
    } else {
        0
    }
}

/// Absent text fields become an empty input.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Optional text for the payload: trimmed, empty becomes `None` (sent as `null`).
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Required text for the payload: trimmed, empty is rejected.
pub fn required_text(
    value: &str,
    field: &'static str,
    label: &'static str,
) -> Result<String, FieldError> {
    non_empty(value).ok_or(FieldError::required(field, label))
}

/// Optional select value: empty selection is `None`.
pub fn optional_select(value: Option<&str>) -> Option<String> {
    value.and_then(non_empty)
}

/// Decimal input: empty is `None`, anything else must parse.
pub fn optional_decimal(
    value: &str,
    field: &'static str,
    label: &'static str,
) -> Result<Option<f64>, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(Some)
        .ok_or_else(|| FieldError::invalid(field, label, "must be a number"))
}

/// Render a stored decimal into an input value.
pub fn decimal_to_text(value: Option<f64>) -> String {
    value.map(|number| number.to_string()).unwrap_or_default()
}

/// Deserialize a numeric column the backend may send as a number or a
/// decimal string (`"12.50"`). Unparseable text reads as absent.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDecimal {
        Number(f64),
        Text(String),
    }

    let raw = Option::<RawDecimal>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawDecimal::Number(number) => Some(number),
        RawDecimal::Text(text) => text.trim().parse::<f64>().ok(),
    }))
}

/// Deserialize a flag that the backend may send as `null`, bool, integer or "0"/"1".
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(raw.map(|flag| match flag {
        RawFlag::Bool(value) => i64::from(value),
        RawFlag::Int(value) => value,
        RawFlag::Float(value) => i64::from(value != 0.0),
        RawFlag::Text(text) => match text.trim() {
            "" | "0" | "false" => 0,
            _ => 1,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping_is_total_and_inverse() {
        assert!(flag_to_bool(Some(1)));
        assert!(!flag_to_bool(Some(0)));
        assert!(!flag_to_bool(None));
        assert_eq!(bool_to_flag(true), 1);
        assert_eq!(bool_to_flag(false), 0);

        for stored in [0_i64, 1] {
            assert_eq!(i64::from(bool_to_flag(flag_to_bool(Some(stored)))), stored);
        }
        for presented in [true, false] {
            assert_eq!(flag_to_bool(Some(i64::from(bool_to_flag(presented)))), presented);
        }
    }

    #[test]
    fn test_non_empty_normalizes_blank_to_none() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty("  Basra "), Some("Basra".to_string()));
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("  ", "name", "Name").unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.to_string(), "Name is required");
        assert_eq!(required_text(" Main ", "name", "Name").unwrap(), "Main");
    }

    #[test]
    fn test_optional_decimal() {
        assert_eq!(optional_decimal("", "fee", "Fee").unwrap(), None);
        assert_eq!(optional_decimal(" 2500 ", "fee", "Fee").unwrap(), Some(2500.0));
        assert!(optional_decimal("abc", "fee", "Fee").is_err());
        assert_eq!(decimal_to_text(Some(2500.0)), "2500");
        assert_eq!(decimal_to_text(Some(12.5)), "12.5");
        assert_eq!(decimal_to_text(None), "");
    }

    #[test]
    fn test_deserialize_flag_accepts_backend_variants() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "deserialize_flag")]
            flag: Option<i64>,
        }

        let parse = |json: &str| serde_json::from_str::<Row>(json).unwrap().flag;
        assert_eq!(parse(r#"{"flag": 1}"#), Some(1));
        assert_eq!(parse(r#"{"flag": 0}"#), Some(0));
        assert_eq!(parse(r#"{"flag": true}"#), Some(1));
        assert_eq!(parse(r#"{"flag": false}"#), Some(0));
        assert_eq!(parse(r#"{"flag": "1"}"#), Some(1));
        assert_eq!(parse(r#"{"flag": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_deserialize_decimal_accepts_text_columns() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "deserialize_decimal")]
            cost: Option<f64>,
        }

        let parse = |json: &str| serde_json::from_str::<Row>(json).unwrap().cost;
        assert_eq!(parse(r#"{"cost": "12.50"}"#), Some(12.5));
        assert_eq!(parse(r#"{"cost": 7}"#), Some(7.0));
        assert_eq!(parse(r#"{"cost": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }
}
