//! College record and DTOs.

use serde::{Deserialize, Serialize};

use super::default_true;

/// A college (faculty) grouping departments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct College {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(default, alias = "deanName")]
    pub dean_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true", alias = "isActive")]
    pub is_active: bool,
}

/// DTO for creating a college.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollege {
    pub name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dean_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

/// DTO for updating a college.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCollege {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dean_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_camel_case() {
        let json = r#"{"id": 1, "name": "Engineering", "code": "ENG", "deanName": "Dr. Okafor", "isActive": false}"#;
        let college: College = serde_json::from_str(json).unwrap();
        assert_eq!(college.dean_name.as_deref(), Some("Dr. Okafor"));
        assert!(!college.is_active);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id": 2, "name": "Sciences", "code": "SCI"}"#;
        let college: College = serde_json::from_str(json).unwrap();
        assert_eq!(college.dean_name, None);
        assert!(college.is_active);
    }

    #[test]
    fn test_update_clears_dean_with_null() {
        let data = UpdateCollege {
            dean_name: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({ "dean_name": null }));
    }
}
