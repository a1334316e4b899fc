// src/modules/portfolio/domain/validation.rs

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::document::Document;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishValidation {
    pub valid: bool,
    pub field_errors: BTreeMap<String, String>,
}

impl PublishValidation {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

/// Checks the profile fields a public page cannot do without.
/// Email is optional, but must look like an address when present.
pub fn validate_for_publish(document: &Document) -> PublishValidation {
    let profile = &document.profile;
    let mut field_errors = BTreeMap::new();

    if profile.name.trim().is_empty() {
        field_errors.insert("name".to_string(), "Name is required".to_string());
    }

    if profile.title.trim().is_empty() {
        field_errors.insert(
            "title".to_string(),
            "Professional title is required".to_string(),
        );
    }

    if profile.bio.trim().is_empty() {
        field_errors.insert("bio".to_string(), "Bio is required".to_string());
    }

    if !profile.email.is_empty() && !EMAIL_RE.is_match(&profile.email) {
        field_errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }

    PublishValidation {
        valid: field_errors.is_empty(),
        field_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::domain::document::Profile;

    fn document_with(profile: Profile) -> Document {
        Document {
            profile,
            ..Default::default()
        }
    }

    fn complete_profile() -> Profile {
        Profile {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            bio: "Wrote the first program.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_name_fails_with_name_error() {
        let mut profile = complete_profile();
        profile.name = String::new();

        let result = validate_for_publish(&document_with(profile));

        assert!(!result.valid);
        assert_eq!(result.error_for("name"), Some("Name is required"));
        assert_eq!(result.field_errors.len(), 1);
    }

    #[test]
    fn test_whitespace_only_fields_are_blank() {
        let profile = Profile {
            name: "   ".to_string(),
            title: "\t".to_string(),
            bio: "\n".to_string(),
            ..Default::default()
        };

        let result = validate_for_publish(&document_with(profile));

        assert!(!result.valid);
        assert_eq!(result.error_for("name"), Some("Name is required"));
        assert_eq!(result.error_for("title"), Some("Professional title is required"));
        assert_eq!(result.error_for("bio"), Some("Bio is required"));
    }

    #[test]
    fn test_complete_profile_without_email_passes() {
        let result = validate_for_publish(&document_with(complete_profile()));

        assert!(result.valid);
        assert!(result.field_errors.is_empty());
    }

    #[test]
    fn test_complete_profile_with_valid_email_passes() {
        let mut profile = complete_profile();
        profile.email = "ada@example.com".to_string();

        assert!(validate_for_publish(&document_with(profile)).valid);
    }

    #[test]
    fn test_invalid_email_fails() {
        for email in ["ada", "ada@example", "ada @example.com", "@example.com"] {
            let mut profile = complete_profile();
            profile.email = email.to_string();

            let result = validate_for_publish(&document_with(profile));

            assert!(!result.valid, "{email} should be rejected");
            assert_eq!(
                result.error_for("email"),
                Some("Please enter a valid email address")
            );
        }
    }

    #[test]
    fn test_default_document_reports_all_required_fields() {
        let result = validate_for_publish(&Document::default());

        assert!(!result.valid);
        let fields: Vec<&str> = result.field_errors.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["bio", "name", "title"]);
    }
}
