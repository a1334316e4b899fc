// src/modules/portfolio/domain/document.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::section::Section;

pub const DEFAULT_TEMPLATE_VALUE: &str = "modern-clean";
pub const DEFAULT_TEMPLATE_LABEL: &str = "Modern Clean";
pub const DEFAULT_TEMPLATE_DESCRIPTION: &str =
    "Professional and minimalist design with clean typography";
pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

//
// ──────────────────────────────────────────────────────────
// Template reference
// ──────────────────────────────────────────────────────────
//

/// Which catalog template a document uses. `value` is the renderer key
/// (`modern-clean`, `minimalist`); `id` is the catalog row, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateRef {
    pub id: Option<Uuid>,
    pub value: String,
    pub label: String,
    pub description: String,
}

impl Default for TemplateRef {
    fn default() -> Self {
        Self {
            id: None,
            value: DEFAULT_TEMPLATE_VALUE.to_string(),
            label: DEFAULT_TEMPLATE_LABEL.to_string(),
            description: DEFAULT_TEMPLATE_DESCRIPTION.to_string(),
        }
    }
}

impl TemplateRef {
    /// Builds a reference from a catalog name: "Modern Clean" -> "modern-clean".
    pub fn from_catalog(id: Uuid, name: &str, description: &str) -> Self {
        Self {
            id: Some(id),
            value: template_value_from_name(name),
            label: name.to_string(),
            description: description.to_string(),
        }
    }
}

pub fn template_value_from_name(name: &str) -> String {
    name.split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

//
// ──────────────────────────────────────────────────────────
// Profile & design
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

/// Presentation parameters applied to the whole rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignSettings {
    pub font_family: String,
    pub primary_color: String,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Status
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioStatus {
    #[default]
    Draft,
    Published,
}

impl PortfolioStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioStatus::Draft => "draft",
            PortfolioStatus::Published => "published",
        }
    }

    /// Unknown values are read as draft so they never leak publicly.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "published" => PortfolioStatus::Published,
            _ => PortfolioStatus::Draft,
        }
    }
}

impl fmt::Display for PortfolioStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Document
// ──────────────────────────────────────────────────────────
//

/// The in-memory portfolio being edited. `id` and `slug` stay `None`
/// until the document has been persisted once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: Option<Uuid>,
    pub template: TemplateRef,
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub design: DesignSettings,
    pub status: PortfolioStatus,
    pub slug: Option<String>,
}

impl Document {
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_published(&self) -> bool {
        self.status == PortfolioStatus::Published
    }
}
