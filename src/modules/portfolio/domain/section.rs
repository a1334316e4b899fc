// src/modules/portfolio/domain/section.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────────────────
//

/// Time-ordered section identifier (UUID v7). Never reused within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SectionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<SectionId> for Uuid {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Section type
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Text,
    List,
    Cards,
    Skills,
    Experience,
    Education,
}

impl SectionType {
    pub const ALL: [SectionType; 6] = [
        SectionType::Text,
        SectionType::List,
        SectionType::Cards,
        SectionType::Skills,
        SectionType::Experience,
        SectionType::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Text => "text",
            SectionType::List => "list",
            SectionType::Cards => "cards",
            SectionType::Skills => "skills",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == normalized)
    }

    /// Title given to a freshly created section of this type.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionType::Text => "About Me",
            SectionType::List => "Key Achievements",
            SectionType::Cards => "Projects",
            SectionType::Skills => "Skills & Technologies",
            SectionType::Experience => "Work Experience",
            SectionType::Education => "Education",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Content items
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub gpa: String,
}

//
// ──────────────────────────────────────────────────────────
// Content (shape is tied to the type)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Text(String),
    List(Vec<String>),
    Cards(Vec<CardItem>),
    Skills(Vec<String>),
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("content does not match section type '{section_type}': {reason}")]
pub struct ContentShapeError {
    pub section_type: SectionType,
    pub reason: String,
}

impl SectionContent {
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionContent::Text(_) => SectionType::Text,
            SectionContent::List(_) => SectionType::List,
            SectionContent::Cards(_) => SectionType::Cards,
            SectionContent::Skills(_) => SectionType::Skills,
            SectionContent::Experience(_) => SectionType::Experience,
            SectionContent::Education(_) => SectionType::Education,
        }
    }

    /// Placeholder content for a new section. Never empty.
    pub fn default_for(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Text => SectionContent::Text("Add your content here...".to_string()),
            SectionType::List => SectionContent::List(vec![
                "Achievement 1".to_string(),
                "Achievement 2".to_string(),
                "Achievement 3".to_string(),
            ]),
            SectionType::Cards => SectionContent::Cards(vec![CardItem {
                id: "1".to_string(),
                name: "Project Name".to_string(),
                description: "Brief description of your project and technologies used."
                    .to_string(),
                url: "https://github.com/username/project".to_string(),
            }]),
            SectionType::Skills => SectionContent::Skills(
                ["JavaScript", "React", "Node.js", "Python", "SQL"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            SectionType::Experience => SectionContent::Experience(vec![ExperienceItem {
                id: "1".to_string(),
                company: "Company Name".to_string(),
                position: "Job Title".to_string(),
                duration: "Jan 2023 - Present".to_string(),
                description: "Key responsibilities and achievements in this role.".to_string(),
            }]),
            SectionType::Education => SectionContent::Education(vec![EducationItem {
                id: "1".to_string(),
                institution: "University Name".to_string(),
                degree: "Bachelor of Science in Computer Science".to_string(),
                duration: "2019 - 2023".to_string(),
                gpa: "3.8/4.0".to_string(),
            }]),
        }
    }

    pub fn to_json(&self) -> Value {
        // Serializing plain strings and derive(Serialize) structs cannot fail.
        let value = match self {
            SectionContent::Text(text) => serde_json::to_value(text),
            SectionContent::List(items) | SectionContent::Skills(items) => {
                serde_json::to_value(items)
            }
            SectionContent::Cards(items) => serde_json::to_value(items),
            SectionContent::Experience(items) => serde_json::to_value(items),
            SectionContent::Education(items) => serde_json::to_value(items),
        };
        value.unwrap_or(Value::Null)
    }

    /// Decodes raw JSON for the given type.
    ///
    /// Older rows wrap the payload as `{"content": ..}`, `{"skills": [..]}`
    /// or `{"projects": [..]}`; those wrappers are unwrapped first.
    pub fn from_json(section_type: SectionType, raw: Value) -> Result<Self, ContentShapeError> {
        let value = unwrap_legacy(raw);

        let shape_err = |e: serde_json::Error| ContentShapeError {
            section_type,
            reason: e.to_string(),
        };

        let content = match section_type {
            SectionType::Text => {
                SectionContent::Text(serde_json::from_value(value).map_err(shape_err)?)
            }
            SectionType::List => {
                SectionContent::List(serde_json::from_value(value).map_err(shape_err)?)
            }
            SectionType::Cards => {
                SectionContent::Cards(serde_json::from_value(value).map_err(shape_err)?)
            }
            SectionType::Skills => {
                SectionContent::Skills(serde_json::from_value(value).map_err(shape_err)?)
            }
            SectionType::Experience => {
                SectionContent::Experience(serde_json::from_value(value).map_err(shape_err)?)
            }
            SectionType::Education => {
                SectionContent::Education(serde_json::from_value(value).map_err(shape_err)?)
            }
        };

        Ok(content)
    }
}

fn unwrap_legacy(raw: Value) -> Value {
    match raw {
        Value::Object(mut map) => {
            for key in ["content", "skills", "projects"] {
                match map.remove(key) {
                    Some(inner) if !inner.is_null() => return inner,
                    _ => {}
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

//
// ──────────────────────────────────────────────────────────
// Section
// ──────────────────────────────────────────────────────────
//

/// One ordered block of a portfolio. The type is derived from `content`,
/// so a section can never hold content of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SectionWire", into = "SectionWire")]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub content: SectionContent,
    pub visible: bool,
}

impl Section {
    pub fn section_type(&self) -> SectionType {
        self.content.section_type()
    }
}

/// JSON shape: `{"id", "type", "title", "content", "visible"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionWire {
    pub id: SectionId,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    #[serde(default)]
    pub title: String,
    pub content: Value,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl TryFrom<SectionWire> for Section {
    type Error = ContentShapeError;

    fn try_from(wire: SectionWire) -> Result<Self, Self::Error> {
        Ok(Section {
            id: wire.id,
            title: wire.title,
            content: SectionContent::from_json(wire.section_type, wire.content)?,
            visible: wire.visible,
        })
    }
}

impl From<Section> for SectionWire {
    fn from(section: Section) -> Self {
        SectionWire {
            id: section.id,
            section_type: section.section_type(),
            title: section.title,
            content: section.content.to_json(),
            visible: section.visible,
        }
    }
}
