// src/modules/portfolio/domain/reducer.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{DesignSettings, Document, Profile, TemplateRef};
use super::section::Section;

/// A discrete edit to a document.
///
/// JSON form: `{"type": "SET_PROFILE", "payload": {...}}`. Any tag that is
/// not listed here decodes to `Unknown`, which leaves the document untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditAction {
    SetTemplate(TemplateRef),
    SetProfile(Profile),
    SetSections(Vec<Section>),
    SetDesign(DesignSettings),
    LoadDocument(Document),
    ResetDocument(Document),
    #[serde(other)]
    Unknown,
}

impl EditAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditAction::SetTemplate(_) => "SET_TEMPLATE",
            EditAction::SetProfile(_) => "SET_PROFILE",
            EditAction::SetSections(_) => "SET_SECTIONS",
            EditAction::SetDesign(_) => "SET_DESIGN",
            EditAction::LoadDocument(_) => "LOAD_DOCUMENT",
            EditAction::ResetDocument(_) => "RESET_DOCUMENT",
            EditAction::Unknown => "UNKNOWN",
        }
    }
}

const KNOWN_ACTIONS: [&str; 6] = [
    "SET_TEMPLATE",
    "SET_PROFILE",
    "SET_SECTIONS",
    "SET_DESIGN",
    "LOAD_DOCUMENT",
    "RESET_DOCUMENT",
];

/// Decodes one action from JSON. Unrecognised tags become `Unknown` even
/// when they carry a payload; a known tag with a malformed payload is an error.
pub fn decode_action(value: Value) -> Result<EditAction, serde_json::Error> {
    let is_known = value
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|tag| KNOWN_ACTIONS.contains(&tag));

    match serde_json::from_value(value) {
        Ok(action) => Ok(action),
        Err(_) if !is_known => Ok(EditAction::Unknown),
        Err(e) => Err(e),
    }
}

pub fn reduce(state: Document, action: EditAction) -> Document {
    match action {
        EditAction::SetTemplate(template) => Document { template, ..state },
        EditAction::SetProfile(profile) => Document { profile, ..state },
        EditAction::SetSections(sections) => Document { sections, ..state },
        EditAction::SetDesign(design) => Document { design, ..state },
        EditAction::LoadDocument(document) | EditAction::ResetDocument(document) => document,
        EditAction::Unknown => state,
    }
}

/// Folds a batch of actions over `state`, in order.
pub fn reduce_all<I>(state: Document, actions: I) -> Document
where
    I: IntoIterator<Item = EditAction>,
{
    actions.into_iter().fold(state, reduce)
}
