use super::field::Field;
use crate::error::EditorError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A complete form as exchanged with the outside world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base_id: Option<String>,
}

impl Form {
    /// Returns the knowledge base id only if it is set and non-empty.
    pub fn knowledge_base(&self) -> Option<&str> {
        self.knowledge_base_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Form-level inputs edited alongside the field list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub knowledge_base_id: Option<String>,
}

/// The normalized structure handed to the persistence collaborator.
///
/// `knowledge_base_id` is never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    pub name: String,
    pub description: String,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base_id: Option<String>,
}

/// Verifies id uniqueness and the options invariant for a replacement field list.
pub fn check_fields(fields: &[Field]) -> Result<(), EditorError> {
    if let Some(id) = fields.iter().map(|f| &f.id).duplicates().next() {
        return Err(EditorError::DuplicateFieldId(id.clone()));
    }
    fields.iter().try_for_each(Field::check_options)
}
