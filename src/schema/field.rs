use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options given to a freshly created choice field.
pub const DEFAULT_CHOICE_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// Identifier of a field, unique within one form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The closed set of input kinds a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Number,
    Date,
    Select,
    Radio,
    Checkbox,
    /// Answered by an AI assistant grounded on the form's knowledge base.
    Chat,
}

impl FieldType {
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Email,
        FieldType::Number,
        FieldType::Date,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Chat,
    ];

    /// The canonical lowercase name used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Chat => "chat",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Choice types carry a non-empty `options` list; all others carry none.
    pub fn is_choice(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One input definition within a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Field {
    /// Builds a field with the editor's defaults for `field_type`.
    pub fn new(id: FieldId, field_type: FieldType, default_options: &[String]) -> Self {
        Self {
            id,
            field_type,
            label: format!("New {} field", field_type),
            placeholder: String::new(),
            required: false,
            options: default_options_for(field_type, default_options),
        }
    }

    /// Checks the `options` invariant for this field's type.
    pub fn check_options(&self) -> Result<(), EditorError> {
        match (&self.options, self.field_type.is_choice()) {
            (Some(options), true) if !options.is_empty() => Ok(()),
            (None, false) => Ok(()),
            (_, true) => Err(self.invalid_options("choice fields need at least one option")),
            (Some(_), false) => Err(self.invalid_options("only choice fields may have options")),
        }
    }

    fn invalid_options(&self, message: &str) -> EditorError {
        EditorError::InvalidOptions {
            field_id: self.id.clone(),
            field_type: self.field_type,
            message: message.to_string(),
        }
    }
}

pub(crate) fn default_options_for(
    field_type: FieldType,
    default_options: &[String],
) -> Option<Vec<String>> {
    field_type.is_choice().then(|| default_options.to_vec())
}

/// A partial update merged into an existing field by `update_field`.
///
/// The field id is never part of a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, rename = "type")]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

/// Direction of a single adjacent swap in `move_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}
