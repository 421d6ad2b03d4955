use crate::notify::{Notification, Severity};
use crate::schema::{FieldId, FieldType};
use thiserror::Error;

/// Opaque error type produced by external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by field mutations and lifecycle operations.
///
/// None of these are fatal: the store is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Field type '{type_name}' is not supported")]
    FieldTypeUnsupported { type_name: String },

    #[error("The maximum number of forms for this plan has been reached")]
    QuotaExceeded,

    #[error("Field id '{0}' appears more than once in the form")]
    DuplicateFieldId(FieldId),

    #[error("Field '{field_id}' of type '{field_type}' has invalid options: {message}")]
    InvalidOptions {
        field_id: FieldId,
        field_type: FieldType,
        message: String,
    },
}

impl EditorError {
    /// The notification a session should surface for this failure, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            EditorError::QuotaExceeded => Some(Notification::new(
                "Form limit reached",
                "Upgrade your plan to create more forms.",
                Severity::Error,
            )),
            _ => None,
        }
    }
}

/// Errors produced by the save validation gate before anything is persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A knowledge base is required when the form contains a chat field")]
    MissingKnowledgeBase,
}

impl ValidationError {
    pub fn notification(&self) -> Notification {
        match self {
            ValidationError::MissingKnowledgeBase => Notification::new(
                "Validation error",
                "Please select a knowledge base for the chat field.",
                Severity::Error,
            ),
        }
    }
}

/// Errors returned by `validate_and_submit`.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure reported by the persistence collaborator, passed through untouched.
    #[error("Persistence failed: {0}")]
    Persistence(#[source] BoxError),
}
