//! Interfaces of the external collaborators the editor consumes.

use crate::error::BoxError;
use crate::schema::FormPayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the save gate hands to persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    /// `None` creates a new form, `Some` updates the form with that id.
    pub form_id: Option<String>,
    pub payload: FormPayload,
    /// Editor revision the payload was taken from.
    pub revision: u64,
}

/// Create-or-update storage for forms.
///
/// Only success or failure is observed; errors are passed upward unmodified.
#[async_trait]
pub trait FormPersistence: Send + Sync {
    async fn save(&self, request: SaveRequest) -> Result<(), BoxError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub id: String,
    pub name: String,
}

/// Read-only view of the knowledge bases available to the current account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseDirectory {
    #[serde(default)]
    pub entries: Vec<KnowledgeBase>,
    #[serde(default)]
    pub loading: bool,
}

impl KnowledgeBaseDirectory {
    pub fn loaded(entries: Vec<KnowledgeBase>) -> Self {
        Self {
            entries,
            loading: false,
        }
    }

    pub fn find(&self, id: &str) -> Option<&KnowledgeBase> {
        self.entries.iter().find(|kb| kb.id == id)
    }
}
