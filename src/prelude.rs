//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to drive an editor and submit a form.
//!
//! # Example
//!
//! ```rust,no_run
//! use formwright::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut editor = FormEditor::new();
//! let question = editor.add_field("select")?.value;
//! let _ = editor.update_field(&question, FieldPatch::default().label("Favourite colour"))?;
//!
//! let form = editor.snapshot(FormMeta {
//!     name: "Colours".to_string(),
//!     ..Default::default()
//! });
//! assert!(!should_show_validation_error(&form));
//! # Ok(())
//! # }
//! ```

// Store and lifecycle
pub use crate::editor::{EditorBuilder, EditorSession, FormEditor};
pub use crate::ids::{IdGenerator, RandomIds, SequentialIds};

// Schema
pub use crate::schema::{
    Direction, Field, FieldId, FieldPatch, FieldType, Form, FormMeta, FormPayload, FormTemplate,
    builtin_templates, find_template,
};

// Save gate and collaborators
pub use crate::collab::{FormPersistence, KnowledgeBase, KnowledgeBaseDirectory, SaveRequest};
pub use crate::gate::{
    SubmitReceipt, has_chat_field, should_show_validation_error, validate, validate_and_submit,
};

// Notifications
pub use crate::notify::{Applied, Notification, NotificationSink, Severity, TracingSink};

// Error types
pub use crate::error::{BoxError, EditorError, SubmitError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
