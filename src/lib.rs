//! # Formwright - Form-Schema Mutation Engine
//!
//! **Formwright** is the core of a form builder: it owns the ordered list of
//! fields being edited, applies add/update/delete/move operations while keeping
//! the schema invariants intact, and gates saving behind a validation check.
//!
//! ## Core Workflow
//!
//! 1.  **Edit**: Create a [`FormEditor`](editor::FormEditor) and mutate it. Every
//!     operation returns the notifications it produced next to its value.
//! 2.  **Replace**: Load an existing form, apply a template or start a blank form
//!     (the latter gated by an external quota flag).
//! 3.  **Submit**: Snapshot the editor together with the form-level inputs and
//!     hand it to [`validate_and_submit`](gate::validate_and_submit). Forms with a
//!     chat field are rejected until a knowledge base is chosen.
//!
//! ## Invariants
//!
//! - Field ids are unique within a form.
//! - Only choice fields (`select`, `radio`) carry options, and never an empty list.
//! - The selection, when set, always names a field in the store.
//! - A persisted payload never carries an empty knowledge base id.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formwright::prelude::*;
//! use async_trait::async_trait;
//!
//! struct Discard;
//!
//! #[async_trait]
//! impl FormPersistence for Discard {
//!     async fn save(&self, request: SaveRequest) -> std::result::Result<(), BoxError> {
//!         println!("saving {}", request.payload.name);
//!         Ok(())
//!     }
//! }
//!
//! # async fn run() -> Result<()> {
//! let mut session = EditorSession::new(FormEditor::new(), TracingSink);
//! let chat = session.add_field("chat")?;
//! session.update_field(&chat, FieldPatch::default().label("Ask us anything"))?;
//!
//! let directory = KnowledgeBaseDirectory::loaded(vec![KnowledgeBase {
//!     id: "kb-1".to_string(),
//!     name: "Product docs".to_string(),
//! }]);
//! let meta = FormMeta {
//!     name: "Support".to_string(),
//!     knowledge_base_id: Some("kb-1".to_string()),
//!     ..Default::default()
//! };
//! let receipt = session.submit(meta, &directory, &Discard).await?;
//! assert!(!receipt.is_stale(session.editor()));
//! # Ok(())
//! # }
//! ```

pub mod collab;
pub mod editor;
pub mod error;
pub mod gate;
pub mod ids;
pub mod notify;
pub mod prelude;
pub mod schema;
