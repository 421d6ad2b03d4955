//! The save validation gate.
//!
//! A form that contains a chat field must name a knowledge base before it can be
//! saved. The gate checks that requirement, normalizes the payload and only then
//! calls the persistence collaborator.

use crate::collab::{FormPersistence, KnowledgeBaseDirectory, SaveRequest};
use crate::editor::FormEditor;
use crate::error::{SubmitError, ValidationError};
use crate::schema::{Field, FieldType, Form, FormPayload};
use tracing::{debug, warn};

pub fn has_chat_field(fields: &[Field]) -> bool {
    fields.iter().any(|f| f.field_type == FieldType::Chat)
}

/// True iff the form has a chat field but no (or an empty) knowledge base id.
pub fn should_show_validation_error(form: &Form) -> bool {
    has_chat_field(&form.fields) && form.knowledge_base().is_none()
}

/// Runs the check and builds the normalized payload, without persisting anything.
pub fn validate(form: &Form) -> Result<FormPayload, ValidationError> {
    if should_show_validation_error(form) {
        return Err(ValidationError::MissingKnowledgeBase);
    }
    Ok(FormPayload {
        name: form.name.clone(),
        description: form.description.clone(),
        is_public: form.is_public,
        knowledge_base_id: form.knowledge_base().map(str::to_string),
    })
}

/// Proof of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub payload: FormPayload,
    pub revision: u64,
}

impl SubmitReceipt {
    /// True if the editor changed after the payload was taken, i.e. the saved
    /// data no longer matches what is on screen.
    pub fn is_stale(&self, editor: &FormEditor) -> bool {
        editor.revision() != self.revision
    }
}

/// Validates `form` and, if it passes, forwards the payload to `persistence`.
///
/// The request is built from owned data before the first await, so the editor
/// the form was taken from may keep changing while the save is in flight.
/// `revision` stamps the request so such changes can be detected afterwards.
pub async fn validate_and_submit<P>(
    form: &Form,
    revision: u64,
    directory: &KnowledgeBaseDirectory,
    persistence: &P,
) -> Result<SubmitReceipt, SubmitError>
where
    P: FormPersistence + ?Sized,
{
    let payload = validate(form).inspect_err(|e| warn!("form rejected: {}", e))?;

    if let Some(kb) = payload.knowledge_base_id.as_deref() {
        if !directory.loading && directory.find(kb).is_none() {
            warn!(knowledge_base_id = kb, "knowledge base not found in directory");
        }
    }

    let request = SaveRequest {
        form_id: form.id.clone(),
        payload: payload.clone(),
        revision,
    };
    debug!(form_id = ?request.form_id, revision, "submitting form");
    persistence
        .save(request)
        .await
        .map_err(SubmitError::Persistence)?;

    Ok(SubmitReceipt { payload, revision })
}
