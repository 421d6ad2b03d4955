use super::FormEditor;
use crate::collab::{FormPersistence, KnowledgeBaseDirectory};
use crate::error::{EditorError, SubmitError};
use crate::gate::{self, SubmitReceipt};
use crate::notify::{Applied, Notification, NotificationSink};
use crate::schema::{Direction, Field, FieldId, FieldPatch, Form, FormMeta, FormTemplate};

/// A [`FormEditor`] wired to a notification sink.
///
/// Each call forwards to the editor and delivers the produced notifications,
/// including the ones attached to failures, before returning the plain value.
pub struct EditorSession<S: NotificationSink> {
    editor: FormEditor,
    sink: S,
}

impl<S: NotificationSink> EditorSession<S> {
    pub fn new(editor: FormEditor, sink: S) -> Self {
        Self { editor, sink }
    }

    pub fn editor(&self) -> &FormEditor {
        &self.editor
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (FormEditor, S) {
        (self.editor, self.sink)
    }

    pub fn add_field(&mut self, type_name: &str) -> Result<FieldId, EditorError> {
        let result = self.editor.add_field(type_name);
        self.deliver(result)
    }

    pub fn update_field(&mut self, id: &FieldId, patch: FieldPatch) -> Result<bool, EditorError> {
        let result = self.editor.update_field(id, patch);
        self.deliver(result)
    }

    pub fn delete_field(&mut self, id: &FieldId) -> bool {
        let applied = self.editor.delete_field(id);
        self.emit(applied)
    }

    pub fn move_field(&mut self, id: &FieldId, direction: Direction) -> bool {
        let applied = self.editor.move_field(id, direction);
        self.emit(applied)
    }

    pub fn select_field(&mut self, id: Option<&FieldId>) -> bool {
        self.editor.select_field(id)
    }

    pub fn duplicate_field(&mut self, id: &FieldId) -> Option<FieldId> {
        let applied = self.editor.duplicate_field(id);
        self.emit(applied)
    }

    pub fn load_form(&mut self, form: Form) -> Result<(), EditorError> {
        let result = self.editor.load_form(form);
        self.deliver(result)
    }

    pub fn select_template(&mut self, fields: Vec<Field>) -> Result<(), EditorError> {
        let result = self.editor.select_template(fields);
        self.deliver(result)
    }

    pub fn apply_template(&mut self, template: &FormTemplate) -> Result<(), EditorError> {
        let result = self.editor.apply_template(template);
        self.deliver(result)
    }

    pub fn start_new_form(&mut self, max_forms_reached: bool) -> Result<(), EditorError> {
        let result = self.editor.start_new_form(max_forms_reached);
        self.deliver(result)
    }

    /// Snapshots the editor with `meta` and runs it through the save gate.
    ///
    /// Emits "validation failed" when the gate rejects the form and "form saved"
    /// on success. Persistence failures are returned without a notification;
    /// reporting them is up to the caller.
    pub async fn submit<P>(
        &mut self,
        meta: FormMeta,
        directory: &KnowledgeBaseDirectory,
        persistence: &P,
    ) -> Result<SubmitReceipt, SubmitError>
    where
        P: FormPersistence + ?Sized,
    {
        let form = self.editor.snapshot(meta);
        let result =
            gate::validate_and_submit(&form, self.editor.revision(), directory, persistence).await;
        match &result {
            Ok(receipt) => self.sink.notify(Notification::form_saved(&receipt.payload.name)),
            Err(SubmitError::Validation(e)) => self.sink.notify(e.notification()),
            Err(SubmitError::Persistence(_)) => {}
        }
        result
    }

    fn emit<T>(&mut self, applied: Applied<T>) -> T {
        for event in applied.events {
            self.sink.notify(event);
        }
        applied.value
    }

    fn deliver<T>(&mut self, result: Result<Applied<T>, EditorError>) -> Result<T, EditorError> {
        match result {
            Ok(applied) => Ok(self.emit(applied)),
            Err(e) => {
                if let Some(event) = e.notification() {
                    self.sink.notify(event);
                }
                Err(e)
            }
        }
    }
}
