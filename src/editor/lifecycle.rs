use super::FormEditor;
use crate::error::EditorError;
use crate::notify::{Applied, Notification};
use crate::schema::{Field, Form, FormTemplate, check_fields};
use tracing::{debug, warn};

impl FormEditor {
    /// Replaces the field list with the form's fields and makes it the current form.
    ///
    /// A form whose fields break id uniqueness or the options invariant is
    /// rejected and the store is left as it was.
    pub fn load_form(&mut self, form: Form) -> Result<Applied, EditorError> {
        check_fields(&form.fields)?;

        debug!(id = ?form.id, fields = form.fields.len(), "loading form");
        let event = Notification::form_loaded(&form.name);
        self.fields = form.fields.clone();
        self.current_form = Some(form);
        self.selected = None;
        self.touch();
        Ok(Applied::with_event((), event))
    }

    /// Replaces the field list with template fields. The result is an unsaved form.
    pub fn select_template(&mut self, fields: Vec<Field>) -> Result<Applied, EditorError> {
        check_fields(&fields)?;

        let event = Notification::template_applied(fields.len());
        self.fields = fields;
        self.current_form = None;
        self.selected = None;
        self.touch();
        Ok(Applied::with_event((), event))
    }

    pub fn apply_template(&mut self, template: &FormTemplate) -> Result<Applied, EditorError> {
        debug!(template = template.key, "applying template");
        self.select_template(template.fields.clone())
    }

    /// Clears the editor for a blank form, unless the plan's form quota is used up.
    ///
    /// `max_forms_reached` comes from the quota collaborator and is not interpreted.
    pub fn start_new_form(&mut self, max_forms_reached: bool) -> Result<Applied, EditorError> {
        if max_forms_reached {
            warn!("new form blocked by quota");
            return Err(EditorError::QuotaExceeded);
        }

        self.fields.clear();
        self.selected = None;
        self.current_form = None;
        self.touch();
        Ok(Applied::with_event((), Notification::new_form_started()))
    }
}
