use super::FormEditor;
use crate::error::EditorError;
use crate::notify::{Applied, Notification};
use crate::schema::field::default_options_for;
use crate::schema::{Direction, Field, FieldId, FieldPatch, FieldType};
use tracing::{debug, warn};

impl FormEditor {
    /// Appends a new field of the named type and selects it.
    ///
    /// Fails with `FieldTypeUnsupported` for names that are neither a field type
    /// nor a configured alias; the store is untouched in that case.
    pub fn add_field(&mut self, type_name: &str) -> Result<Applied<FieldId>, EditorError> {
        let field_type = self.resolve_type(type_name).inspect_err(|_| {
            warn!(type_name, "rejected field of unsupported type");
        })?;
        Ok(self.add_field_of(field_type))
    }

    pub fn add_field_of(&mut self, field_type: FieldType) -> Applied<FieldId> {
        let id = self.fresh_id();
        let field = Field::new(id.clone(), field_type, &self.default_options);
        let event = Notification::field_added(&field.label);

        debug!(id = %id, %field_type, "adding field");
        self.fields.push(field);
        self.selected = Some(id.clone());
        self.touch();
        Applied::with_event(id, event)
    }

    /// Merges `patch` into the field with `id`; the id itself never changes.
    ///
    /// An unknown id is a no-op and yields `false`. When the patch changes the
    /// type, options reset to the new type's defaults unless the patch also
    /// supplies options; `required` is kept. Options on a non-choice field are
    /// dropped, and an empty option list on a choice field is rejected.
    pub fn update_field(
        &mut self,
        id: &FieldId,
        patch: FieldPatch,
    ) -> Result<Applied<bool>, EditorError> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "update ignored: no such field");
            return Ok(Applied::silent(false));
        };

        let updated = merge_patch(self.fields[index].clone(), patch, &self.default_options)?;
        updated.check_options()?;
        self.fields[index] = updated;
        self.touch();
        Ok(Applied::silent(true))
    }

    /// Removes the field with `id`, clearing the selection if it pointed there.
    ///
    /// Idempotent: an unknown id changes nothing, emits nothing and yields `false`.
    pub fn delete_field(&mut self, id: &FieldId) -> Applied<bool> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "delete ignored: no such field");
            return Applied::silent(false);
        };

        let removed = self.fields.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.touch();
        Applied::with_event(true, Notification::field_deleted(&removed.label))
    }

    /// Swaps the field with its neighbour in `direction`. Yields `false` at the
    /// boundaries and for unknown ids.
    pub fn move_field(&mut self, id: &FieldId, direction: Direction) -> Applied<bool> {
        let Some(index) = self.position(id) else {
            return Applied::silent(false);
        };
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&i| i < self.fields.len()),
        };
        let Some(target) = target else {
            return Applied::silent(false);
        };

        self.fields.swap(index, target);
        self.touch();
        Applied::silent(true)
    }

    /// Sets or clears the selection. Selecting an unknown id leaves it unchanged.
    pub fn select_field(&mut self, id: Option<&FieldId>) -> bool {
        match id {
            Some(id) if self.position(id).is_none() => false,
            Some(id) => {
                self.selected = Some(id.clone());
                true
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    /// Inserts a copy of the field directly after it, under a fresh id, and selects it.
    pub fn duplicate_field(&mut self, id: &FieldId) -> Applied<Option<FieldId>> {
        let Some(index) = self.position(id) else {
            return Applied::silent(None);
        };

        let new_id = self.fresh_id();
        let copy = Field {
            id: new_id.clone(),
            ..self.fields[index].clone()
        };
        let event = Notification::field_duplicated(&copy.label);
        self.fields.insert(index + 1, copy);
        self.selected = Some(new_id.clone());
        self.touch();
        Applied::with_event(Some(new_id), event)
    }
}

fn merge_patch(
    mut field: Field,
    patch: FieldPatch,
    default_options: &[String],
) -> Result<Field, EditorError> {
    if let Some(field_type) = patch.field_type.filter(|t| *t != field.field_type) {
        field.field_type = field_type;
        field.options = default_options_for(field_type, default_options);
    }
    if let Some(label) = patch.label {
        field.label = label;
    }
    if let Some(placeholder) = patch.placeholder {
        field.placeholder = placeholder;
    }
    if let Some(required) = patch.required {
        field.required = required;
    }

    match patch.options {
        Some(options) if field.field_type.is_choice() => {
            if options.is_empty() {
                return Err(EditorError::InvalidOptions {
                    field_id: field.id.clone(),
                    field_type: field.field_type,
                    message: "choice fields need at least one option".to_string(),
                });
            }
            field.options = Some(options);
        }
        Some(_) => debug!(id = %field.id, "options dropped for non-choice field"),
        None => {}
    }
    Ok(field)
}
