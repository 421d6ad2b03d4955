//! The field model store and the operations that mutate it.
//!
//! [`FormEditor`] owns the ordered field list, the current selection and the
//! current-form reference. Every operation runs to completion on `&mut self` and
//! returns the notifications it produced instead of delivering them; wrap the
//! editor in an [`EditorSession`] to forward them to a sink.

use crate::error::EditorError;
use crate::ids::{IdGenerator, SequentialIds};
use crate::schema::{DEFAULT_CHOICE_OPTIONS, Field, FieldId, FieldType, Form, FormMeta};
use ahash::AHashMap;
use tracing::debug;

mod lifecycle;
mod mutation;
mod session;

pub use session::EditorSession;

pub struct FormEditor {
    fields: Vec<Field>,
    selected: Option<FieldId>,
    current_form: Option<Form>,
    revision: u64,
    ids: Box<dyn IdGenerator>,
    type_registry: AHashMap<String, FieldType>,
    default_options: Vec<String>,
}

pub struct EditorBuilder {
    ids: Box<dyn IdGenerator>,
    type_registry: AHashMap<String, FieldType>,
    default_options: Vec<String>,
}

impl EditorBuilder {
    pub fn new() -> Self {
        let mut type_registry = AHashMap::new();
        for field_type in FieldType::ALL {
            type_registry.insert(field_type.name().to_string(), field_type);
        }
        Self {
            ids: Box::new(SequentialIds::new()),
            type_registry,
            default_options: DEFAULT_CHOICE_OPTIONS.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Accepts `alias` as a type name in `add_field`, e.g. `"dropdown"` for select.
    pub fn with_type_alias(mut self, alias: &str, field_type: FieldType) -> Self {
        self.type_registry.insert(alias.to_string(), field_type);
        self
    }

    /// Replaces the options given to new choice fields. An empty list is ignored.
    pub fn with_default_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if !options.is_empty() {
            self.default_options = options;
        }
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn build(self) -> FormEditor {
        FormEditor {
            fields: Vec::new(),
            selected: None,
            current_form: None,
            revision: 0,
            ids: self.ids,
            type_registry: self.type_registry,
            default_options: self.default_options,
        }
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormEditor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn selected_field_id(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.field(id))
    }

    /// The form most recently loaded, or `None` for an unsaved form.
    pub fn current_form(&self) -> Option<&Form> {
        self.current_form.as_ref()
    }

    /// Incremented by every operation that changes the store.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolves a type name through the registry, including configured aliases.
    pub fn resolve_type(&self, type_name: &str) -> Result<FieldType, EditorError> {
        self.type_registry
            .get(type_name)
            .copied()
            .ok_or_else(|| EditorError::FieldTypeUnsupported {
                type_name: type_name.to_string(),
            })
    }

    /// Combines the live field list with form-level inputs into the data the save
    /// gate validates. The returned form owns its data.
    pub fn snapshot(&self, meta: FormMeta) -> Form {
        Form {
            id: self.current_form.as_ref().and_then(|f| f.id.clone()),
            name: meta.name,
            description: meta.description,
            is_public: meta.is_public,
            fields: self.fields.clone(),
            knowledge_base_id: meta.knowledge_base_id,
        }
    }

    fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Draws ids until one is free; suffixes the last draw if the generator keeps colliding.
    fn fresh_id(&mut self) -> FieldId {
        const MAX_DRAWS: usize = 8;
        let mut candidate = self.ids.next_id();
        for _ in 1..MAX_DRAWS {
            if self.position(&candidate).is_none() {
                return candidate;
            }
            debug!(id = %candidate, "generated field id already in use, drawing again");
            candidate = self.ids.next_id();
        }
        let base = candidate.to_string();
        let mut suffix = 2;
        while self.position(&candidate).is_some() {
            candidate = FieldId::new(format!("{}-{}", base, suffix));
            suffix += 1;
        }
        candidate
    }
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new()
    }
}
