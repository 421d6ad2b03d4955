//! Common test utilities for building fields, forms and collaborators.
use async_trait::async_trait;
use formwright::prelude::*;
use std::sync::Mutex;

/// Creates a plain field with the given id and type.
#[allow(dead_code)]
pub fn field(id: &str, field_type: FieldType) -> Field {
    Field {
        id: FieldId::from(id),
        field_type,
        label: format!("Field {}", id),
        placeholder: String::new(),
        required: false,
        options: field_type
            .is_choice()
            .then(|| vec!["Yes".to_string(), "No".to_string()]),
    }
}

/// Creates a form with fields `a`, `b` and `c`, all plain text.
#[allow(dead_code)]
pub fn create_abc_form() -> Form {
    Form {
        id: Some("form-1".to_string()),
        name: "ABC".to_string(),
        description: "Three text fields".to_string(),
        is_public: true,
        fields: vec![
            field("a", FieldType::Text),
            field("b", FieldType::Text),
            field("c", FieldType::Text),
        ],
        knowledge_base_id: None,
    }
}

/// Creates a form containing a chat field with the given knowledge base id.
#[allow(dead_code)]
pub fn create_chat_form(knowledge_base_id: Option<&str>) -> Form {
    Form {
        id: None,
        name: "Support".to_string(),
        description: String::new(),
        is_public: false,
        fields: vec![field("name", FieldType::Text), field("ask", FieldType::Chat)],
        knowledge_base_id: knowledge_base_id.map(str::to_string),
    }
}

/// An editor with deterministic ids, loaded with `create_abc_form`.
#[allow(dead_code)]
pub fn create_abc_editor() -> FormEditor {
    let mut editor = FormEditor::new();
    editor.load_form(create_abc_form()).expect("Failed to load form");
    editor
}

#[allow(dead_code)]
pub fn ids(editor: &FormEditor) -> Vec<&str> {
    editor.fields().iter().map(|f| f.id.as_str()).collect()
}

#[allow(dead_code)]
pub fn create_directory() -> KnowledgeBaseDirectory {
    KnowledgeBaseDirectory::loaded(vec![
        KnowledgeBase {
            id: "kb-1".to_string(),
            name: "Product docs".to_string(),
        },
        KnowledgeBase {
            id: "kb-2".to_string(),
            name: "Pricing".to_string(),
        },
    ])
}

/// Persistence double that records every request it receives.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingPersistence {
    pub requests: Mutex<Vec<SaveRequest>>,
    pub fail_with: Option<String>,
}

#[allow(dead_code)]
impl RecordingPersistence {
    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<SaveRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormPersistence for RecordingPersistence {
    async fn save(&self, request: SaveRequest) -> std::result::Result<(), BoxError> {
        self.requests.lock().unwrap().push(request);
        match &self.fail_with {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

/// Generator that always returns the same id, to exercise collision handling.
#[allow(dead_code)]
pub struct StuckIds;

impl IdGenerator for StuckIds {
    fn next_id(&mut self) -> FieldId {
        FieldId::from("same")
    }
}
