use super::field::{Field, FieldId, FieldType};

/// A named starting point that `select_template` can apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<Field>,
}

/// The templates shipped with the editor.
pub fn builtin_templates() -> Vec<FormTemplate> {
    vec![
        FormTemplate {
            key: "contact",
            name: "Contact form",
            description: "Collect a name, email address and message.",
            fields: vec![
                field("name", FieldType::Text, "Full name", "Jane Doe", true),
                field("email", FieldType::Email, "Email", "jane@example.com", true),
                field("message", FieldType::Textarea, "Message", "", false),
            ],
        },
        FormTemplate {
            key: "feedback",
            name: "Feedback survey",
            description: "Rate an experience and leave a comment.",
            fields: vec![
                choice(
                    "rating",
                    FieldType::Radio,
                    "How was your experience?",
                    &["Great", "Okay", "Poor"],
                ),
                choice(
                    "channel",
                    FieldType::Select,
                    "How did you hear about us?",
                    &["Search", "Friend", "Social media", "Other"],
                ),
                field("contact_ok", FieldType::Checkbox, "You may contact me", "", false),
                field("comments", FieldType::Textarea, "Comments", "", false),
            ],
        },
        FormTemplate {
            key: "ai-intake",
            name: "AI intake",
            description: "Intake form with an assistant answering from your knowledge base.",
            fields: vec![
                field("name", FieldType::Text, "Full name", "", true),
                field("email", FieldType::Email, "Email", "", true),
                field("assistant", FieldType::Chat, "Ask us anything", "Type a question", false),
            ],
        },
    ]
}

/// Looks up a built-in template by key.
pub fn find_template(key: &str) -> Option<FormTemplate> {
    builtin_templates().into_iter().find(|t| t.key == key)
}

fn field(id: &str, field_type: FieldType, label: &str, placeholder: &str, required: bool) -> Field {
    Field {
        id: FieldId::from(id),
        field_type,
        label: label.to_string(),
        placeholder: placeholder.to_string(),
        required,
        options: None,
    }
}

fn choice(id: &str, field_type: FieldType, label: &str, options: &[&str]) -> Field {
    Field {
        options: Some(options.iter().map(|o| o.to_string()).collect()),
        ..field(id, field_type, label, "", false)
    }
}
