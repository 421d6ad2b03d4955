//! Tests for the field mutation API.
mod common;
use common::*;
use formwright::prelude::*;
use std::collections::HashSet;

#[test]
fn test_add_select_field_on_empty_form() {
    let mut editor = FormEditor::new();
    let applied = editor.add_field("select").expect("select is supported");

    assert_eq!(editor.fields().len(), 1);
    let field = &editor.fields()[0];
    assert_eq!(field.field_type, FieldType::Select);
    assert_eq!(
        field.options,
        Some(vec!["Option 1".to_string(), "Option 2".to_string()])
    );
    assert!(!field.required);
    assert_eq!(field.label, "New select field");
    assert_eq!(editor.selected_field_id(), Some(&applied.value));
    assert_eq!(field.id, applied.value);

    assert_eq!(applied.events.len(), 1);
    assert_eq!(applied.events[0].title, "Field added");
}

#[test]
fn test_add_non_choice_field_has_no_options() {
    let mut editor = FormEditor::new();
    for type_name in ["text", "textarea", "checkbox", "chat"] {
        let id = editor.add_field(type_name).unwrap().value;
        assert_eq!(editor.field(&id).unwrap().options, None, "{}", type_name);
    }
}

#[test]
fn test_add_field_ids_are_distinct() {
    let mut editor = FormEditor::new();
    let types = ["text", "select", "radio", "chat", "email", "textarea"];
    for i in 0..60 {
        let _ = editor.add_field(types[i % types.len()]).unwrap();
    }

    assert_eq!(editor.fields().len(), 60);
    let unique: HashSet<_> = editor.fields().iter().map(|f| &f.id).collect();
    assert_eq!(unique.len(), 60);
}

#[test]
fn test_add_field_random_ids_are_distinct() {
    let mut editor = FormEditor::builder()
        .with_id_generator(RandomIds::with_seed(7))
        .build();
    for _ in 0..100 {
        let _ = editor.add_field_of(FieldType::Text);
    }
    let unique: HashSet<_> = editor.fields().iter().map(|f| &f.id).collect();
    assert_eq!(unique.len(), 100);
}

#[test]
fn test_colliding_generator_still_yields_unique_ids() {
    let mut editor = FormEditor::builder().with_id_generator(StuckIds).build();
    for _ in 0..5 {
        let _ = editor.add_field_of(FieldType::Number);
    }
    let unique: HashSet<_> = editor.fields().iter().map(|f| &f.id).collect();
    assert_eq!(unique.len(), 5);
    assert_eq!(editor.fields()[0].id.as_str(), "same");
}

#[test]
fn test_add_field_rejects_unsupported_type() {
    let mut editor = create_abc_editor();
    let revision = editor.revision();

    let err = editor.add_field("signature").unwrap_err();
    assert_eq!(
        err,
        EditorError::FieldTypeUnsupported {
            type_name: "signature".to_string()
        }
    );
    assert_eq!(ids(&editor), ["a", "b", "c"]);
    assert_eq!(editor.revision(), revision);
}

#[test]
fn test_add_field_with_type_alias() {
    let mut editor = FormEditor::builder()
        .with_type_alias("dropdown", FieldType::Select)
        .with_default_options(["Red", "Green", "Blue"])
        .build();

    let id = editor.add_field("dropdown").unwrap().value;
    let field = editor.field(&id).unwrap();
    assert_eq!(field.field_type, FieldType::Select);
    assert_eq!(field.options.as_ref().unwrap().len(), 3);
    assert_eq!(field.label, "New select field");
}

#[test]
fn test_update_field_merges_and_keeps_id() {
    let mut editor = create_abc_editor();
    let b = FieldId::from("b");

    let applied = editor
        .update_field(
            &b,
            FieldPatch::default()
                .label("Company")
                .placeholder("Acme Inc.")
                .required(true),
        )
        .unwrap();
    assert!(applied.value);
    assert!(applied.events.is_empty());

    let field = editor.field(&b).unwrap();
    assert_eq!(field.id, b);
    assert_eq!(field.label, "Company");
    assert_eq!(field.placeholder, "Acme Inc.");
    assert!(field.required);
    assert_eq!(ids(&editor), ["a", "b", "c"]);
}

#[test]
fn test_update_unknown_field_is_noop() {
    let mut editor = create_abc_editor();
    let before = editor.fields().to_vec();
    let revision = editor.revision();

    let applied = editor
        .update_field(&FieldId::from("zzz"), FieldPatch::default().label("x"))
        .unwrap();
    assert!(!applied.value);
    assert_eq!(editor.fields(), before.as_slice());
    assert_eq!(editor.revision(), revision);
}

#[test]
fn test_update_type_to_choice_resets_options() {
    let mut editor = create_abc_editor();
    let a = FieldId::from("a");
    let _ = editor
        .update_field(&a, FieldPatch::default().required(true))
        .unwrap();

    let _ = editor
        .update_field(&a, FieldPatch::default().field_type(FieldType::Radio))
        .unwrap();
    let field = editor.field(&a).unwrap();
    assert_eq!(field.field_type, FieldType::Radio);
    assert_eq!(
        field.options,
        Some(vec!["Option 1".to_string(), "Option 2".to_string()])
    );
    assert!(field.required, "required survives a type change");

    let _ = editor
        .update_field(&a, FieldPatch::default().field_type(FieldType::Textarea))
        .unwrap();
    assert_eq!(editor.field(&a).unwrap().options, None);
}

#[test]
fn test_update_type_with_explicit_options() {
    let mut editor = create_abc_editor();
    let a = FieldId::from("a");
    let _ = editor
        .update_field(
            &a,
            FieldPatch::default()
                .field_type(FieldType::Select)
                .options(["Small", "Large"]),
        )
        .unwrap();
    assert_eq!(
        editor.field(&a).unwrap().options,
        Some(vec!["Small".to_string(), "Large".to_string()])
    );
}

#[test]
fn test_update_options_on_text_field_are_dropped() {
    let mut editor = create_abc_editor();
    let a = FieldId::from("a");
    let applied = editor
        .update_field(&a, FieldPatch::default().options(["x"]))
        .unwrap();
    assert!(applied.value);
    assert_eq!(editor.field(&a).unwrap().options, None);
}

#[test]
fn test_update_empty_options_on_choice_field_rejected() {
    let mut editor = FormEditor::new();
    let id = editor.add_field_of(FieldType::Select).value;
    let revision = editor.revision();

    let err = editor
        .update_field(&id, FieldPatch::default().options(Vec::<String>::new()))
        .unwrap_err();
    assert!(matches!(err, EditorError::InvalidOptions { .. }));
    assert_eq!(editor.field(&id).unwrap().options.as_ref().unwrap().len(), 2);
    assert_eq!(editor.revision(), revision);
}

#[test]
fn test_delete_field_is_idempotent() {
    let mut once = create_abc_editor();
    let mut twice = create_abc_editor();
    let b = FieldId::from("b");

    let first = once.delete_field(&b);
    assert!(first.value);
    assert_eq!(first.events[0].title, "Field deleted");

    let _ = twice.delete_field(&b);
    let second = twice.delete_field(&b);
    assert!(!second.value);
    assert!(second.events.is_empty());

    assert_eq!(once.fields(), twice.fields());
    assert_eq!(once.selected_field_id(), twice.selected_field_id());
    assert_eq!(ids(&once), ["a", "c"]);
}

#[test]
fn test_delete_selected_field_clears_selection() {
    let mut editor = FormEditor::new();
    let first = editor.add_field_of(FieldType::Text).value;
    let second = editor.add_field_of(FieldType::Text).value;
    assert_eq!(editor.selected_field_id(), Some(&second));

    let _ = editor.delete_field(&first);
    assert_eq!(editor.selected_field_id(), Some(&second));

    let _ = editor.delete_field(&second);
    assert_eq!(editor.selected_field_id(), None);
    assert!(editor.selected_field().is_none());
}

#[test]
fn test_move_field_up_swaps_neighbours() {
    let mut editor = create_abc_editor();
    let applied = editor.move_field(&FieldId::from("b"), Direction::Up);
    assert!(applied.value);
    assert_eq!(ids(&editor), ["b", "a", "c"]);
    assert_eq!(editor.fields()[0].label, "Field b");
}

#[test]
fn test_move_field_down() {
    let mut editor = create_abc_editor();
    let _ = editor.move_field(&FieldId::from("a"), Direction::Down);
    assert_eq!(ids(&editor), ["b", "a", "c"]);
}

#[test]
fn test_move_field_at_boundaries_is_noop() {
    let mut editor = create_abc_editor();
    let revision = editor.revision();

    assert!(!editor.move_field(&FieldId::from("a"), Direction::Up).value);
    assert!(!editor.move_field(&FieldId::from("c"), Direction::Down).value);
    assert!(!editor.move_field(&FieldId::from("x"), Direction::Down).value);
    assert_eq!(ids(&editor), ["a", "b", "c"]);
    assert_eq!(editor.revision(), revision);
}

#[test]
fn test_select_field() {
    let mut editor = create_abc_editor();
    assert!(editor.select_field(Some(&FieldId::from("c"))));
    assert_eq!(editor.selected_field().unwrap().label, "Field c");

    assert!(!editor.select_field(Some(&FieldId::from("missing"))));
    assert_eq!(editor.selected_field_id(), Some(&FieldId::from("c")));

    assert!(editor.select_field(None));
    assert_eq!(editor.selected_field_id(), None);
}

#[test]
fn test_duplicate_field_inserts_after_original() {
    let mut editor = create_abc_editor();
    let applied = editor.duplicate_field(&FieldId::from("a"));
    let copy_id = applied.value.expect("a exists");

    assert_eq!(editor.fields().len(), 4);
    assert_eq!(editor.fields()[1].id, copy_id);
    assert_eq!(editor.fields()[1].label, "Field a");
    assert_eq!(editor.selected_field_id(), Some(&copy_id));
    assert_eq!(applied.events[0].title, "Field duplicated");

    assert!(editor.duplicate_field(&FieldId::from("nope")).value.is_none());
}
