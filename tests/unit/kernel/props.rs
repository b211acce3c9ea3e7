use super::*;
use serde_json::json;

fn table() -> PropTable {
    let mut t = PropTable::new();
    t.insert(
        "children".to_string(),
        Prop::new(PropKind::ReactNode, json!("Hello")).with_default(json!("Hello")),
    );
    t.insert(
        "disabled".to_string(),
        Prop::new(PropKind::Boolean, json!(false)).with_default(json!(false)),
    );
    let mut size = Prop::new(PropKind::Enum, json!("SIZE.default"));
    size.options = Some(json!({"default": "default", "large": "large"}));
    size.enum_name = Some("SIZE".to_string());
    size.description = "Button size".to_string();
    t.insert("size".to_string(), size);
    t
}

#[test]
fn test_truthiness() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!(0.0)));
    assert!(!is_truthy(&json!("")));
    assert!(is_truthy(&json!("0")));
    assert!(is_truthy(&json!(-1)));
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!({})));
}

#[test]
fn test_updates_replace_values_and_keep_metadata() {
    let state = table();
    let mut updated = BTreeMap::new();
    updated.insert("size".to_string(), json!("SIZE.large"));
    updated.insert("disabled".to_string(), json!(true));

    let props = build_props_obj(&state, &updated);
    let size = &props["size"];
    assert_eq!(size.value, json!("SIZE.large"));
    assert_eq!(size.enum_name.as_deref(), Some("SIZE"));
    assert_eq!(size.description, "Button size");
    assert_eq!(props["disabled"].value, json!(true));
    assert_eq!(props["children"].value, json!("Hello"));

    assert_eq!(state["size"].value, json!("SIZE.default"));
}

#[test]
fn test_falsy_update_resets_to_default() {
    let mut state = table();
    state.get_mut("children").unwrap().value = json!("Edited");

    let mut updated = BTreeMap::new();
    updated.insert("children".to_string(), json!(""));
    updated.insert("size".to_string(), json!(null));

    let props = build_props_obj(&state, &updated);
    assert_eq!(props["children"].value, json!("Hello"));
    assert_eq!(props["size"].value, json!(null));
}

#[test]
fn test_unknown_prop_is_ignored() {
    let mut updated = BTreeMap::new();
    updated.insert("missing".to_string(), json!(1));

    let props = build_props_obj(&table(), &updated);
    assert_eq!(props.len(), 3);
    assert!(!props.contains_key("missing"));
}

#[test]
fn test_prop_serde_uses_camel_case() {
    let prop: Prop = serde_json::from_str(
        r#"{"value": "a", "type": "Enum", "enumName": "KIND", "defaultValue": "b", "stateful": true}"#,
    )
    .expect("parse prop");
    assert_eq!(prop.kind, PropKind::Enum);
    assert_eq!(prop.enum_name.as_deref(), Some("KIND"));
    assert_eq!(prop.default_value, Some(json!("b")));
    assert!(prop.stateful);
    assert!(!prop.hidden);
}
