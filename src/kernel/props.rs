//! Prop tables for the playground knobs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropKind {
    String,
    ReactNode,
    Boolean,
    Number,
    Enum,
    Array,
    Object,
    Function,
    Ref,
    Date,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prop {
    #[serde(default)]
    pub value: Value,
    #[serde(rename = "type")]
    pub kind: PropKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_props: Option<Value>,
    #[serde(default)]
    pub stateful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_hook: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl Prop {
    pub fn new(kind: PropKind, value: Value) -> Self {
        Self {
            value,
            kind,
            options: None,
            enum_name: None,
            description: String::new(),
            placeholder: None,
            hidden: false,
            names: Vec::new(),
            shared_props: None,
            stateful: false,
            prop_hook: None,
            imports: None,
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }
}

pub type PropTable = BTreeMap<String, Prop>;

/// `null`, `false`, zero and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Copies `state` and applies `updated` on top. A falsy update resets the prop
/// to its default value. Updates for unknown props are ignored.
pub fn build_props_obj(state: &PropTable, updated: &BTreeMap<String, Value>) -> PropTable {
    let mut props = state.clone();
    for (name, value) in updated {
        let Some(prop) = props.get_mut(name) else {
            tracing::warn!(prop = %name, "update for unknown prop ignored");
            continue;
        };
        prop.value = if is_truthy(value) {
            value.clone()
        } else {
            prop.default_value.clone().unwrap_or(Value::Null)
        };
    }
    props
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/props.rs"]
mod tests;
