use crate::ast::*;
use serde_json::{Map as JSMap, Number, Value as JSValue};

/// Trait for converting AST Value Nodes of a GraphQL language document to [serde_json::Value]s.
pub trait ValueFromNode<'a> {
    /// Convert current AST Value Node to a [serde_json::Value] with given [Variables].
    ///
    /// Variables that aren't contained in `variables` are converted to `null`.
    fn to_json(&self, variables: Option<&Variables<'a>>) -> JSValue;
}

impl<'a> ValueFromNode<'a> for Value<'a> {
    #[inline]
    fn to_json(&self, variables: Option<&Variables<'a>>) -> JSValue {
        match self {
            Value::Variable(var) => var.to_json(variables),
            Value::List(list) => list.to_json(variables),
            Value::Object(obj) => obj.to_json(variables),
            Value::Int(node) => node.to_json(variables),
            Value::Float(node) => node.to_json(variables),
            Value::Boolean(node) => node.to_json(variables),
            Value::String(node) => node.to_json(variables),
            Value::Enum(node) => node.to_json(variables),
            Value::Null => JSValue::Null,
        }
    }
}

impl<'a> ValueFromNode<'a> for IntValue<'a> {
    /// Integers outside of the 64-bit range are converted to floats.
    #[inline]
    fn to_json(&self, _variables: Option<&Variables<'a>>) -> JSValue {
        if let Ok(int) = self.value.parse::<i64>() {
            int.into()
        } else {
            float_to_json(self.value)
        }
    }
}

impl<'a> ValueFromNode<'a> for FloatValue<'a> {
    #[inline]
    fn to_json(&self, _variables: Option<&Variables<'a>>) -> JSValue {
        float_to_json(self.value)
    }
}

/// Converts numeric source text to a JSON number, keeping the text as a string when it isn't a
/// finite double.
fn float_to_json(value: &str) -> JSValue {
    value
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(JSValue::Number)
        .unwrap_or_else(|| value.into())
}

impl<'a> ValueFromNode<'a> for BooleanValue {
    #[inline]
    fn to_json(&self, _variables: Option<&Variables<'a>>) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueFromNode<'a> for StringValue<'a> {
    #[inline]
    fn to_json(&self, _variables: Option<&Variables<'a>>) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueFromNode<'a> for EnumValue<'a> {
    #[inline]
    fn to_json(&self, _variables: Option<&Variables<'a>>) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueFromNode<'a> for Variable<'a> {
    #[inline]
    fn to_json(&self, variables: Option<&Variables<'a>>) -> JSValue {
        variables
            .and_then(|vars| vars.get(self.name))
            .map(|value| value.to_json(None))
            .unwrap_or(JSValue::Null)
    }
}

impl<'a> ValueFromNode<'a> for ListValue<'a> {
    #[inline]
    fn to_json(&self, variables: Option<&Variables<'a>>) -> JSValue {
        self.children
            .iter()
            .map(|value| value.to_json(variables))
            .collect::<Vec<JSValue>>()
            .into()
    }
}

impl<'a> ValueFromNode<'a> for ObjectValue<'a> {
    #[inline]
    fn to_json(&self, variables: Option<&Variables<'a>>) -> JSValue {
        self.children
            .iter()
            .map(|field| (field.name.to_string(), field.value.to_json(variables)))
            .collect::<JSMap<String, JSValue>>()
            .into()
    }
}

/// Convert AST Value Node to a [serde_json::Value] with given [Variables].
pub fn value_from_ast_untyped<'a>(value: &Value<'a>, variables: Option<&Variables<'a>>) -> JSValue {
    value.to_json(variables)
}
