use bumpalo::collections::Vec;
use hashbrown::HashMap;
use serde_json::{map::Map as JSMap, Value as JSValue};

use super::ValueFromNode;
use crate::ast::*;
use crate::error::{Error, ErrorType, Result};

/// Convert a [serde_json::Value] object to [Variables].
///
/// `null` is accepted and results in an empty map, since requests may pass `"variables": null`.
pub fn ast_variables_from_value<'a>(ctx: &'a ASTContext, input: &JSValue) -> Result<Variables<'a>> {
    let mut vars = HashMap::new_in(&ctx.arena);
    match input {
        JSValue::Object(obj) => {
            for (key, value) in obj.iter() {
                vars.insert(ctx.alloc_str(key), ast_from_value_untyped(ctx, value));
            }
            Ok(vars)
        }
        JSValue::Null => Ok(vars),
        _ => Err(Error::new(
            "Variables expected but received non-object value",
            Some(ErrorType::GraphQL),
        )),
    }
}

/// Convert [serde_json::Value] to an AST Value Node without casting the JSON value to a type.
///
/// Numbers that fit into a 64-bit integer become [IntValue]s, all others become [FloatValue]s.
pub fn ast_from_value_untyped<'a>(ctx: &'a ASTContext, value: &JSValue) -> Value<'a> {
    match value {
        JSValue::Array(list) => {
            let mut children = Vec::with_capacity_in(list.len(), &ctx.arena);
            for item in list.iter() {
                children.push(ast_from_value_untyped(ctx, item));
            }
            Value::List(ListValue { children })
        }
        JSValue::Object(map) => {
            let mut children = Vec::with_capacity_in(map.len(), &ctx.arena);
            for (key, value) in map.iter() {
                children.push(ObjectField {
                    name: ctx.alloc_str(key),
                    value: ast_from_value_untyped(ctx, value),
                });
            }
            Value::Object(ObjectValue { children })
        }
        JSValue::Number(num) => {
            if let Some(int) = num.as_i64() {
                Value::Int(IntValue {
                    value: ctx.alloc_string(int.to_string()),
                })
            } else if let Some(int) = num.as_u64() {
                Value::Int(IntValue {
                    value: ctx.alloc_string(int.to_string()),
                })
            } else {
                let float = num.as_f64().filter(|x| x.is_finite()).unwrap_or(0.0);
                // Debug formatting always keeps a fraction or an exponent
                let value = ctx.alloc_string(format!("{:?}", float));
                let format = if value.contains(['e', 'E']) {
                    FloatFormat::Exponential
                } else {
                    FloatFormat::FixedPoint
                };
                Value::Float(FloatValue { value, format })
            }
        }
        JSValue::Bool(x) => Value::Boolean((*x).into()),
        JSValue::String(str) => Value::String(ctx.alloc_str(str).into()),
        JSValue::Null => Value::Null,
    }
}

/// Convert [Variables] back to a [serde_json::Value] object.
pub fn value_from_ast_variables<'a>(variables: &Variables<'a>) -> JSMap<String, JSValue> {
    let mut map = JSMap::new();
    for (key, value) in variables.iter() {
        map.insert(key.to_string(), value.to_json(None));
    }
    map
}
