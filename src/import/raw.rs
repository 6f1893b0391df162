//! Total accessors over the untyped JSON tree
//!
//! Model documents leave most fields optional and occasionally use the wrong
//! JSON type for them. These helpers never fail: a missing key, a `null` or a
//! value of the wrong type all read as absent.

use serde_json::Value;

/// Field `key` of `node`, absent when missing or `null`
pub fn field<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.get(key).filter(|v| !v.is_null())
}

pub fn str_field<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key).and_then(Value::as_str)
}

/// String field that is only present when non-empty
pub fn non_empty_str<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    str_field(node, key).filter(|s| !s.is_empty())
}

pub fn bool_field(node: &Value, key: &str) -> Option<bool> {
    node.get(key).and_then(Value::as_bool)
}

pub fn i64_field(node: &Value, key: &str) -> Option<i64> {
    let value = node.get(key)?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}

/// Elements of an array field; empty when missing or not an array
pub fn array_field<'a>(node: &'a Value, key: &str) -> &'a [Value] {
    node.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// JavaScript-style truthiness: `false`, `0`, `""` and `null` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn truthy_field(node: &Value, key: &str) -> bool {
    node.get(key).is_some_and(is_truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_tolerate_wrong_types() {
        let node = json!({"name": 5, "columns": "nope", "flag": "yes", "level": null});
        assert_eq!(str_field(&node, "name"), None);
        assert!(array_field(&node, "columns").is_empty());
        assert_eq!(bool_field(&node, "flag"), None);
        assert_eq!(i64_field(&node, "level"), None);
        assert!(field(&node, "level").is_none());
        assert!(field(&node, "missing").is_none());
    }

    #[test]
    fn test_accessors_on_non_object() {
        let node = json!([1, 2, 3]);
        assert_eq!(str_field(&node, "name"), None);
        assert!(array_field(&node, "tables").is_empty());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_i64_field_accepts_float() {
        let node = json!({"a": 1500, "b": 1500.0});
        assert_eq!(i64_field(&node, "a"), Some(1500));
        assert_eq!(i64_field(&node, "b"), Some(1500));
    }
}
