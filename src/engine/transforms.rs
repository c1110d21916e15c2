//! Extended transform set.
//!
//! jexl-eval ships only the base JEXL grammar; the string/collection
//! helpers of the "extended" grammar flavor are provided here as
//! registered transforms (`subject|name(args...)`). The subject arrives
//! as the first element of the argument slice.

use anyhow::{bail, Result};
use serde_json::{json, Value};

pub type TransformFn = fn(&[Value]) -> Result<Value>;

/// Transforms registered on every engine.
pub const EXTENDED: &[(&str, TransformFn)] = &[
    ("upper", upper),
    ("lower", lower),
    ("trim", trim),
    ("length", length),
    ("split", split),
    ("join", join),
    ("keys", keys),
    ("values", values),
    ("string", string),
    ("number", number),
];

fn subject<'a>(args: &'a [Value], name: &str) -> Result<&'a Value> {
    match args.first() {
        Some(value) => Ok(value),
        None => bail!("{name} requires a subject"),
    }
}

fn subject_str<'a>(args: &'a [Value], name: &str) -> Result<&'a str> {
    match subject(args, name)?.as_str() {
        Some(s) => Ok(s),
        None => bail!("{name} expects a string subject"),
    }
}

fn upper(args: &[Value]) -> Result<Value> {
    Ok(json!(subject_str(args, "upper")?.to_uppercase()))
}

fn lower(args: &[Value]) -> Result<Value> {
    Ok(json!(subject_str(args, "lower")?.to_lowercase()))
}

fn trim(args: &[Value]) -> Result<Value> {
    Ok(json!(subject_str(args, "trim")?.trim()))
}

fn length(args: &[Value]) -> Result<Value> {
    match subject(args, "length")? {
        Value::String(s) => Ok(json!(s.chars().count())),
        Value::Array(items) => Ok(json!(items.len())),
        Value::Object(map) => Ok(json!(map.len())),
        other => bail!("length is not defined for {other}"),
    }
}

fn split(args: &[Value]) -> Result<Value> {
    let s = subject_str(args, "split")?;
    let Some(separator) = args.get(1).and_then(Value::as_str) else {
        bail!("split expects a string separator");
    };
    Ok(json!(s.split(separator).collect::<Vec<_>>()))
}

fn join(args: &[Value]) -> Result<Value> {
    let Some(items) = subject(args, "join")?.as_array() else {
        bail!("join expects an array subject");
    };
    let separator = args.get(1).and_then(Value::as_str).unwrap_or(",");
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(s) => parts.push(s),
            None => bail!("join expects an array of strings"),
        }
    }
    Ok(json!(parts.join(separator)))
}

fn keys(args: &[Value]) -> Result<Value> {
    let Some(map) = subject(args, "keys")?.as_object() else {
        bail!("keys expects an object subject");
    };
    Ok(json!(map.keys().collect::<Vec<_>>()))
}

fn values(args: &[Value]) -> Result<Value> {
    let Some(map) = subject(args, "values")?.as_object() else {
        bail!("values expects an object subject");
    };
    Ok(json!(map.values().collect::<Vec<_>>()))
}

fn string(args: &[Value]) -> Result<Value> {
    let rendered = match subject(args, "string")? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Ok(Value::String(rendered))
}

fn number(args: &[Value]) -> Result<Value> {
    match subject(args, "number")? {
        Value::Number(n) => Ok(Value::Number(n.clone())),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(n) => Ok(json!(n)),
            Err(_) => bail!("number cannot parse {s:?}"),
        },
        other => bail!("number is not defined for {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_strings_arrays_and_objects() {
        assert_eq!(length(&[json!("abc")]).unwrap(), json!(3));
        assert_eq!(length(&[json!([1, 2])]).unwrap(), json!(2));
        assert_eq!(length(&[json!({"a": 1})]).unwrap(), json!(1));
        assert!(length(&[json!(true)]).is_err());
    }

    #[test]
    fn split_and_join_are_inverse_for_string_arrays() {
        let parts = split(&[json!("a,b,c"), json!(",")]).unwrap();
        assert_eq!(parts, json!(["a", "b", "c"]));
        assert_eq!(join(&[parts, json!(",")]).unwrap(), json!("a,b,c"));
    }

    #[test]
    fn join_rejects_mixed_arrays() {
        assert!(join(&[json!(["a", 1])]).is_err());
    }

    #[test]
    fn number_parses_strings_and_passes_numbers_through() {
        assert_eq!(number(&[json!(" 4.5 ")]).unwrap(), json!(4.5));
        assert_eq!(number(&[json!(7)]).unwrap(), json!(7));
        assert!(number(&[json!("seven")]).is_err());
    }

    #[test]
    fn string_renders_non_strings_as_json() {
        assert_eq!(string(&[json!({"a": 1})]).unwrap(), json!("{\"a\":1}"));
        assert_eq!(string(&[json!("as-is")]).unwrap(), json!("as-is"));
    }
}
