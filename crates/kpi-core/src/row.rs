// File: crates/kpi-core/src/row.rs
// Summary: Host row representation plus the loose string/number coercions applied to its cells.
// Notes:
// - A cell is either a primitive or a wrapper object carrying a `value` member.
// - Coercions never fail; missing or malformed input becomes "undefined" / NaN.

use serde_json::{Map, Value};

/// One record as supplied by the host: field name -> cell.
pub type RawRow = Map<String, Value>;

/// Look up `field`, unwrapping `{ "value": ... }` wrappers.
/// Returns `None` when the key is absent (the host's "undefined").
pub fn cell<'a>(row: &'a RawRow, field: &str) -> Option<&'a Value> {
    let raw = row.get(field)?;
    match raw.get("value") {
        Some(inner) if !inner.is_null() => Some(inner),
        _ => Some(raw),
    }
}

/// Generic string conversion of a cell. Absent cells become the literal "undefined".
pub fn to_display_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => value_to_string(v),
    }
}

fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => number_to_string(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // nulls inside arrays print as empty, like a joined list
        Value::Array(items) => items
            .iter()
            .map(|i| if i.is_null() { String::new() } else { value_to_string(i) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest decimal form; integral values drop the fraction (`97.0` -> "97").
/// Magnitudes from 1e21 up or below 1e-6 switch to exponent form (`1e+21`, `1.5e-7`).
fn number_to_string(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if f == 0.0 {
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        let e = format!("{f:e}");
        match e.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => e,
        }
    } else {
        format!("{f}")
    }
}

/// Numeric coercion of a cell. Anything absent or non-numeric yields NaN.
/// Arrays coerce through their joined text: `[]` -> 0, `[5]` -> 5, `[1, 2]` -> NaN.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => f64::NAN,
        Some(Value::Bool(b)) => if *b { 1.0 } else { 0.0 },
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_number(s),
        Some(Value::Array(items)) if items.len() <= 1 => match items.first() {
            None | Some(Value::Null) => 0.0,
            Some(only) => parse_number(&value_to_string(only)),
        },
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

fn parse_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust accepts spellings ("inf", "nan") a host would reject
    if t.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}
