//! Persisted Data Sanitization
//!
//! Stored JSON may have been written by an older build or edited by hand.
//! Each element is normalized on its own; bad elements are dropped, never
//! repaired into something the user did not write.

use std::collections::HashSet;

use serde_json::Value;

use crate::domain::{cap_description, Entity, ManhuaItem};

/// Parse the raw slot value. `None` when it is not a JSON array.
pub fn parse_list(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => Some(values),
        _ => None,
    }
}

/// Normalize every element, dropping the ones that cannot be trusted.
/// The first occurrence of an id or a name wins; later repeats are dropped.
pub fn sanitize(values: &[Value], description_limit: usize) -> Vec<ManhuaItem> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    values
        .iter()
        .filter_map(|value| normalize_item(value, description_limit))
        .filter(|item| {
            let fresh = !ids.contains(item.id()) && !names.contains(&item.name_key());
            if fresh {
                ids.insert(item.id().clone());
                names.insert(item.name_key());
            } else {
                log::debug!("[STORAGE] Dropping duplicate record {}", item.id());
            }
            fresh
        })
        .collect()
}

fn normalize_item(value: &Value, description_limit: usize) -> Option<ManhuaItem> {
    let data = value.as_object()?;

    let id = truthy_text(data.get("id"))?;
    let name = truthy_text(data.get("name"))?;
    let status = truthy_text(data.get("status"))?;

    let total = coerce_number(data.get("totalChapters"));
    let current = coerce_number(data.get("currentChapter"));
    if !total.is_finite() || !current.is_finite() {
        return None;
    }

    let total = total.trunc();
    if total < 1.0 || total > f64::from(u32::MAX) {
        return None;
    }
    let total = total as u32;
    let current = current.trunc().clamp(0.0, f64::from(total)) as u32;

    Some(ManhuaItem {
        id,
        name,
        description: cap_description(&loose_text(data.get("description")), description_limit),
        total_chapters: total,
        current_chapter: current,
        status,
        favorite: truthy(data.get("favorite")),
    })
}

/// Mandatory text field: non-empty strings and non-zero numbers pass
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Optional text field, empty when absent
fn loose_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Numeric coercion with the same outcomes as a JS `Number(x)` call for the
/// shapes we store. Missing and structured values are NaN.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => if *b { 1.0 } else { 0.0 },
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
