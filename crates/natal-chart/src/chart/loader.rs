use crate::chart::request::ChartRequest;
use crate::error::ChartRequestError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which document is being rendered; decides what input is mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartVariant {
    /// 600×600 layered wheel; planets and houses are required
    #[default]
    Full,
    /// 400×400 disk with planet labels; nothing is required
    Minimal,
}

const PLANET_KEYS: &[&str] = &["planet_positions", "planets"];
const HOUSE_KEYS: &[&str] = &["house_cusps", "houses"];
const PERSON_KEYS: &[&str] = &["person", "birth_info"];

/// Load a chart request from a JSON string
pub fn load_chart_request_from_json(
    json: &str,
    variant: ChartVariant,
) -> Result<ChartRequest, ChartRequestError> {
    let parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartRequestError::InvalidJson(e.to_string()))?;
    load_chart_request_from_value(parsed, variant)
}

/// Load a chart request from an already parsed JSON value.
///
/// A `{"status": ..., "data": {...}}` envelope as returned by the
/// calculation service is unwrapped first.
pub fn load_chart_request_from_value(
    value: Value,
    variant: ChartVariant,
) -> Result<ChartRequest, ChartRequestError> {
    let value = unwrap_envelope(value);
    validate_chart_request(&value, variant)?;
    serde_json::from_value(value).map_err(|e| ChartRequestError::InvalidFieldValue(e.to_string()))
}

fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut obj)
            if !has_any(&obj, PLANET_KEYS) && obj.get("data").is_some_and(Value::is_object) =>
        {
            obj.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn has_any(obj: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().any(|key| obj.contains_key(*key))
}

/// Validate a chart request before deserializing it
fn validate_chart_request(value: &Value, variant: ChartVariant) -> Result<(), ChartRequestError> {
    let obj = value.as_object().ok_or_else(|| {
        ChartRequestError::InvalidFieldValue("chart request must be an object".to_string())
    })?;

    let required = variant == ChartVariant::Full;
    validate_object_array(obj, PLANET_KEYS, required)?;
    validate_object_array(obj, HOUSE_KEYS, required)?;
    validate_object_array(obj, &["aspects"], false)?;

    if let Some((key, person)) = lookup(obj, PERSON_KEYS)? {
        if !person.is_null() && !person.is_object() {
            return Err(ChartRequestError::InvalidFieldValue(format!(
                "{key} must be an object"
            )));
        }
    }

    if let Some(title) = obj.get("title") {
        if !title.is_null() && !title.is_string() {
            return Err(ChartRequestError::InvalidFieldValue(
                "title must be a string".to_string(),
            ));
        }
    }

    Ok(())
}

/// Find the single key present among a field and its aliases
fn lookup<'a>(
    obj: &'a Map<String, Value>,
    keys: &[&'a str],
) -> Result<Option<(&'a str, &'a Value)>, ChartRequestError> {
    let mut found = keys
        .iter()
        .filter_map(|key| obj.get(*key).map(|value| (*key, value)));
    let first = found.next();
    if let (Some((a, _)), Some((b, _))) = (first, found.next()) {
        return Err(ChartRequestError::InvalidFieldValue(format!(
            "{a} and {b} are the same field, supply only one"
        )));
    }
    Ok(first)
}

fn validate_object_array(
    obj: &Map<String, Value>,
    keys: &[&str],
    required: bool,
) -> Result<(), ChartRequestError> {
    let (key, value) = match lookup(obj, keys)? {
        Some((_, Value::Null)) | None if !required => return Ok(()),
        None => return Err(ChartRequestError::MissingField(keys[0].to_string())),
        Some(found) => found,
    };

    let entries = value.as_array().ok_or_else(|| {
        ChartRequestError::InvalidFieldValue(format!("{key} must be an array"))
    })?;
    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            return Err(ChartRequestError::InvalidFieldValue(format!(
                "{key}[{index}] must be an object"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_is_unwrapped() {
        let value = json!({
            "status": "success",
            "data": { "planets": [], "houses": [] }
        });
        let request = load_chart_request_from_value(value, ChartVariant::Full).unwrap();
        assert_eq!(request.planet_positions, Some(vec![]));
        assert_eq!(request.house_cusps, Some(vec![]));
    }

    #[test]
    fn alias_collision_is_rejected() {
        let value = json!({ "planet_positions": [], "planets": [], "house_cusps": [] });
        let err = load_chart_request_from_value(value, ChartVariant::Full).unwrap_err();
        assert!(matches!(err, ChartRequestError::InvalidFieldValue(_)));
    }

    #[test]
    fn null_required_field_is_invalid_not_missing() {
        let value = json!({ "planet_positions": null, "house_cusps": [] });
        let err = load_chart_request_from_value(value, ChartVariant::Full).unwrap_err();
        assert_eq!(
            err,
            ChartRequestError::InvalidFieldValue("planet_positions must be an array".to_string())
        );
    }

    #[test]
    fn minimal_variant_requires_nothing() {
        let request = load_chart_request_from_value(json!({}), ChartVariant::Minimal).unwrap();
        assert!(request.planet_positions.is_none());
    }
}
