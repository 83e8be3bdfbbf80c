use serde_json::Value;

/// Keys a translator may put its output under, in priority order.
pub const TRANSLATION_KEYS: &[&str] = &["translatedText", "translated", "result"];

/// Keys an AI responder may put its reply under, in priority order.
pub const REPLY_KEYS: &[&str] = &["reply", "text"];

/// First key in `keys` whose value is a non-empty string.
pub fn first_non_empty(value: &Value, keys: &[&str]) -> Option<String> {
    let object = value.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .filter_map(Value::as_str)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Translated text from a response body.
///
/// Tries the known keys, then falls back to the body itself: a JSON string
/// is unwrapped, anything else is returned as sent. `None` for blank bodies.
pub fn translated_text(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => first_non_empty(&value, TRANSLATION_KEYS).or_else(|| match value {
            Value::String(text) => non_empty(text),
            Value::Null => None,
            _ => non_empty(body.trim().to_string()),
        }),
        Err(_) => non_empty(body.trim().to_string()),
    }
}

/// Reply text from an AI responder body; only the known keys count.
pub fn reply_text(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| first_non_empty(&value, REPLY_KEYS))
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
