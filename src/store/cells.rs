use serde_json::Value;

/// A typed value bound for a single worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// Encodes a nested JSON value (object, array, string, number, bool, null)
/// into a single textual cell value. Lossless; [`decode_json`] is the exact
/// inverse.
pub fn encode_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("null"))
}

/// Decodes a cell value produced by [`encode_json`]. Returns `None` if the
/// text is not valid JSON.
pub fn decode_json(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Best-effort typing for raw cell text read back from a sheet: booleans and
/// numbers are recovered, everything else stays a string. Serialized nested
/// fields are deliberately left as their textual encoding.
pub fn infer(text: &str) -> Value {
    match text {
        "TRUE" => return Value::Bool(true),
        "FALSE" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(n) = text.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(n) {
            return Value::Number(number);
        }
    }
    Value::String(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_map_round_trips_exactly() {
        let facilities = json!({"wifi": true, "pool": false});
        let encoded = encode_json(&facilities);
        assert_eq!(decode_json(&encoded), Some(facilities));
    }

    #[test]
    fn nested_list_round_trips_exactly() {
        let images = json!(["https://example.com/a.jpg", "https://example.com/b.jpg"]);
        let encoded = encode_json(&images);
        assert_eq!(decode_json(&encoded), Some(images));
    }

    #[test]
    fn infer_recovers_numbers_and_booleans() {
        assert_eq!(infer("4.5"), json!(4.5));
        assert_eq!(infer("0"), json!(0.0));
        assert_eq!(infer("TRUE"), json!(true));
        assert_eq!(infer("FALSE"), json!(false));
        assert_eq!(infer("HTL-001"), json!("HTL-001"));
        assert_eq!(infer(""), json!(""));
    }

    #[test]
    fn infer_leaves_serialized_fields_as_text() {
        let encoded = encode_json(&json!({"wifi": true}));
        assert_eq!(infer(&encoded), Value::String(encoded.clone()));
    }
}
